//! Expense aggregation. Everything here is a pure function of its inputs; the current date is passed
//! in by the caller.

mod summary;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::expense::Expense;
use crate::util;

pub(crate) use summary::{Dashboard, ExpenseListing, Summary};

/// Category reported when there is nothing to rank
pub(crate) const NO_CATEGORY: &str = "None";

/// Date window applied before aggregating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Period {
    Today,
    Month,
    All,
}

impl Period {
    pub(crate) fn matches(&self, expense: &Expense, today: NaiveDate) -> bool {
        match self {
            Period::All => true,
            Period::Today => expense.calendar_date() == Some(today),
            Period::Month => match expense.calendar_date() {
                Some(date) => util::same_month(date, today),
                None => false,
            },
        }
    }

    pub(crate) fn label(&self, today: NaiveDate) -> String {
        match self {
            Period::Today => format!("Today {}", util::format_date(today)),
            Period::Month => "This month".to_string(),
            Period::All => "All time".to_string(),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(Period::Today),
            "month" => Ok(Period::Month),
            "all" => Ok(Period::All),
            _ => Err(format!("Invalid period: {}", s)),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Today => write!(f, "today"),
            Period::Month => write!(f, "month"),
            Period::All => write!(f, "all"),
        }
    }
}

/// Denominator used to normalise percentage bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReferenceMode {
    /// Amount of the top category
    Top,
    /// Largest category amount, whatever its sign
    Max,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: String,
    pub(crate) amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PercentBar {
    pub(crate) category: String,
    pub(crate) amount: f64,
    pub(crate) percent: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Report {
    pub(crate) filtered: Vec<Expense>,
    pub(crate) total: f64,
    pub(crate) count: usize,
    /// In order of first appearance
    pub(crate) by_category: Vec<CategoryTotal>,
    pub(crate) top_category: String,
    pub(crate) top_amount: f64,
    pub(crate) percent_bars: Vec<PercentBar>,
}

impl Report {
    #[cfg(test)]
    pub(crate) fn category_amount(&self, category: &str) -> Option<f64> {
        self.by_category.iter().find(|c| c.category == category).map(|c| c.amount)
    }
}

/// Filter `expenses` to `period` and compute totals, the per-category breakdown, the top category and
/// percentage bars against the chosen reference.
pub(crate) fn aggregate(expenses: &[Expense], period: Period, reference: ReferenceMode, today: NaiveDate) -> Report {
    let filtered: Vec<Expense> = expenses.iter().filter(|e| period.matches(e, today)).cloned().collect();

    let total = filtered.iter().map(|e| e.amount).fold(0.0, |total, amount| total + amount);
    let by_category = group_by_category(&filtered);

    // A category must beat the running value strictly, starting from zero
    let mut top_category = NO_CATEGORY;
    let mut top_amount = 0.0;
    for c in &by_category {
        if c.amount > top_amount {
            top_amount = c.amount;
            top_category = c.category.as_str();
        }
    }
    let top_category = top_category.to_string();

    let reference_amount = match reference {
        ReferenceMode::Top => top_amount,
        ReferenceMode::Max => by_category.iter().map(|c| c.amount).fold(None, |max: Option<f64>, amount| {
            Some(max.map_or(amount, |m| m.max(amount)))
        }).unwrap_or(0.0),
    };

    let percent_bars = by_category.iter().map(|c| PercentBar {
        category: c.category.clone(),
        amount: c.amount,
        percent: percent_of(c.amount, reference_amount),
    }).collect();

    Report {
        count: filtered.len(),
        filtered,
        total,
        by_category,
        top_category,
        top_amount,
        percent_bars,
    }
}

fn group_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = vec![];
    for e in expenses {
        let label = e.category_label();
        match totals.iter_mut().find(|c| c.category == label) {
            Some(entry) => entry.amount += e.amount,
            None => totals.push(CategoryTotal { category: label.to_string(), amount: e.amount }),
        }
    }

    totals
}

/// `value / reference` as a whole percentage, halves rounded up. Zero reference gives 0.
fn percent_of(value: f64, reference: f64) -> i64 {
    if reference == 0.0 {
        return 0;
    }
    let percent = (value / reference * 100.0 + 0.5).floor();
    if percent.is_finite() { percent as i64 } else { 0 }
}

/// Up to `n` expenses, newest date first. Undated expenses go last; among equal dates the record
/// added later comes first.
pub(crate) fn recent(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted: Vec<&Expense> = expenses.iter().rev().collect();
    // Stable sort over the reversed list keeps later insertions ahead on ties
    sorted.sort_by(|a, b| b.calendar_date().cmp(&a.calendar_date()));
    sorted.into_iter().take(n).cloned().collect()
}

/// Monthly income left after this month's spending. May be negative.
pub(crate) fn net_savings(month_income: f64, month_total: f64) -> f64 {
    month_income - month_total
}
