use chrono::NaiveDate;

use crate::expense::Expense;
use crate::settings::Settings;
use crate::wallet::Wallet;

use super::{aggregate, net_savings, recent, Period, ReferenceMode, Report};

/// Everything shown on the dashboard for one period
#[derive(Debug)]
pub(crate) struct Dashboard {
    pub(crate) label: String,
    pub(crate) report: Report,
    pub(crate) wallet_count: usize,
    /// Newest expenses overall, not limited to the period
    pub(crate) recent: Vec<Expense>,
}

impl Dashboard {
    pub(crate) fn build(expenses: &[Expense], wallets: &[Wallet], period: Period, recent_count: usize, today: NaiveDate) -> Dashboard {
        Dashboard {
            label: period.label(today),
            report: aggregate(expenses, period, ReferenceMode::Top, today),
            wallet_count: wallets.len(),
            recent: recent(expenses, recent_count),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Summary {
    pub(crate) total: f64,
    pub(crate) month_total: f64,
    pub(crate) month_income: f64,
    pub(crate) net_savings: f64,
    /// This month's spending by category, bars relative to the largest category
    pub(crate) month: Report,
    /// All expenses, newest first
    pub(crate) expenses: Vec<Expense>,
}

impl Summary {
    pub(crate) fn build(expenses: &[Expense], settings: &Settings, today: NaiveDate) -> Summary {
        let all = aggregate(expenses, Period::All, ReferenceMode::Max, today);
        let month = aggregate(expenses, Period::Month, ReferenceMode::Max, today);

        Summary {
            total: all.total,
            month_total: month.total,
            month_income: settings.month_income,
            net_savings: net_savings(settings.month_income, month.total),
            month,
            expenses: recent(expenses, expenses.len()),
        }
    }
}

/// Expenses list, optionally restricted to one category
#[derive(Debug)]
pub(crate) struct ExpenseListing {
    pub(crate) rows: Vec<Expense>,
    pub(crate) total: f64,
}

impl ExpenseListing {
    /// `category` is compared with the stored category as is. `None` or `all` keeps every row.
    pub(crate) fn build(expenses: &[Expense], category: Option<&str>) -> ExpenseListing {
        let rows: Vec<Expense> = match category {
            None | Some("all") => expenses.to_vec(),
            Some(category) => expenses.iter().filter(|e| e.category == category).cloned().collect(),
        };
        let total = rows.iter().map(|e| e.amount).fold(0.0, |total, amount| total + amount);

        ExpenseListing { rows, total }
    }

    pub(crate) fn count(&self) -> usize {
        self.rows.len()
    }
}
