//! Terminal rendering of reports, expenses, wallets and settings

use comfy_table::{Cell, CellAlignment, Table, TableComponent};

use crate::expense::Expense;
use crate::report::{Dashboard, ExpenseListing, PercentBar, Summary};
use crate::settings::Settings;
use crate::wallet::Wallet;

const BAR_WIDTH: usize = 20;

/// Format an amount as `<currency> <amount>` with 2 decimal places
pub(crate) fn format_money(currency: &str, amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{currency} {amount:.2}")
}

/// Text progress bar, `percent` clamped to 0..=100
fn bar(percent: i64) -> String {
    let percent = percent.clamp(0, 100) as usize;
    let filled = (percent * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table
}

fn money_cell(currency: &str, amount: f64) -> Cell {
    Cell::new(format_money(currency, amount)).set_alignment(CellAlignment::Right)
}

/// Key/value table used for headline numbers
fn figures_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = new_table();
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value).set_alignment(CellAlignment::Right)]);
    }
    table
}

fn category_table(bars: &[PercentBar], currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Category", "Amount", "", "%"]);
    if bars.is_empty() {
        table.add_row(vec!["No data yet"]);
        return table;
    }

    for b in bars {
        table.add_row(vec![
            Cell::new(b.category.as_str()),
            money_cell(currency, b.amount),
            Cell::new(bar(b.percent)),
            Cell::new(b.percent).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Date, name, category and amount of each expense; `with_wallet` adds the wallet and id columns
fn expense_table(expenses: &[Expense], currency: &str, with_wallet: bool) -> Table {
    let mut table = new_table();
    if with_wallet {
        table.set_header(vec!["ID", "Date", "Name", "Category", "Wallet", "Amount"]);
    } else {
        table.set_header(vec!["Date", "Name", "Category", "Amount"]);
    }

    if expenses.is_empty() {
        table.add_row(vec!["No expenses yet"]);
        return table;
    }

    for e in expenses {
        let mut row = vec![];
        if with_wallet {
            row.push(Cell::new(e.id.as_str()));
        }
        row.push(Cell::new(e.date.as_str()));
        row.push(Cell::new(e.name.as_str()));
        row.push(Cell::new(e.category.as_str()));
        if with_wallet {
            row.push(Cell::new(e.wallet.as_str()));
        }
        row.push(money_cell(currency, e.amount));
        table.add_row(row);
    }
    table
}

pub(crate) fn dashboard_tables(dashboard: &Dashboard, settings: &Settings) -> Vec<Table> {
    let currency = settings.currency.as_str();
    let report = &dashboard.report;
    // Amount next to the top category only makes sense when there is one
    let top_amount = if report.top_amount > 0.0 {
        format_money(currency, report.top_amount)
    } else {
        String::new()
    };

    let figures = figures_table(vec![
        ("Period", dashboard.label.clone()),
        ("Total spent", format_money(currency, report.total)),
        ("Transactions", report.count.to_string()),
        ("Top category", format!("{} {}", report.top_category, top_amount).trim_end().to_string()),
        ("Wallets", dashboard.wallet_count.to_string()),
    ]);

    vec![
        figures,
        category_table(&report.percent_bars, currency),
        expense_table(&dashboard.recent, currency, false),
    ]
}

pub(crate) fn summary_tables(summary: &Summary, settings: &Settings) -> Vec<Table> {
    let currency = settings.currency.as_str();
    let figures = figures_table(vec![
        ("Total spent", format_money(currency, summary.total)),
        ("Spent this month", format_money(currency, summary.month_total)),
        ("Savings this month", format_money(currency, summary.net_savings)),
        ("Monthly income", format_money(currency, summary.month_income)),
    ]);

    vec![
        figures,
        category_table(&summary.month.percent_bars, currency),
        expense_table(&summary.expenses, currency, false),
    ]
}

pub(crate) fn listing_table(listing: &ExpenseListing, currency: &str) -> Table {
    expense_table(&listing.rows, currency, true)
}

/// Caption under the expenses list, e.g. `3 expenses, total $ 35.00`
pub(crate) fn listing_caption(listing: &ExpenseListing, currency: &str) -> String {
    format!("{} expenses, total {}", listing.count(), format_money(currency, listing.total))
}

pub(crate) fn wallet_table(wallets: &[Wallet], currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Number", "Balance"]);
    if wallets.is_empty() {
        table.add_row(vec!["No wallets yet"]);
        return table;
    }

    for w in wallets {
        table.add_row(vec![
            Cell::new(w.id.as_str()),
            Cell::new(w.name.as_str()),
            Cell::new(w.number.as_str()),
            money_cell(currency, w.balance),
        ]);
    }
    table
}

pub(crate) fn settings_table(settings: &Settings, user: &str) -> Table {
    figures_table(vec![
        ("User", user.to_string()),
        ("Name", settings.display_name(user).to_string()),
        ("Email", settings.email.clone()),
        ("Currency", settings.currency.clone()),
        ("Monthly income", format_money(&settings.currency, settings.month_income)),
        ("Dark mode", settings.dark_mode.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::report::Period;

    fn expense(id: &str, date: &str, amount: f64, category: &str) -> Expense {
        Expense {
            id: id.to_string(),
            name: format!("item {id}"),
            amount,
            category: category.to_string(),
            date: date.to_string(),
            wallet: String::new(),
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", 35.0), "$ 35.00");
        assert_eq!(format_money("€", -35.456), "€ -35.46");
        assert_eq!(format_money("$", f64::NAN), "$ 0.00");
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0), "░".repeat(20));
        assert_eq!(bar(100), "█".repeat(20));
        assert_eq!(bar(250), "█".repeat(20));
        assert_eq!(bar(-10), "░".repeat(20));
        assert_eq!(bar(75), format!("{}{}", "█".repeat(15), "░".repeat(5)));
    }

    #[test]
    fn test_dashboard_tables() {
        let expenses = vec![
            expense("1", "2024-01-01", 10.0, "Food"),
            expense("2", "2024-01-02", 20.0, "Transport"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let dashboard = Dashboard::build(&expenses, &[], Period::All, 5, today);
        let rendered: Vec<String> = dashboard_tables(&dashboard, &Settings::default()).iter().map(|t| t.to_string()).collect();

        assert!(rendered[0].contains("$ 30.00"));
        assert!(rendered[0].contains("Transport $ 20.00"));
        assert!(rendered[1].contains("Food"));
        assert!(rendered[1].contains("50"));
        assert!(rendered[2].contains("item 2"));
    }

    #[test]
    fn test_empty_tables() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let dashboard = Dashboard::build(&[], &[], Period::Today, 5, today);
        let rendered: Vec<String> = dashboard_tables(&dashboard, &Settings::default()).iter().map(|t| t.to_string()).collect();

        assert!(rendered[0].contains("None"));
        assert!(rendered[1].contains("No data yet"));
        assert!(rendered[2].contains("No expenses yet"));
        assert!(wallet_table(&[], "$").to_string().contains("No wallets yet"));
    }

    #[test]
    fn test_listing_caption() {
        let expenses = vec![expense("1", "2024-01-01", 10.0, "Food"), expense("2", "2024-01-01", 2.5, "Food")];
        let listing = ExpenseListing::build(&expenses, None);
        assert_eq!(listing_caption(&listing, "$"), "2 expenses, total $ 12.50");
    }

    #[test]
    fn test_settings_table_shows_user_for_default_name() {
        let rendered = settings_table(&Settings::default(), "alice").to_string();
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("Admin User"));
    }
}
