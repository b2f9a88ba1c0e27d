use chrono::NaiveDate;
use clap::builder::BoolishValueParser;
use clap::Subcommand;

use crate::report::Period;
use crate::store::{Backend, Repository};
use crate::util;

mod expense;
mod report;
mod settings;
mod wallet;

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Spending for a period, top category and the most recent expenses
    Dashboard {
        /// Date window, defaults to `default_period` from the config
        #[arg(short, long, value_enum)]
        period: Option<Period>,
    },
    /// Overall and monthly totals, savings against monthly income and every expense
    Summary,
    /// Add, list or delete expenses
    #[command(subcommand)]
    Expense(ExpenseCommand),
    /// Add, list or delete wallets
    #[command(subcommand)]
    Wallet(WalletCommand),
    /// Show or change profile and finance settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand, Debug)]
pub(crate) enum ExpenseCommand {
    /// Record a new expense
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long, default_value = "Other")]
        category: String,
        /// YYYY-MM-DD, defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        wallet: String,
    },
    /// List expenses with their count and total
    List {
        /// Only show expenses in this category
        #[arg(long)]
        category: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum WalletCommand {
    /// Register a wallet, card or account
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        number: String,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        balance: f64,
    },
    List,
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum SettingsCommand {
    Show,
    Set {
        #[arg(long)]
        currency: Option<String>,
        /// Monthly income used to compute savings
        #[arg(long, allow_negative_numbers = true)]
        income: Option<f64>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
        dark_mode: Option<bool>,
    },
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    util::parse_date(s).ok_or_else(|| format!("Invalid date {s}, expected YYYY-MM-DD"))
}

/// Everything a command needs besides the repository
pub(crate) struct Context {
    pub(crate) user: String,
    pub(crate) recent_count: usize,
    pub(crate) default_period: Period,
    pub(crate) today: NaiveDate,
}

/// Run a command against the repository and return the text to print
pub(crate) fn run_command<B: Backend>(repo: &mut Repository<B>, ctx: &Context, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Dashboard { period } => {
            report::execute_dashboard(repo, ctx, period.unwrap_or(ctx.default_period))
        }
        Command::Summary => report::execute_summary(repo, ctx),
        Command::Expense(cmd) => match cmd {
            ExpenseCommand::Add { name, amount, category, date, wallet } => {
                expense::execute_add(repo, ctx, &name, amount, &category, date.unwrap_or(ctx.today), &wallet)
            }
            ExpenseCommand::List { category } => expense::execute_list(repo, ctx, category.as_deref()),
            ExpenseCommand::Delete { id } => expense::execute_delete(repo, ctx, &id),
        },
        Command::Wallet(cmd) => match cmd {
            WalletCommand::Add { name, number, balance } => wallet::execute_add(repo, ctx, &name, &number, balance),
            WalletCommand::List => wallet::execute_list(repo, ctx),
            WalletCommand::Delete { id } => wallet::execute_delete(repo, ctx, &id),
        },
        Command::Settings(cmd) => match cmd {
            SettingsCommand::Show => settings::execute_show(repo, ctx),
            SettingsCommand::Set { currency, income, name, email, dark_mode } => {
                let update = settings::SettingsUpdate { currency, income, name, email, dark_mode };
                settings::execute_set(repo, ctx, update)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;

    fn context() -> Context {
        Context {
            user: "alice".to_string(),
            recent_count: 5,
            default_period: Period::Month,
            today: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    fn add(repo: &mut Repository<MemoryBackend>, name: &str, amount: f64, category: &str, date: Option<NaiveDate>) {
        let command = Command::Expense(ExpenseCommand::Add {
            name: name.to_string(),
            amount,
            category: category.to_string(),
            date,
            wallet: String::new(),
        });
        run_command(repo, &context(), command).unwrap();
    }

    #[test]
    fn test_add_then_dashboard() {
        let mut repo = Repository::new(MemoryBackend::new());
        add(&mut repo, "Lunch", 12.0, "Food", None);
        add(&mut repo, "Train", 30.0, "Transport", NaiveDate::from_ymd_opt(2023, 12, 1));

        // default period is this month, so only lunch counts
        let out = run_command(&mut repo, &context(), Command::Dashboard { period: None }).unwrap();
        assert!(out.contains("This month"));
        assert!(out.contains("$ 12.00"));
        assert!(out.contains("Train"));

        let out = run_command(&mut repo, &context(), Command::Dashboard { period: Some(Period::All) }).unwrap();
        assert!(out.contains("All time"));
        assert!(out.contains("$ 42.00"));
    }

    #[test]
    fn test_summary_uses_monthly_income() {
        let mut repo = Repository::new(MemoryBackend::new());
        add(&mut repo, "Lunch", 35.0, "Food", None);
        let set = Command::Settings(SettingsCommand::Set {
            currency: None,
            income: Some(1000.0),
            name: None,
            email: None,
            dark_mode: None,
        });
        run_command(&mut repo, &context(), set).unwrap();

        let out = run_command(&mut repo, &context(), Command::Summary).unwrap();
        assert!(out.contains("$ 965.00"));
        assert!(out.contains("$ 1000.00"));
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg("2024-02-29"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(parse_date_arg("29/02/2024").is_err());
    }
}
