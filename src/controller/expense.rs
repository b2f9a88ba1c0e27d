use anyhow::Context as _;
use chrono::NaiveDate;
use log::info;

use crate::expense::Expense;
use crate::report::ExpenseListing;
use crate::store::{Backend, Repository};
use crate::view;

use super::Context;

pub(crate) fn execute_add<B: Backend>(repo: &mut Repository<B>, ctx: &Context, name: &str, amount: f64, category: &str, date: NaiveDate, wallet: &str) -> anyhow::Result<String> {
    let expense = Expense::new(name, amount, category, date, wallet);
    let id = expense.id.clone();
    repo.add_expense(&ctx.user, expense).context("Unable to save expense")?;
    Ok(format!("Added expense {id}"))
}

pub(crate) fn execute_list<B: Backend>(repo: &Repository<B>, ctx: &Context, category: Option<&str>) -> anyhow::Result<String> {
    let expenses = repo.load_expenses(&ctx.user).context("Unable to load expenses")?;
    let settings = repo.load_settings(&ctx.user).context("Unable to load settings")?;

    let listing = ExpenseListing::build(&expenses, category);
    let table = view::listing_table(&listing, &settings.currency);
    Ok(format!("{table}\n{}", view::listing_caption(&listing, &settings.currency)))
}

pub(crate) fn execute_delete<B: Backend>(repo: &mut Repository<B>, ctx: &Context, id: &str) -> anyhow::Result<String> {
    let deleted = repo.delete_expense(&ctx.user, id).context("Unable to delete expense")?;
    if deleted == 0 {
        info!("No expense with id {id}, nothing deleted.");
    }
    Ok(format!("{deleted} expenses deleted."))
}
