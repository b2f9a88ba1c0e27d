use anyhow::Context as _;

use crate::report::{Dashboard, Period, Summary};
use crate::store::{Backend, Repository};
use crate::view;

use super::Context;

pub(crate) fn execute_dashboard<B: Backend>(repo: &Repository<B>, ctx: &Context, period: Period) -> anyhow::Result<String> {
    let expenses = repo.load_expenses(&ctx.user).context("Unable to load expenses")?;
    let wallets = repo.load_wallets(&ctx.user).context("Unable to load wallets")?;
    let settings = repo.load_settings(&ctx.user).context("Unable to load settings")?;

    let dashboard = Dashboard::build(&expenses, &wallets, period, ctx.recent_count, ctx.today);
    Ok(join_tables(view::dashboard_tables(&dashboard, &settings)))
}

pub(crate) fn execute_summary<B: Backend>(repo: &Repository<B>, ctx: &Context) -> anyhow::Result<String> {
    let expenses = repo.load_expenses(&ctx.user).context("Unable to load expenses")?;
    let settings = repo.load_settings(&ctx.user).context("Unable to load settings")?;

    let summary = Summary::build(&expenses, &settings, ctx.today);
    Ok(join_tables(view::summary_tables(&summary, &settings)))
}

fn join_tables(tables: Vec<comfy_table::Table>) -> String {
    tables.iter().map(|t| t.to_string()).collect::<Vec<String>>().join("\n\n")
}
