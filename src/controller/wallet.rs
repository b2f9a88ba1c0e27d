use anyhow::Context as _;
use log::info;

use crate::store::{Backend, Repository};
use crate::view;
use crate::wallet::Wallet;

use super::Context;

pub(crate) fn execute_add<B: Backend>(repo: &mut Repository<B>, ctx: &Context, name: &str, number: &str, balance: f64) -> anyhow::Result<String> {
    let wallet = Wallet::new(name, number, balance);
    let id = wallet.id.clone();
    repo.add_wallet(&ctx.user, wallet).context("Unable to save wallet")?;
    Ok(format!("Added wallet {id}"))
}

pub(crate) fn execute_list<B: Backend>(repo: &Repository<B>, ctx: &Context) -> anyhow::Result<String> {
    let wallets = repo.load_wallets(&ctx.user).context("Unable to load wallets")?;
    let settings = repo.load_settings(&ctx.user).context("Unable to load settings")?;
    Ok(view::wallet_table(&wallets, &settings.currency).to_string())
}

pub(crate) fn execute_delete<B: Backend>(repo: &mut Repository<B>, ctx: &Context, id: &str) -> anyhow::Result<String> {
    let deleted = repo.delete_wallet(&ctx.user, id).context("Unable to delete wallet")?;
    if deleted == 0 {
        info!("No wallet with id {id}, nothing deleted.");
    }
    Ok(format!("{deleted} wallets deleted."))
}
