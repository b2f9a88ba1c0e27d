use anyhow::Context as _;
use log::info;

use crate::settings::Settings;
use crate::store::{Backend, Repository};
use crate::view;

use super::Context;

/// Fields to change. `None` leaves the stored value alone.
#[derive(Debug, Default)]
pub(crate) struct SettingsUpdate {
    pub(crate) currency: Option<String>,
    pub(crate) income: Option<f64>,
    pub(crate) name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) dark_mode: Option<bool>,
}

impl SettingsUpdate {
    fn apply(self, settings: &mut Settings) {
        if let Some(currency) = self.currency {
            settings.currency = currency;
        }
        if let Some(income) = self.income {
            settings.month_income = if income.is_finite() { income } else { 0.0 };
        }
        // Blank profile fields keep what was there
        if let Some(name) = self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
            settings.name = name;
        }
        if let Some(email) = self.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()) {
            settings.email = email;
        }
        if let Some(dark_mode) = self.dark_mode {
            settings.dark_mode = dark_mode;
        }
    }
}

pub(crate) fn execute_show<B: Backend>(repo: &Repository<B>, ctx: &Context) -> anyhow::Result<String> {
    let settings = repo.load_settings(&ctx.user).context("Unable to load settings")?;
    Ok(view::settings_table(&settings, &ctx.user).to_string())
}

pub(crate) fn execute_set<B: Backend>(repo: &mut Repository<B>, ctx: &Context, update: SettingsUpdate) -> anyhow::Result<String> {
    let mut settings = repo.load_settings(&ctx.user).context("Unable to load settings")?;
    update.apply(&mut settings);
    repo.save_settings(&ctx.user, &settings).context("Unable to save settings")?;
    info!("Saved settings for user {}", ctx.user);
    Ok(view::settings_table(&settings, &ctx.user).to_string())
}
