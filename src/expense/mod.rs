use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{lenient_number, lenient_string};
use crate::util;

/// Category label used for expenses stored without one
pub(crate) const DEFAULT_CATEGORY: &str = "Other";

/// A single spending record as persisted in the expenses document
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct Expense {
    /// Creation-time token. Expected to be unique but never checked.
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub(crate) amount: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) category: String,
    /// `YYYY-MM-DD`, kept as text so unparsable values survive a load/save cycle
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) wallet: String,
}

impl Expense {
    pub(crate) fn new(name: &str, amount: f64, category: &str, date: NaiveDate, wallet: &str) -> Expense {
        Expense {
            id: util::timestamp_id(),
            name: name.trim().to_string(),
            amount,
            category: category.trim().to_string(),
            date: util::format_date(date),
            wallet: wallet.trim().to_string(),
        }
    }

    pub(crate) fn category_label(&self) -> &str {
        if self.category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            self.category.as_str()
        }
    }

    pub(crate) fn calendar_date(&self) -> Option<NaiveDate> {
        util::parse_date(&self.date)
    }
}
