use serde::{Deserialize, Serialize};

use crate::common::{lenient_number, lenient_string};
use crate::util;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct Wallet {
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) name: String,
    /// Card or account number, free text
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) number: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub(crate) balance: f64,
}

impl Wallet {
    pub(crate) fn new(name: &str, number: &str, balance: f64) -> Wallet {
        Wallet {
            id: util::timestamp_id(),
            name: name.trim().to_string(),
            number: number.trim().to_string(),
            balance,
        }
    }
}
