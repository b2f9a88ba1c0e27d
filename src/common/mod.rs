//! Lenient decoders for persisted documents. Stored blobs may have been written by hand or by older
//! versions of the tool, so numbers and strings are coerced rather than rejected.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value to a finite number. Numeric strings are parsed, everything else is 0.
pub(crate) fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if n.is_finite() { n } else { 0.0 }
}

pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// Strings stay as they are, numbers become their decimal text (ids were sometimes stored as
/// numbers), null and anything else become an empty string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Booleans stay as they are, `"true"`/`"false"` strings are parsed, anything else is false.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(12.5)), 12.5);
        assert_eq!(coerce_number(&json!(" 7 ")), 7.0);
        assert_eq!(coerce_number(&json!("abc")), 0.0);
        assert_eq!(coerce_number(&json!("NaN")), 0.0);
        assert_eq!(coerce_number(&json!("inf")), 0.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!(true)), 0.0);
        assert_eq!(coerce_number(&json!([1])), 0.0);
    }

    #[derive(Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "lenient_string")]
        id: String,
        #[serde(default, deserialize_with = "lenient_number")]
        amount: f64,
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: bool,
    }

    #[test]
    fn test_lenient_fields() {
        let doc: Doc = serde_json::from_str(r#"{"id": 1700000000000, "amount": "3.5"}"#).unwrap();
        assert_eq!(doc.id, "1700000000000");
        assert_eq!(doc.amount, 3.5);

        let doc: Doc = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(doc.id, "");
        assert_eq!(doc.amount, 0.0);
        assert!(!doc.flag);
    }

    #[test]
    fn test_lenient_bool() {
        let flag = |json: &str| serde_json::from_str::<Doc>(json).unwrap().flag;
        assert!(flag(r#"{"flag": true}"#));
        assert!(flag(r#"{"flag": "true"}"#));
        assert!(flag(r#"{"flag": " TRUE "}"#));
        assert!(!flag(r#"{"flag": "false"}"#));
        assert!(!flag(r#"{"flag": null}"#));
        assert!(!flag(r#"{"flag": 1}"#));
        assert!(!flag(r#"{"flag": "yes"}"#));
    }
}
