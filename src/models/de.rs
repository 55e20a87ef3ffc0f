//! Lenient decoding for request fields.
//!
//! Clients send `accountId` either as a string or as a bare number, and
//! `amount` either as a number or as a numeric string. Both are accepted
//! and normalized here so handlers only ever see `String` and `f64`.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

/// Deserialize an account identifier from a JSON string or number.
///
/// Numbers keep their JSON text, so `1` becomes `"1"` and `1.5` becomes `"1.5"`.
pub fn account_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "accountId must be a string or a number, got {}",
            other
        ))),
    }
}

/// Deserialize an amount from a JSON number or a numeric string.
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom("amount is out of range"))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("amount is not a number: {:?}", s)))?,
        other => {
            return Err(D::Error::custom(format!(
                "amount must be a number, got {}",
                other
            )));
        }
    };

    // "inf", "NaN" and "1e400" parse fine but cannot be written back as JSON
    if !amount.is_finite() {
        return Err(D::Error::custom(format!("amount must be finite, got {}", amount)));
    }

    Ok(amount)
}
