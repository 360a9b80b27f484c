//! Lenient decoding helpers.
//!
//! The mobile client posts decimals (distance, coordinates, prices) as
//! strings such as `"5.0"` while other callers send plain JSON numbers.
//! Both forms decode to `f64`; anything non-finite is rejected.

use serde::{de::Error as _, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Parse a decimal the way the client formats it. Returns `None` for blank,
/// malformed or non-finite input.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

fn resolve(raw: NumberOrText) -> Option<f64> {
    match raw {
        NumberOrText::Number(value) if value.is_finite() => Some(value),
        NumberOrText::Number(_) => None,
        NumberOrText::Text(text) => parse_decimal(&text),
    }
}

/// `deserialize_with` target for a required decimal field.
pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrText::deserialize(deserializer)?;
    resolve(raw).ok_or_else(|| D::Error::custom("expected a finite decimal number"))
}

/// `deserialize_with` target for an optional decimal field. Pair it with
/// `#[serde(default)]`. `null` and blank strings decode to `None`.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(raw) => resolve(raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected a finite decimal number")),
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`) in partial updates. Pair it with `#[serde(default)]`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
