//! Strict conversions applied by the typed accessors.
//!
//! Overrides are loosely typed JSON. These helpers accept the spellings an
//! operator is likely to write (`0.2`, `"0.2"`, `50`, `"50"`) and reject
//! everything else with [`ConfigError::InvalidOverride`].

use crate::errors::ConfigError;
use serde_json::Value;

fn invalid(key: &str, expected: &'static str, value: &Value) -> ConfigError {
    ConfigError::InvalidOverride {
        key: key.to_string(),
        expected,
        value: value.clone(),
    }
}

/// Strings only. Other JSON types are rejected rather than stringified.
pub fn to_string(key: &str, value: &Value) -> Result<String, ConfigError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(invalid(key, "a string", other)),
    }
}

/// Numbers, numeric strings and booleans (as 1.0 / 0.0).
pub fn to_f64(key: &str, value: &Value) -> Result<f64, ConfigError> {
    const EXPECTED: &str = "a number";
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(key, EXPECTED, value)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(key, EXPECTED, value)),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(invalid(key, EXPECTED, other)),
    }
}

/// Non-negative integers that fit in `u32`.
///
/// Floats truncate toward zero; strings must be integer literals; booleans
/// map to 1 / 0.
pub fn to_u32(key: &str, value: &Value) -> Result<u32, ConfigError> {
    const EXPECTED: &str = "a non-negative integer";
    let fail = || invalid(key, EXPECTED, value);

    let wide: i128 = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i128::from(i)
            } else if let Some(u) = n.as_u64() {
                i128::from(u)
            } else {
                let f = n.as_f64().ok_or_else(fail)?;
                if !f.is_finite() || f.trunc() < 0.0 || f.trunc() > f64::from(u32::MAX) {
                    return Err(fail());
                }
                f.trunc() as i128
            }
        }
        Value::String(s) => s.trim().parse::<i128>().map_err(|_| fail())?,
        Value::Bool(b) => i128::from(*b),
        _ => return Err(fail()),
    };

    u32::try_from(wide).map_err(|_| fail())
}
