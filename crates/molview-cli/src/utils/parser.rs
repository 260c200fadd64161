use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidSetFormat(String),

    #[error("Invalid float value for {key}: '{value}'")]
    InvalidFloat { key: String, value: String },

    #[error("Value for {key} must be within [0, 1], got {value}")]
    AlphaOutOfRange { key: String, value: String },
}

/// Splits a `KEY=VALUE` override at the first `=`.
pub fn parse_set_value(kv_pair: &str) -> Result<(&str, &str), ParseError> {
    match kv_pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidSetFormat(kv_pair.to_string())),
    }
}

pub fn parse_alpha(key: &str, value: &str) -> Result<f64, ParseError> {
    let alpha: f64 = value.parse().map_err(|_| ParseError::InvalidFloat {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    check_alpha(key, alpha)
}

/// Rejects transparency values outside `[0, 1]`, including NaN.
pub fn check_alpha(key: &str, alpha: f64) -> Result<f64, ParseError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(ParseError::AlphaOutOfRange {
            key: key.to_string(),
            value: alpha.to_string(),
        })
    }
}
