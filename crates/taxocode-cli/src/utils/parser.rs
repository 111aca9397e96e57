use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE (e.g., 'output.path=codes.csv').")]
    MissingSeparator(String),

    #[error("Component '{component}' cannot be empty in '{pair}'.")]
    EmptyComponent {
        component: &'static str,
        pair: String,
    },
}

/// Splits a `KEY=VALUE` override at the first `=`.
///
/// Surrounding whitespace is removed from the key only; the value is kept as
/// written so paths with leading spaces survive.
pub fn parse_set_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(pair.to_string()))?;
    let key = key.trim();

    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            pair: pair.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "value",
            pair: pair.to_string(),
        });
    }
    Ok((key, value))
}
