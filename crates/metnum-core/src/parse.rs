//! Numeric field parsing.

use crate::error::ParseError;

/// Separator between values in a list field.
pub const LIST_SEPARATOR: char = ',';

/// Parse a comma-separated list of numbers.
///
/// Blank input yields an empty list. Tokens are trimmed and empty tokens
/// (a trailing comma, say) are skipped. Any other token must be a finite
/// number, otherwise the error names it.
pub fn parse_number_list(input: &str) -> Result<Vec<f64>, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

/// Parse a single number field.
pub fn parse_number(input: &str) -> Result<f64, ParseError> {
    parse_token(input.trim())
}

/// Parse a single integer field.
pub fn parse_integer(input: &str) -> Result<i64, ParseError> {
    let token = input.trim();
    token.parse::<i64>().map_err(|_| ParseError::new(token))
}

fn parse_token(token: &str) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::new(token)),
    }
}
