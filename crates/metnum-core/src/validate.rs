//! Function-expression screening.
//!
//! The expression is evaluated by the server, never here. This only keeps
//! obviously hostile strings from leaving the client.

use crate::error::ValidationError;

/// Characters that never appear in a mathematical expression.
pub const DISALLOWED_CHARS: [char; 6] = [';', '|', '`', '$', '{', '}'];

/// Validate a function expression and return it trimmed.
pub fn validate_function(expression: &str) -> Result<String, ValidationError> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("La función no puede estar vacía"));
    }

    if let Some(c) = trimmed.chars().find(|c| DISALLOWED_CHARS.contains(c)) {
        return Err(ValidationError::new(format!(
            "La función contiene un carácter no permitido: '{c}'"
        )));
    }

    Ok(trimmed.to_string())
}
