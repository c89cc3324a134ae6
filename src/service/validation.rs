//! Presence checks for required draft fields.

use crate::error::AppError;

/// Returns the text when present and non-empty.
pub(crate) fn require_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, AppError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

/// Returns the number when present. Zero is a value, not an omission.
pub(crate) fn require_number(field: &str, value: Option<f64>) -> Result<f64, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_text_passes_through() {
        assert_eq!(require_text("name", Some("Tools")).unwrap(), "Tools");
    }

    #[test]
    fn missing_and_empty_text_are_rejected() {
        assert!(matches!(
            require_text("name", None),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            require_text("name", Some("")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn zero_is_a_valid_number() {
        assert_eq!(require_number("price", Some(0.0)).unwrap(), 0.0);
        assert!(matches!(
            require_number("price", None),
            Err(AppError::Validation(_))
        ));
    }
}
