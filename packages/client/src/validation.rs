//! Shared input checks used by every endpoint group

use crate::error::{TodoistError, TodoistResult};

/// Validate an entity ID to be a positive integer.
pub(crate) fn validate_id(id: u64, what: &str) -> TodoistResult<u64> {
    if id == 0 {
        return Err(TodoistError::invalid_argument(format!(
            "{} must be a positive integer",
            what
        )));
    }
    Ok(id)
}

/// Validate a user-supplied string and return its trimmed form.
pub(crate) fn validate_text(value: &str, what: &str) -> TodoistResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TodoistError::invalid_argument(format!(
            "{} must not be empty",
            what
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_id_is_rejected() {
        let err = validate_id(0, "project ID").unwrap_err();
        assert!(matches!(err, TodoistError::InvalidArgument(_)));
        assert!(err.to_string().contains("project ID"));
    }

    #[test]
    fn test_positive_id_passes_through() {
        assert_eq!(validate_id(42, "task ID").unwrap(), 42);
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(validate_text("  Groceries \n", "name").unwrap(), "Groceries");
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let err = validate_text("   ", "content").unwrap_err();
        assert!(matches!(err, TodoistError::InvalidArgument(_)));
    }
}
