use crate::error::AppError;
use std::path::is_separator;

/// Checks an item name before it is joined onto the browsing root.
/// Anything that would resolve outside the root, or to the root itself, is
/// rejected. Only the host's own path separators count, so every name the
/// OS can list passes.
pub fn validate_item_name(name: &str) -> Result<(), AppError> {
    let invalid = |reason: &str| AppError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }

    if name == "." || name == ".." {
        return Err(invalid("relative directory names are not allowed"));
    }

    if let Some(c) = name.chars().find(|&c| is_separator(c) || c == '\0') {
        return Err(invalid(&format!("contains forbidden character {c:?}")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_item_name("notes.txt").is_ok());
        assert!(validate_item_name(".hidden").is_ok());
        assert!(validate_item_name("my folder").is_ok());
        assert!(validate_item_name("...").is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(validate_item_name("").is_err());
    }

    #[test]
    fn test_relative_names_rejected() {
        assert!(validate_item_name(".").is_err());
        assert!(validate_item_name("..").is_err());
    }

    #[test]
    fn test_separators_rejected() {
        assert!(validate_item_name("a/b").is_err());
        assert!(validate_item_name("../escape").is_err());
        assert!(validate_item_name("nul\0byte").is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_backslash_is_an_ordinary_character_on_unix() {
        assert!(validate_item_name("a\\b.txt").is_ok());
    }

    #[test]
    #[cfg(windows)]
    fn test_backslash_is_a_separator_on_windows() {
        assert!(validate_item_name("a\\b").is_err());
    }

    #[test]
    fn test_error_names_the_input() {
        let err = validate_item_name("a/b").unwrap_err();
        assert!(matches!(err, AppError::InvalidName { ref name, .. } if name == "a/b"));
    }
}
