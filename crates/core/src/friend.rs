//! Friend attribute rules.

use crate::error::CoreError;

/// Validate a friend's display name: it must contain at least one
/// non-whitespace character. Length is not limited.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Friend name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Trim a partner name, treating a blank one as absent.
///
/// Couples are not required to name a partner, so this never fails.
pub fn normalize_partner_name(partner_name: Option<&str>) -> Option<&str> {
    partner_name.map(str::trim).filter(|name| !name.is_empty())
}

/// Validate a point-change reason. The label is free text; only a blank
/// label is rejected.
pub fn validate_reason(reason: &str) -> Result<(), CoreError> {
    if reason.trim().is_empty() {
        return Err(CoreError::Validation(
            "Reason must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_ordinary_name() {
        assert!(validate_name("Ana & Rui").is_ok());
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        assert_matches!(validate_name(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_name("   "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn long_names_are_accepted() {
        assert!(validate_name(&"x".repeat(1_000)).is_ok());
    }

    #[test]
    fn blank_partner_name_becomes_absent() {
        assert_eq!(normalize_partner_name(None), None);
        assert_eq!(normalize_partner_name(Some("")), None);
        assert_eq!(normalize_partner_name(Some("  \t")), None);
        assert_eq!(normalize_partner_name(Some(" Rui ")), Some("Rui"));
    }

    #[test]
    fn reason_is_free_text_but_not_blank() {
        assert!(validate_reason("Replies with audios only").is_ok());
        assert!(validate_reason(&"long story ".repeat(100)).is_ok());
        assert_matches!(validate_reason("\t"), Err(CoreError::Validation(_)));
    }
}
