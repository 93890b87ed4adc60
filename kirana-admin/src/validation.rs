//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Limits
//! are reasonable UX ceilings for names and descriptions; the store
//! enforces its own rules on top.

use rust_decimal::Decimal;

use crate::error::{EditError, EditResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, category, subcategory, brand
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Short identifiers: quantity labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a string is within the length limit.
pub fn validate_text_limit(value: &str, field: &str, max_len: usize) -> EditResult<()> {
    if value.len() > max_len {
        return Err(EditError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> EditResult<()> {
    if value.trim().is_empty() {
        return Err(EditError::validation(format!("{field} must not be empty")));
    }
    validate_text_limit(value, field, max_len)
}

/// Validate every URL in a list without requiring any entries.
pub fn validate_url_list(urls: &[String]) -> EditResult<()> {
    for url in urls {
        validate_required_text(url, "image url", MAX_URL_LEN)?;
    }
    Ok(())
}

/// Validate that an image list has at least one entry, all within limits.
pub fn validate_image_urls(urls: &[String], field: &str) -> EditResult<()> {
    if urls.is_empty() {
        return Err(EditError::validation(format!(
            "{field} requires at least one image"
        )));
    }
    validate_url_list(urls)
}

/// Parse a user-typed price field into a `Decimal`.
pub fn parse_price(value: &str, field: &str) -> EditResult<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EditError::validation(format!("{field} must not be empty")));
    }
    trimmed
        .parse::<Decimal>()
        .map_err(|_| EditError::validation(format!("{field} must be a number, got '{trimmed}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_values() {
        assert!(validate_required_text("  ", "Name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Snacks", "Name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn required_text_rejects_overlong_values() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "Name", MAX_NAME_LEN).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn image_lists_must_not_be_empty() {
        assert!(validate_image_urls(&[], "Category").is_err());
        assert!(validate_image_urls(&["https://cdn/a.webp".into()], "Category").is_ok());
    }

    #[test]
    fn price_parsing_accepts_decimals_and_rejects_garbage() {
        assert_eq!(parse_price("40", "Price").unwrap(), Decimal::from(40));
        assert_eq!(parse_price(" 12.50 ", "Price").unwrap(), "12.50".parse().unwrap());
        assert!(parse_price("", "Price").is_err());
        assert!(parse_price("abc", "Price").is_err());
    }
}
