//! Validity rules for specification inputs.
//!
//! An input is valid iff its trimmed content has at least
//! [`MIN_CONTENT_LENGTH`] characters and its format is one of
//! [`SpecFormat::ALL`]. [`validation_errors`] lists the failed rules in a
//! fixed order: content length first, then format.

use crate::format::SpecFormat;

/// Minimum number of characters the trimmed content must have.
pub const MIN_CONTENT_LENGTH: usize = 2;

/// Unicode whitespace plus the ASCII information separators (`\x1c`..=`\x1f`).
pub(crate) fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Character count of `content` after trimming surrounding whitespace.
pub(crate) fn trimmed_len(content: &str) -> usize {
    content.trim_matches(is_trimmable).chars().count()
}

pub(crate) fn content_long_enough(content: &str) -> bool {
    trimmed_len(content) >= MIN_CONTENT_LENGTH
}

pub(crate) fn format_recognized(format: &str) -> bool {
    SpecFormat::ALL.iter().any(|f| f.as_str() == format)
}

/// Human-readable reasons why `content`/`format` would be rejected.
///
/// Zero, one or two messages, always in the order length, format.
///
/// ```rust
/// use input::validation_errors;
///
/// assert!(validation_errors("fine content", "text").is_empty());
///
/// let errors = validation_errors("x", "pdf");
/// assert_eq!(errors[0], "Content too short (minimum 2 characters)");
/// assert_eq!(errors[1], "Invalid format 'pdf'. Valid formats: text, markdown, html");
/// ```
pub fn validation_errors(content: &str, format: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if !content_long_enough(content) {
        errors.push(format!(
            "Content too short (minimum {MIN_CONTENT_LENGTH} characters)"
        ));
    }

    if !format_recognized(format) {
        errors.push(format!(
            "Invalid format '{format}'. Valid formats: {}",
            SpecFormat::listing()
        ));
    }

    errors
}
