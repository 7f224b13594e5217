//! Error types produced by the input crate.
//!
//! Validity of a [`SpecInput`](crate::SpecInput) is not an error here: an
//! invalid instance is a normal value and [`is_valid`](crate::SpecInput::is_valid)
//! reports on it. The errors below cover the two things that can actually
//! fail inside this crate: naming a format we don't know, and building the
//! sanitizer patterns.
//!
//! # Examples
//!
//! ```rust
//! use input::{InputError, SpecFormat};
//!
//! let err = "rtf".parse::<SpecFormat>().unwrap_err();
//! assert_eq!(err, InputError::UnknownFormat("rtf".into()));
//! assert!(err.to_string().contains("text, markdown, html"));
//! ```
use thiserror::Error;

/// Errors raised by format parsing and sanitization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    /// The format name is not one of `text`, `markdown`, `html`.
    ///
    /// Carries the offending value after lower-casing.
    #[error("unknown format '{0}'; valid formats: text, markdown, html")]
    UnknownFormat(String),

    /// A sanitizer pattern failed to compile.
    ///
    /// The patterns are fixed, so this only surfaces if the regex engine
    /// rejects them (for example by exceeding its compiled size limit). The
    /// processing service turns it into a failure result instead of
    /// propagating it.
    #[error("sanitizer pattern failed to compile: {0}")]
    Pattern(String),
}

impl InputError {
    /// Returns true if the error was caused by the caller's input rather than
    /// by the sanitizer itself.
    ///
    /// ```rust
    /// use input::InputError;
    ///
    /// assert!(InputError::UnknownFormat("pdf".into()).is_client_error());
    /// assert!(!InputError::Pattern("too big".into()).is_client_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        matches!(self, InputError::UnknownFormat(_))
    }
}

impl From<regex::Error> for InputError {
    fn from(value: regex::Error) -> Self {
        InputError::Pattern(value.to_string())
    }
}
