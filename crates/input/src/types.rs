//! The specification input value object and its snapshot form.
//!
//! ```text
//! SpecInput
//! ├── content: String            (logically immutable after construction)
//! ├── format: String             (lower-cased, "text" when empty)
//! ├── metadata: Metadata         (opaque to validation)
//! ├── created_at: DateTime<Utc>  (captured at construction)
//! └── sanitized: OnceLock<String> (computed on first sanitize())
//!
//!         ↓ snapshot()
//!
//! SpecInputSnapshot { content, format, metadata, created_at, is_valid }
//! ```
use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::format::{normalize_format, SpecFormat};
use crate::sanitize::sanitize_content;
use crate::validation::{self, validation_errors};

/// Caller-supplied metadata: string keys to arbitrary JSON values.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Characters of content shown by the `Debug` form.
const DEBUG_PREVIEW_CHARS: usize = 50;

/// One text/markdown/html submission.
///
/// Construction never fails and never validates: an instance with a short
/// body or an unknown format is a normal value that reports
/// `is_valid() == false`.
///
/// The fields are public, but `content` is treated as immutable once the
/// instance exists. [`sanitize`](Self::sanitize) computes its result once and
/// keeps returning it, so assigning a new `content` afterwards is not
/// reflected in the sanitized output.
///
/// # Examples
///
/// ```rust
/// use input::SpecInput;
///
/// let spec = SpecInput::new("# Title\nBody", "Markdown", None);
/// assert_eq!(spec.format, "markdown");
/// assert!(spec.is_valid());
///
/// let spec = SpecInput::text("<script>x()</script> hello ");
/// assert_eq!(spec.sanitize().unwrap(), "hello");
/// ```
#[derive(Clone)]
pub struct SpecInput {
    /// Raw submitted content.
    pub content: String,
    /// Lower-cased format name. May be unrecognized.
    pub format: String,
    /// Arbitrary caller metadata.
    pub metadata: Metadata,
    created_at: DateTime<Utc>,
    sanitized: OnceLock<String>,
}

impl SpecInput {
    /// Builds an input from content, a format name and optional metadata.
    ///
    /// The format is lower-cased; an empty format means `"text"`. Missing
    /// metadata becomes an empty map.
    pub fn new(content: impl Into<String>, format: &str, metadata: Option<Metadata>) -> Self {
        Self {
            content: content.into(),
            format: normalize_format(format),
            metadata: metadata.unwrap_or_default(),
            created_at: Utc::now(),
            sanitized: OnceLock::new(),
        }
    }

    /// Plain-text input with no metadata.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, SpecFormat::Text.as_str(), None)
    }

    /// Replaces the metadata map.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The parsed format, if it is one of the recognized ones.
    pub fn recognized_format(&self) -> Option<SpecFormat> {
        self.format.parse().ok()
    }

    /// Re-evaluated on every call; nothing is cached.
    pub fn is_valid(&self) -> bool {
        validation::content_long_enough(&self.content)
            && validation::format_recognized(&self.format)
    }

    /// Reasons this input is invalid, length before format.
    pub fn validation_errors(&self) -> Vec<String> {
        validation_errors(&self.content, &self.format)
    }

    /// Content with harmful tags removed and whitespace trimmed.
    ///
    /// The first successful call stores the result; later calls return it
    /// unchanged regardless of what happened to `content` in between.
    ///
    /// # Errors
    ///
    /// [`InputError::Pattern`] if the sanitizer patterns cannot be compiled.
    /// Nothing is cached in that case.
    pub fn sanitize(&self) -> Result<&str, InputError> {
        if let Some(cached) = self.sanitized.get() {
            return Ok(cached);
        }
        let cleaned = sanitize_content(&self.content)?;
        Ok(self.sanitized.get_or_init(|| cleaned))
    }

    /// UTC construction time, fixed for the life of the input.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of characters in the raw content.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Point-in-time view of this input, validity included.
    pub fn snapshot(&self) -> SpecInputSnapshot {
        SpecInputSnapshot {
            content: self.content.clone(),
            format: self.format.clone(),
            metadata: self.metadata.clone(),
            created_at: self.created_at,
            is_valid: self.is_valid(),
        }
    }
}

impl fmt::Display for SpecInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SpecInput(format={}, length={}, valid={})",
            self.format,
            self.content_len(),
            self.is_valid()
        )
    }
}

impl fmt::Debug for SpecInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.content.chars().take(DEBUG_PREVIEW_CHARS).collect();
        write!(
            f,
            "SpecInput(content='{preview}...', format='{}', valid={})",
            self.format,
            self.is_valid()
        )
    }
}

/// Serializable mapping form of a [`SpecInput`].
///
/// JSON keys: `content`, `format`, `metadata`, `created_at` (ISO-8601),
/// `is_valid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecInputSnapshot {
    pub content: String,
    pub format: String,
    pub metadata: Metadata,
    #[serde(with = "crate::serde_iso")]
    pub created_at: DateTime<Utc>,
    pub is_valid: bool,
}
