//! Specification Input Layer
//!
//! Every submission (a course spec in plain text, markdown or html) enters the
//! system as a [`SpecInput`]. The value object owns two rules:
//!
//! - **Validity** - trimmed content of at least [`MIN_CONTENT_LENGTH`]
//!   characters and a format in [`SpecFormat::ALL`]. Construction never
//!   validates; invalid instances are ordinary values.
//! - **Sanitization** - `<script>` blocks and the [`HARMFUL_TAGS`] are
//!   stripped with fixed patterns, then the result is trimmed. Computed once
//!   per instance.
//!
//! Nothing here logs on its own behalf except a `debug` event from the
//! sanitizer, which goes to whatever `tracing` dispatcher the caller has in
//! scope.
//!
//! ## Example
//!
//! ```
//! use input::{SpecInput, SpecFormat};
//!
//! let spec = SpecInput::new("<p>Unit 1</p><iframe src=x></iframe>", "HTML", None);
//! assert_eq!(spec.recognized_format(), Some(SpecFormat::Html));
//! assert!(spec.is_valid());
//! assert_eq!(spec.sanitize().unwrap(), "<p>Unit 1</p>");
//!
//! let short = SpecInput::text("x");
//! assert!(!short.is_valid());
//! assert_eq!(short.validation_errors(), vec!["Content too short (minimum 2 characters)"]);
//! ```

mod error;
mod format;
mod sanitize;
pub mod serde_iso;
mod types;
mod validation;

pub use crate::error::InputError;
pub use crate::format::{normalize_format, SpecFormat, DEFAULT_FORMAT};
pub use crate::sanitize::{sanitize_content, HARMFUL_TAGS};
pub use crate::serde_iso::iso8601;
pub use crate::types::{Metadata, SpecInput, SpecInputSnapshot};
pub use crate::validation::{validation_errors, MIN_CONTENT_LENGTH};
