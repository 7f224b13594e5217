//! The recognized submission formats.
//!
//! A [`SpecInput`](crate::SpecInput) stores its format as a lower-cased
//! string so that unrecognized values survive construction and can be named
//! in validation errors. [`SpecFormat`] is the closed set that a valid input
//! must resolve to.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Format used when the caller supplies none (or an empty string).
pub const DEFAULT_FORMAT: &str = "text";

/// Content formats accepted by the system.
///
/// Parsing is case-insensitive; the canonical name is always lower-case.
///
/// ```rust
/// use input::SpecFormat;
///
/// assert_eq!("Markdown".parse::<SpecFormat>().unwrap(), SpecFormat::Markdown);
/// assert_eq!(SpecFormat::Html.as_str(), "html");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecFormat {
    #[default]
    Text,
    Markdown,
    Html,
}

impl SpecFormat {
    /// Every recognized format, in listing order.
    pub const ALL: [SpecFormat; 3] = [SpecFormat::Text, SpecFormat::Markdown, SpecFormat::Html];

    pub fn as_str(self) -> &'static str {
        match self {
            SpecFormat::Text => "text",
            SpecFormat::Markdown => "markdown",
            SpecFormat::Html => "html",
        }
    }

    /// Comma-separated list of the recognized names, e.g. for error messages.
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecFormat {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == lowered)
            .ok_or(InputError::UnknownFormat(lowered))
    }
}

/// Lower-cases a caller-supplied format, falling back to [`DEFAULT_FORMAT`]
/// for an empty value. Unknown names are kept as-is (lower-cased).
pub fn normalize_format(raw: &str) -> String {
    if raw.is_empty() {
        DEFAULT_FORMAT.to_string()
    } else {
        raw.to_lowercase()
    }
}
