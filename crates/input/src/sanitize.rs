//! Pattern-based removal of harmful HTML tags.
//!
//! This is deliberately not an HTML parser. Content is scanned with a fixed
//! set of case-insensitive patterns:
//!
//! ```text
//! content
//!    │
//!    ▼
//! ┌──────────────────────────────────────────────┐
//! │ 1. <script ...> ... </script>   (paired)     │
//! ├──────────────────────────────────────────────┤
//! │ 2. for tag in iframe, object, embed,         │
//! │              form, input:                    │
//! │      <tag ...> ... </tag>       (paired)     │
//! │      <tag ...> / <tag .../>     (unpaired)   │
//! ├──────────────────────────────────────────────┤
//! │ 3. trim surrounding whitespace               │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Paired blocks match the shortest span from an opening tag to the next
//! closing tag and may span lines. Nested blocks of the same tag, tags whose
//! name merely starts with a listed name (`<format>` matches `form`), and
//! markup split across a removal boundary are handled the way the patterns
//! fall, not the way a browser would parse them. Keeping the behavior
//! pattern-based keeps it reproducible.
//!
//! # Examples
//!
//! ```rust
//! use input::sanitize_content;
//!
//! let cleaned = sanitize_content("<script>alert('x')</script>Valid content").unwrap();
//! assert_eq!(cleaned, "Valid content");
//! ```
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::InputError;
use crate::validation::is_trimmable;

/// Tags removed in addition to `script`, in removal order.
pub const HARMFUL_TAGS: [&str; 5] = ["iframe", "object", "embed", "form", "input"];

static SANITIZER: LazyLock<Result<Sanitizer, regex::Error>> = LazyLock::new(Sanitizer::compile);

struct TagPatterns {
    paired: Regex,
    unpaired: Regex,
}

struct Sanitizer {
    script: Regex,
    tags: Vec<TagPatterns>,
}

impl Sanitizer {
    fn compile() -> Result<Self, regex::Error> {
        let script = Regex::new(&paired_pattern("script"))?;
        let tags = HARMFUL_TAGS
            .iter()
            .map(|tag| {
                Ok(TagPatterns {
                    paired: Regex::new(&paired_pattern(tag))?,
                    unpaired: Regex::new(&format!(r"(?i)<{tag}[^>]*/?>"))?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { script, tags })
    }

    fn apply(&self, content: &str) -> String {
        let mut cleaned = self.script.replace_all(content, "").into_owned();
        for patterns in &self.tags {
            cleaned = patterns.paired.replace_all(&cleaned, "").into_owned();
            cleaned = patterns.unpaired.replace_all(&cleaned, "").into_owned();
        }
        cleaned.trim_matches(is_trimmable).to_string()
    }
}

fn paired_pattern(tag: &str) -> String {
    format!(r"(?is)<{tag}[^>]*>.*?</{tag}>")
}

/// Removes harmful tags from `content` and trims the result.
///
/// The patterns are compiled once per process on first use. This function
/// does not cache its output; [`SpecInput::sanitize`](crate::SpecInput::sanitize)
/// memoizes per instance.
///
/// # Errors
///
/// [`InputError::Pattern`] if the sanitizer patterns cannot be compiled.
pub fn sanitize_content(content: &str) -> Result<String, InputError> {
    let sanitizer = SANITIZER.as_ref().map_err(|err| InputError::from(err.clone()))?;
    let cleaned = sanitizer.apply(content);
    debug!(
        original_len = content.len(),
        sanitized_len = cleaned.len(),
        "sanitize_content"
    );
    Ok(cleaned)
}
