//! The processing service: validate, sanitize, measure, record.
//!
//! ```text
//! process_spec(submission)
//!        │
//!        ├── not a SpecInput ──────────────► Ok(failure "Invalid input: ...")
//!        │
//!        ├── SpecInput, !is_valid() ───────► Err(ProcessError::InvalidSpecification)
//!        │
//!        ├── sanitize() fails ─────────────► Ok(failure "Error processing specification: ...")
//!        │
//!        └── build data, push to history ──► Ok(success)
//! ```
//!
//! The split between returned failures and the one raised error is part of
//! the contract. Callers that want a result for content errors too should
//! check [`SpecInput::is_valid`] first or go through
//! [`handle_invalid_spec`](SpecInputService::handle_invalid_spec).
//!
//! History is a plain `Vec` owned by the service. Nothing here locks; a host
//! that shares one service across threads must serialize access itself.
use std::time::Instant;

use serde_json::{json, Map, Value};
use tracing::{dispatcher, error, info, warn, Dispatch};

use input::{iso8601, InputError, SpecInput};

use crate::error::ProcessError;
use crate::result::{ProcessingResult, Submission};

pub(crate) const INVALID_INPUT_MESSAGE: &str = "Invalid input: must be SpecInput instance";
pub(crate) const NULL_SPEC_MESSAGE: &str = "Cannot process null specification";
pub(crate) const PROCESSED_MESSAGE: &str = "Specification processed successfully";

/// Processes specification inputs and keeps an ordered record of the
/// accepted ones.
///
/// All log events go to the [`Dispatch`] given at construction, never to
/// the global default. [`SpecInputService::default`] logs nowhere.
///
/// # Examples
///
/// ```rust
/// use spec_intake::{SpecInput, SpecInputService};
///
/// let mut service = SpecInputService::default();
/// let result = service
///     .process_spec(SpecInput::text("<script>x()</script>Week one reading list"))
///     .expect("valid input");
///
/// assert!(result.success);
/// assert_eq!(result.data["sanitized_length"], 21);
/// assert_eq!(service.processed_count(), 1);
/// ```
pub struct SpecInputService {
    dispatch: Dispatch,
    processed: Vec<SpecInput>,
}

impl Default for SpecInputService {
    fn default() -> Self {
        Self::new(Dispatch::none())
    }
}

impl SpecInputService {
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            processed: Vec::new(),
        }
    }

    /// Runs `f` with this service's dispatcher as the current default.
    pub(crate) fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        dispatcher::with_default(&self.dispatch, f)
    }

    /// Validates, sanitizes and records one submission.
    ///
    /// # Errors
    ///
    /// [`ProcessError::InvalidSpecification`] when `submission` is a
    /// [`SpecInput`] that fails [`is_valid`](SpecInput::is_valid). History is
    /// unchanged. Every other failure is an `Ok` result with
    /// `success == false`.
    pub fn process_spec(
        &mut self,
        submission: impl Into<Submission>,
    ) -> Result<ProcessingResult, ProcessError> {
        let spec = match submission.into() {
            Submission::Spec(spec) => spec,
            other => {
                let kind = other.kind();
                self.in_scope(|| warn!(kind, "spec_rejected"));
                return Ok(ProcessingResult::failure(INVALID_INPUT_MESSAGE));
            }
        };

        if !spec.is_valid() {
            let err = ProcessError::InvalidSpecification {
                description: spec.to_string(),
                errors: spec.validation_errors(),
            };
            self.in_scope(|| warn!(error = %err, "spec_invalid"));
            return Err(err);
        }

        Ok(self.process_valid(spec, SpecInput::sanitize))
    }

    /// Sanitizes and records an input already known to be valid.
    fn process_valid(&mut self, spec: SpecInput, sanitize: SanitizeStep) -> ProcessingResult {
        let start = Instant::now();
        match self.in_scope(|| processing_data(&spec, sanitize)) {
            Ok(data) => {
                let format = spec.format.clone();
                let original_length = spec.content_len();
                let sanitized_length = data["sanitized_length"].as_u64().unwrap_or_default();
                self.processed.push(spec);
                let processed_count = self.processed.len();
                let elapsed_micros = start.elapsed().as_micros();
                self.in_scope(|| {
                    info!(
                        format = %format,
                        original_length,
                        sanitized_length,
                        processed_count,
                        elapsed_micros,
                        "spec_processed"
                    )
                });
                ProcessingResult::success(PROCESSED_MESSAGE, data)
            }
            Err(err) => self.processing_failure(&err, &spec),
        }
    }

    fn processing_failure(&self, err: &InputError, spec: &SpecInput) -> ProcessingResult {
        self.in_scope(|| {
            if err.is_client_error() {
                warn!(error = %err, spec = %spec, "spec_processing_failed");
            } else {
                error!(error = %err, spec = %spec, "spec_processing_failed");
            }
        });
        ProcessingResult::failure(format!("Error processing specification: {err}"))
    }

    /// Describes why `spec` cannot be processed, without raising.
    ///
    /// `None` yields `"Cannot process null specification"`. Otherwise the
    /// result carries `data.errors`, the input's validation-error listing
    /// (empty if the input is in fact valid).
    pub fn handle_invalid_spec(&self, spec: Option<&SpecInput>) -> ProcessingResult {
        let Some(spec) = spec else {
            return ProcessingResult::failure(NULL_SPEC_MESSAGE);
        };

        let errors = self.validation_errors(spec);
        let mut data = Map::new();
        data.insert("errors".into(), json!(errors));
        ProcessingResult::failure_with(format!("Invalid specification: {spec}"), data)
    }

    /// Ordered validation-error listing for `spec`.
    pub fn validation_errors(&self, spec: &SpecInput) -> Vec<String> {
        spec.validation_errors()
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Copy of the history in insertion order. Changing the returned vector
    /// does not touch the service.
    pub fn processed_specs(&self) -> Vec<SpecInput> {
        self.processed.clone()
    }

    pub fn clear_processed_specs(&mut self) {
        let cleared = self.processed.len();
        self.processed.clear();
        self.in_scope(|| info!(cleared, "processed_specs_cleared"));
    }
}

type SanitizeStep = fn(&SpecInput) -> Result<&str, InputError>;

/// Result data for a valid input; sanitizes on the way.
fn processing_data(
    spec: &SpecInput,
    sanitize: SanitizeStep,
) -> Result<Map<String, Value>, InputError> {
    let sanitized = sanitize(spec)?;

    let mut data = Map::new();
    data.insert("original_length".into(), json!(spec.content_len()));
    data.insert("sanitized_length".into(), json!(sanitized.chars().count()));
    data.insert("format".into(), json!(spec.format));
    data.insert("created_at".into(), json!(iso8601(&spec.created_at())));
    data.insert("processed_at".into(), json!(iso8601(&chrono::Utc::now())));
    Ok(data)
}

#[cfg(test)]
mod tests {
    use input::Metadata;

    use super::*;

    #[test]
    fn success_records_history_and_lengths() {
        let mut service = SpecInputService::default();
        let result = service
            .process_spec(SpecInput::text(
                "This is a comprehensive test specification for processing",
            ))
            .expect("valid spec");

        assert!(result.success);
        assert!(result.message.to_lowercase().contains("successfully"));
        assert_eq!(result.data["original_length"], json!(57));
        assert_eq!(result.data["sanitized_length"], json!(57));
        assert_eq!(result.data["format"], json!("text"));
        assert!(result.data.contains_key("created_at"));
        assert!(result.data.contains_key("processed_at"));
        assert_eq!(service.processed_count(), 1);
    }

    #[test]
    fn invalid_spec_is_raised_and_not_recorded() {
        let mut service = SpecInputService::default();
        let err = service
            .process_spec(SpecInput::new("x", "pdf", None))
            .unwrap_err();
        let ProcessError::InvalidSpecification { description, errors } = err;
        assert_eq!(description, "SpecInput(format=pdf, length=1, valid=false)");
        assert_eq!(errors.len(), 2);
        assert_eq!(service.processed_count(), 0);
    }

    #[test]
    fn wrong_type_is_a_soft_failure() {
        let mut service = SpecInputService::default();
        let result = service.process_spec("not a spec object").expect("soft failure");
        assert!(!result.success);
        assert!(result.message.contains("Invalid input"));
        assert_eq!(service.processed_count(), 0);
    }

    #[test]
    fn handle_invalid_lists_errors() {
        let service = SpecInputService::default();
        assert_eq!(
            service.handle_invalid_spec(None).message,
            "Cannot process null specification"
        );

        let spec = SpecInput::new("", "docx", None);
        let result = service.handle_invalid_spec(Some(&spec));
        assert!(!result.success);
        assert!(result.message.starts_with("Invalid specification: SpecInput("));
        assert_eq!(
            result.data["errors"],
            json!([
                "Content too short (minimum 2 characters)",
                "Invalid format 'docx'. Valid formats: text, markdown, html"
            ])
        );
    }

    #[test]
    fn history_copy_is_detached() {
        let mut service = SpecInputService::default();
        let mut meta = Metadata::new();
        meta.insert("course".into(), json!("CS-101"));
        service
            .process_spec(SpecInput::text("first spec").with_metadata(meta))
            .unwrap();
        service.process_spec(SpecInput::text("first spec")).unwrap();

        let mut copy = service.processed_specs();
        assert_eq!(copy.len(), 2);
        assert_eq!(copy[0].metadata["course"], json!("CS-101"));
        copy.clear();
        assert_eq!(service.processed_count(), 2);

        service.clear_processed_specs();
        assert_eq!(service.processed_count(), 0);
        assert!(service.processed_specs().is_empty());
    }

    fn broken_sanitizer(_: &SpecInput) -> Result<&str, InputError> {
        Err(InputError::Pattern("boom".into()))
    }

    #[test]
    fn sanitizer_failure_is_soft_and_not_recorded() {
        let mut service = SpecInputService::default();
        service.process_spec(SpecInput::text("kept entry")).unwrap();

        let result = service.process_valid(SpecInput::text("Valid content"), broken_sanitizer);
        assert!(!result.success);
        assert_eq!(
            result.message,
            "Error processing specification: sanitizer pattern failed to compile: boom"
        );
        assert!(result.data.is_empty());
        assert_eq!(service.processed_count(), 1);
        assert_eq!(service.processed_specs()[0].content, "kept entry");
    }
}
