//! Specification intake for the NorthstarET LMS.
//!
//! This crate ties the [`input`] value object to a processing service that
//! validates, sanitizes and records submissions, plus the application layer
//! and command-line wiring around it.
//!
//! - [`SpecInputService`] - `process_spec`, `handle_invalid_spec`, history.
//! - [`SpecInputApp`] - pre-validating facade used by the CLI.
//! - [`AppConfig`] - YAML configuration.
//! - `telemetry` (feature `cli`) - builds the `tracing::Dispatch` handed to
//!   the service.
//!
//! ## Example
//!
//! ```
//! use spec_intake::{SpecInput, SpecInputService, ProcessError};
//!
//! let mut service = SpecInputService::default();
//!
//! let spec = SpecInput::new("<script>alert('x')</script>Valid content", "text", None);
//! let result = service.process_spec(spec).expect("valid input is processed");
//! assert!(result.success);
//!
//! // A non-spec argument is a returned failure...
//! let result = service.process_spec("not a spec object").unwrap();
//! assert!(!result.success);
//!
//! // ...but an invalid spec is an error.
//! let err = service.process_spec(SpecInput::text("x")).unwrap_err();
//! assert!(matches!(err, ProcessError::InvalidSpecification { .. }));
//!
//! assert_eq!(service.processed_count(), 1);
//! ```

pub use input::{
    iso8601, normalize_format, sanitize_content, validation_errors, InputError, Metadata,
    SpecFormat, SpecInput, SpecInputSnapshot, HARMFUL_TAGS, MIN_CONTENT_LENGTH,
};

mod app;
mod config;
mod error;
mod result;
mod service;
#[cfg(feature = "cli")]
pub mod telemetry;

pub use crate::app::{AppResponse, AppStatus, ResponseStatus, SpecInfo, SpecInputApp};
pub use crate::config::{AppConfig, ConfigLoadError, DemoSubmission, LogFormat, LoggingConfig};
pub use crate::error::ProcessError;
pub use crate::result::{ProcessingResult, Submission};
pub use crate::service::SpecInputService;
