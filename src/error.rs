//! Hard-failure errors raised by the processing service.
//!
//! Most service failures are *returned* as a failed
//! [`ProcessingResult`](crate::ProcessingResult). The one exception is
//! handing a well-typed but invalid [`SpecInput`](input::SpecInput) to
//! [`process_spec`](crate::SpecInputService::process_spec): that is the
//! caller's contract violation and comes back as `Err`.
//!
//! ```rust
//! use spec_intake::{ProcessError, SpecInput, SpecInputService};
//!
//! let mut service = SpecInputService::default();
//! let err = service.process_spec(SpecInput::text("x")).unwrap_err();
//! match err {
//!     ProcessError::InvalidSpecification { ref errors, .. } => {
//!         assert_eq!(errors.len(), 1);
//!     }
//!     _ => unreachable!(),
//! }
//! assert!(err.to_string().starts_with("Invalid specification: SpecInput("));
//! ```
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProcessError {
    /// A correctly typed input failed validation.
    ///
    /// `description` is the input's display form; `errors` is its
    /// validation-error listing.
    #[error("Invalid specification: {description}")]
    InvalidSpecification {
        description: String,
        errors: Vec<String>,
    },
}
