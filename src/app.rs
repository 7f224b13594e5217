//! Application facade: the caller layer that pre-validates submissions
//! before they reach the service, so every outcome comes back as a response.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info, Dispatch};

use input::{SpecFormat, SpecInput, MIN_CONTENT_LENGTH};

use crate::config::{AppConfig, DemoSubmission};
use crate::service::SpecInputService;

const INVALID_INPUT_MESSAGE: &str = "Invalid specification input";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Details about the submitted input, attached to processed responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecInfo {
    pub format: String,
    pub length: usize,
    #[serde(with = "input::serde_iso")]
    pub created_at: DateTime<Utc>,
}

/// What the application returns for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_info: Option<SpecInfo>,
}

impl AppResponse {
    fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            errors: None,
            data: None,
            spec_info: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Snapshot of the running application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppStatus {
    pub status: String,
    pub processed_specs: usize,
    pub supported_formats: Vec<String>,
    pub min_content_length: usize,
}

/// Owns a [`SpecInputService`] and fronts it with soft-failure semantics.
///
/// ```rust
/// use spec_intake::{ResponseStatus, SpecInputApp};
/// use tracing::Dispatch;
///
/// let mut app = SpecInputApp::new(Dispatch::none());
/// let ok = app.process_specification("# Week 1\nRead chapter one", "markdown");
/// assert_eq!(ok.status, ResponseStatus::Success);
///
/// let bad = app.process_specification("x", "text");
/// assert_eq!(bad.status, ResponseStatus::Error);
/// assert_eq!(bad.errors.unwrap().len(), 1);
///
/// assert_eq!(app.application_status().processed_specs, 1);
/// ```
pub struct SpecInputApp {
    config: AppConfig,
    service: SpecInputService,
}

impl SpecInputApp {
    pub fn new(dispatch: Dispatch) -> Self {
        Self::with_config(AppConfig::default(), dispatch)
    }

    pub fn with_config(config: AppConfig, dispatch: Dispatch) -> Self {
        let service = SpecInputService::new(dispatch);
        service.in_scope(|| {
            info!(
                app_name = config.name.as_deref().unwrap_or("spec-intake"),
                log_level = %config.logging.level,
                "app_initialized"
            )
        });
        Self { config, service }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn service(&self) -> &SpecInputService {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut SpecInputService {
        &mut self.service
    }

    /// Builds an input from `content`/`format` and processes it.
    pub fn process_specification(&mut self, content: &str, format: &str) -> AppResponse {
        self.process_input(SpecInput::new(content, format, None))
    }

    /// Validates `spec` and forwards valid ones to the service.
    ///
    /// Invalid input never reaches the service, so this never raises.
    pub fn process_input(&mut self, spec: SpecInput) -> AppResponse {
        if !spec.is_valid() {
            return AppResponse {
                errors: Some(self.service.validation_errors(&spec)),
                ..AppResponse::error(INVALID_INPUT_MESSAGE)
            };
        }

        let spec_info = SpecInfo {
            format: spec.format.clone(),
            length: spec.content_len(),
            created_at: spec.created_at(),
        };

        match self.service.process_spec(spec) {
            Ok(result) => AppResponse {
                status: if result.success {
                    ResponseStatus::Success
                } else {
                    ResponseStatus::Error
                },
                message: result.message,
                errors: None,
                data: Some(result.data),
                spec_info: Some(spec_info),
            },
            Err(err) => {
                self.service
                    .in_scope(|| error!(error = %err, "app_processing_failed"));
                AppResponse::error(format!("Processing failed: {err}"))
            }
        }
    }

    pub fn application_status(&self) -> AppStatus {
        AppStatus {
            status: "running".to_string(),
            processed_specs: self.service.processed_count(),
            supported_formats: SpecFormat::ALL
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
            min_content_length: MIN_CONTENT_LENGTH,
        }
    }

    /// Processes the configured demo submissions in order.
    pub fn run_demo(&mut self) -> Vec<(DemoSubmission, AppResponse)> {
        let submissions = self.config.demo.clone();
        submissions
            .into_iter()
            .map(|submission| {
                let response = self.process_specification(&submission.content, &submission.format);
                (submission, response)
            })
            .collect()
    }
}
