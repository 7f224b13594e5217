//! Application facade driven from a configuration file.

use std::io::Write;

use serde_json::json;
use spec_intake::{AppConfig, ResponseStatus, SpecInputApp};
use tempfile::NamedTempFile;
use tracing::Dispatch;

#[test]
fn demo_from_config_file() {
    let yaml = r#"
version: "1.0"
name: "course-intake"
logging:
  level: "warn"
  format: "compact"
demo:
  - content: "<script>steal()</script><p>Syllabus</p>"
    format: "HTML"
  - content: "  "
    format: "text"
  - content: "Reading list for week two"
  - content: "Rich text"
    format: "rtf"
"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = AppConfig::from_file(file.path()).expect("config loads");
    let mut app = SpecInputApp::with_config(config, Dispatch::none());
    let outcomes = app.run_demo();

    let statuses: Vec<_> = outcomes.iter().map(|(_, r)| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            ResponseStatus::Success,
            ResponseStatus::Error,
            ResponseStatus::Success,
            ResponseStatus::Error,
        ]
    );

    let (_, html) = &outcomes[0];
    let data = html.data.as_ref().expect("processed response has data");
    assert_eq!(data["format"], json!("html"));
    assert_eq!(data["sanitized_length"], json!(15));

    let (_, rtf) = &outcomes[3];
    assert_eq!(
        rtf.errors.as_deref(),
        Some(&["Invalid format 'rtf'. Valid formats: text, markdown, html".to_string()][..])
    );

    assert_eq!(app.application_status().processed_specs, 2);
    assert_eq!(app.config().name.as_deref(), Some("course-intake"));
}

#[test]
fn service_history_is_reachable_through_app() {
    let mut app = SpecInputApp::new(Dispatch::none());
    app.process_specification("Unit plan for algebra", "markdown");
    app.process_specification("Unit plan for geometry", "markdown");

    let history = app.service().processed_specs();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].content, "Unit plan for geometry");

    app.service_mut().clear_processed_specs();
    assert_eq!(app.application_status().processed_specs, 0);
}

#[test]
fn response_json_shape() {
    let mut app = SpecInputApp::new(Dispatch::none());
    let response = app.process_specification("A valid specification", "text");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["status"], json!("success"));
    assert_eq!(value["spec_info"]["format"], json!("text"));
    assert_eq!(value["spec_info"]["length"], json!(21));
    assert!(value.get("errors").is_none());
    for key in ["original_length", "sanitized_length", "format", "created_at", "processed_at"] {
        assert!(value["data"].get(key).is_some(), "missing data.{key}");
    }
}
