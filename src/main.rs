//! `spec-intake` command-line entry point.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use spec_intake::telemetry::build_dispatch;
use spec_intake::{
    sanitize_content, AppConfig, AppResponse, LogFormat, Metadata, SpecInput, SpecInputApp,
};

#[derive(Parser)]
#[command(name = "spec-intake")]
#[command(version)]
#[command(about = "Validate, sanitize and record specification submissions", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log level (overrides the config file)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
    /// Log output style
    #[arg(long, global = true, value_parser = ["pretty", "compact", "json"])]
    log_format: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the demo submissions from the configuration (default)
    Demo,
    /// Validate, sanitize and record one submission
    Process {
        /// Content to process; read from --file or stdin when omitted
        content: Option<String>,
        /// Read content from a file
        #[arg(long, value_name = "PATH", conflicts_with = "content")]
        file: Option<PathBuf>,
        /// Content format (text, markdown, html)
        #[arg(long, default_value = "text")]
        format: String,
        /// Attach metadata; values are parsed as JSON when possible
        #[arg(long = "meta", value_name = "KEY=VALUE")]
        meta: Vec<String>,
        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print sanitized content without recording it
    Sanitize {
        /// Content to sanitize; read from --file or stdin when omitted
        content: Option<String>,
        /// Read content from a file
        #[arg(long, value_name = "PATH", conflicts_with = "content")]
        file: Option<PathBuf>,
    },
    /// Show application status
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format.as_deref() {
        config.logging.format = match format {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
    }
    config.validate().context("invalid configuration")?;

    let dispatch = build_dispatch(&config.logging).context("failed to set up logging")?;
    let mut app = SpecInputApp::with_config(config, dispatch);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            run_demo(&mut app);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Process {
            content,
            file,
            format,
            meta,
            json,
        } => {
            let content = read_content(content, file.as_deref())?;
            let metadata = parse_metadata(&meta)?;
            let spec = SpecInput::new(content, &format, None).with_metadata(metadata);
            let response = app.process_input(spec);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_response(&response);
            }
            Ok(if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Sanitize { content, file } => {
            let content = read_content(content, file.as_deref())?;
            println!("{}", sanitize_content(&content)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Status { json } => {
            let status = app.application_status();
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("Status: {}", status.status);
                println!("Supported formats: {}", status.supported_formats.join(", "));
                println!("Minimum content length: {}", status.min_content_length);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_demo(app: &mut SpecInputApp) {
    println!("NorthstarET LMS - Spec Input Module");
    println!("{}", "=".repeat(40));

    let status = app.application_status();
    println!("Status: {}", status.status);
    println!("Supported formats: {}", status.supported_formats.join(", "));
    println!("Minimum content length: {}", status.min_content_length);
    println!();

    for (i, (_, response)) in app.run_demo().iter().enumerate() {
        println!("Processing test specification {}...", i + 1);
        print_response(response);
        println!();
    }

    println!(
        "Final processed count: {}",
        app.application_status().processed_specs
    );
}

fn print_response(response: &AppResponse) {
    let status = if response.is_success() { "success" } else { "error" };
    println!("  Status: {status}");
    println!("  Message: {}", response.message);
    if let Some(errors) = &response.errors {
        println!("  Errors: {}", errors.join("; "));
    }
}

fn read_content(content: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(content) = content {
        return Ok(content);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read content from stdin")?;
    Ok(buf)
}

fn parse_metadata(pairs: &[String]) -> Result<Metadata> {
    let mut metadata = Metadata::new();
    for pair in pairs {
        let Some((key, raw)) = pair.split_once('=') else {
            bail!("metadata must be KEY=VALUE, got '{pair}'");
        };
        if key.is_empty() {
            bail!("metadata key is empty in '{pair}'");
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        metadata.insert(key.to_string(), value);
    }
    Ok(metadata)
}
