//! Compare command

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, ValueEnum};
use serde_json::{json, Value};
use structcmp_core::logging_facility::{init, Profile};
use structcmp_core::{log_op_end, log_op_error, log_op_start};
use structcmp_core::{Difference, Result, StructCmpError, StructuralComparison};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Path to the expected JSON document
    pub expected: PathBuf,

    /// Path to the actual JSON document
    pub actual: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Logging profile; logging stays off unless set
    #[arg(long, value_enum)]
    pub profile: Option<LogProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Dev,
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

/// Result of a successful comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareOutcome {
    Equal,
    Different(Difference),
}

impl CompareOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CompareOutcome::Equal => ExitCode::SUCCESS,
            CompareOutcome::Different(_) => ExitCode::from(1),
        }
    }
}

pub fn execute(args: CompareArgs) -> Result<CompareOutcome> {
    if let Some(profile) = args.profile {
        init(profile.into());
    }

    let expected = read_document(&args.expected)?;
    let actual = read_document(&args.actual)?;

    let outcome = match StructuralComparison::new(&expected, &actual).compare() {
        None => CompareOutcome::Equal,
        Some(difference) => CompareOutcome::Different(difference),
    };

    println!("{}", render(&outcome, args.format));
    Ok(outcome)
}

fn render(outcome: &CompareOutcome, format: OutputFormat) -> String {
    match (format, outcome) {
        (OutputFormat::Text, CompareOutcome::Equal) => "No difference".to_string(),
        (OutputFormat::Text, CompareOutcome::Different(difference)) => difference.to_string(),
        (OutputFormat::Json, CompareOutcome::Equal) => {
            json!({ "equal": true, "difference": null }).to_string()
        }
        (OutputFormat::Json, CompareOutcome::Different(difference)) => {
            json!({ "equal": false, "difference": difference }).to_string()
        }
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let started = Instant::now();
    let path_display = path.display().to_string();
    log_op_start!("read_document", path = %path_display);

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| StructCmpError::Io {
            path: path_display.clone(),
            message: e.to_string(),
        })
        .and_then(|text| {
            serde_json::from_str::<Value>(&text).map_err(|e| StructCmpError::Json {
                path: path_display.clone(),
                message: e.to_string(),
            })
        });

    let duration_ms = started.elapsed().as_millis() as u64;
    match parsed {
        Ok(value) => {
            log_op_end!("read_document", duration_ms = duration_ms);
            Ok(value)
        }
        Err(err) => {
            log_op_error!("read_document", err.clone(), duration_ms = duration_ms, path = %path_display);
            Err(err)
        }
    }
}
