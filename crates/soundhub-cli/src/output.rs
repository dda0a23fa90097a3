//! Rendering of command results as text or JSON.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use soundhub_core::error::AppError;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Print homogeneous rows, such as the per-collection counts.
pub fn print_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
            Ok(())
        }
        OutputFormat::Json => print_json(rows),
    }
}

/// Print one record, such as a created admin or the effective config.
///
/// Text mode lists one `dotted.path: value` line per leaf field.
pub fn print_record<T: Serialize>(record: &T, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => {
            let mut lines = Vec::new();
            flatten("", &serde_json::to_value(record)?, &mut lines);
            for (key, value) in lines {
                print_kv(&key, &value);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(record),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn flatten(prefix: &str, value: &Value, lines: &mut Vec<(String, String)>) {
    match value {
        Value::Object(fields) if !fields.is_empty() => {
            for (key, field) in fields {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, field, lines);
            }
        }
        Value::String(s) => lines.push((prefix.to_string(), s.clone())),
        Value::Null => lines.push((prefix.to_string(), "-".to_string())),
        other => lines.push((prefix.to_string(), other.to_string())),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<32} {}", format!("{key}:"), value);
}
