//! Logging setup for the preview binary
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=markup_preview::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/markup-preview/logs/markup-preview.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so rendered output on stdout stays clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match create_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "markup-preview.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

fn create_logs_dir() -> Result<PathBuf, String> {
    let dir = crate::config::logs_dir()
        .ok_or_else(|| "No config directory available".to_string())?;
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create log directory {}: {}", dir.display(), e))?;
    Ok(dir)
}

/// Lightweight snapshot of preview state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSnapshot {
    pub current_page: u32,
    pub total_pages: u32,
    pub markup_summary: String,
    pub in_flight: bool,
    pub has_generated: bool,
}

impl PreviewSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            current_page: model.preview.current_page(),
            total_pages: model.preview.total_pages(),
            markup_summary: crate::preview::markup_summary(&model.preview),
            in_flight: model.submission.in_flight,
            has_generated: model.submission.generated.is_some(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PreviewSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.current_page != other.current_page || self.total_pages != other.total_pages {
            changes.push(format!(
                "page {}/{} → {}/{}",
                self.current_page, self.total_pages, other.current_page, other.total_pages
            ));
        }
        if self.markup_summary != other.markup_summary {
            changes.push(format!(
                "markups: {} → {}",
                self.markup_summary, other.markup_summary
            ));
        }
        if self.in_flight != other.in_flight {
            let status = if other.in_flight { "started" } else { "finished" };
            changes.push(format!("submission {}", status));
        }
        if self.has_generated != other.has_generated {
            changes.push("generated document ready".to_string());
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
