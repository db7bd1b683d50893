//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The host (browser glue, CLI, tests) carries them out and feeds results back
//! as messages.

use std::time::Duration;

use serde::Serialize;

use crate::model::GenerationRequest;

/// How long an alert stays visible before dismissing itself
pub const ALERT_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Severity of a user-visible alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Danger,
}

/// A dismissible, non-fatal message banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    #[serde(skip)]
    pub dismiss_after: Duration,
}

impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            dismiss_after: ALERT_DISMISS_AFTER,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Danger, message)
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-derive and redraw the preview
    Render,
    /// Show an alert banner
    ShowAlert(Alert),
    /// Post the request to the generation endpoint; the result must come back
    /// as `SubmissionMsg::Completed`
    SubmitGeneration(GenerationRequest),
    /// Hand the generated document to the browser as a download
    TriggerDownload { file_name: String, payload: Vec<u8> },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_render(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Render => true,
            // Alerts sit outside the preview panel
            Cmd::ShowAlert(_) => false,
            Cmd::SubmitGeneration(_) => false,
            Cmd::TriggerDownload { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_render()),
        }
    }

    /// All alerts carried by this command, in order
    pub fn alerts(&self) -> Vec<&Alert> {
        match self {
            Cmd::ShowAlert(alert) => vec![alert],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.alerts()).collect(),
            _ => Vec::new(),
        }
    }

    /// The generation request carried by this command, if any
    pub fn generation_request(&self) -> Option<&GenerationRequest> {
        match self {
            Cmd::SubmitGeneration(request) => Some(request),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.generation_request()),
            _ => None,
        }
    }
}
