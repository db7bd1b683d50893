//! Generation request/response contract and submission state
//!
//! The network call itself lives outside this crate. This module describes
//! what is sent, how the reply is interpreted, and whether the generate and
//! download controls are usable.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::preview_state::ShapeKind;

/// Fallback file name used when submitting with an empty name field
pub const DEFAULT_OUTPUT_NAME: &str = "generated_document";

const DEFAULT_TARGET_SIZE_FIELD: &str = "10";
const DEFAULT_PAGE_COUNT_FIELD: &str = "1";

static CONTENT_DISPOSITION_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="?([^";]+)"?"#).unwrap());

/// Fields posted to the generation endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub file_name: String,
    pub target_size: String,
    pub page_count: String,
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,
    pub text_enabled: bool,
    pub shapes_enabled: bool,
    pub shape_types: Vec<ShapeKind>,
    pub use_default: bool,
}

impl GenerationRequest {
    /// Multipart form fields in submission order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("fileName", self.file_name.clone()),
            ("targetSize", non_empty_or(&self.target_size, DEFAULT_TARGET_SIZE_FIELD)),
            ("pageCount", non_empty_or(&self.page_count, DEFAULT_PAGE_COUNT_FIELD)),
            ("markdown", self.markdown.clone()),
        ];
        if let Some(date) = self.modified_date.as_deref().filter(|d| !d.is_empty()) {
            fields.push(("modifiedDate", date.to_string()));
        }
        fields.push(("textEnabled", self.text_enabled.to_string()));
        fields.push(("shapesEnabled", self.shapes_enabled.to_string()));
        if !self.shape_types.is_empty() {
            let joined = self
                .shape_types
                .iter()
                .map(|kind| kind.wire_value())
                .collect::<Vec<_>>()
                .join(",");
            fields.push(("shapeTypes", joined));
        }
        fields.push(("useDefault", self.use_default.to_string()));
        fields
    }

    /// File name to use when the response does not name one
    pub fn fallback_download_name(&self) -> String {
        if self.file_name.ends_with(".pdf") {
            self.file_name.clone()
        } else {
            format!("{}.pdf", self.file_name)
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Successful reply from the generation endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResponse {
    pub payload: Vec<u8>,
    /// Raw `Content-Disposition` header, if present
    pub content_disposition: Option<String>,
}

impl GenerationResponse {
    /// File name announced by the server, if any
    pub fn announced_file_name(&self) -> Option<String> {
        let header = self.content_disposition.as_deref()?;
        CONTENT_DISPOSITION_FILENAME
            .captures(header)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|name| !name.is_empty())
    }
}

/// Why a generation request did not produce a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The endpoint answered with a non-success status and this body
    Rejected { body: String },
    /// The request never completed (connection error, aborted, ...)
    Transport(String),
}

impl GenerationFailure {
    /// Message shown to the user
    pub fn user_message(&self) -> String {
        const REJECTED_DEFAULT: &str = "Failed to generate PDF";
        const UNEXPECTED: &str = "An unexpected error occurred while generating the PDF.";

        let message = match self {
            GenerationFailure::Rejected { body } => {
                match serde_json::from_str::<serde_json::Value>(body) {
                    // A bare `null` has no fields to read; the body is shown as is
                    Ok(Value::Null) => body.clone(),
                    Ok(json) => json
                        .get("error")
                        .filter(|e| is_truthy(e))
                        .map(display_value)
                        .unwrap_or_else(|| REJECTED_DEFAULT.to_string()),
                    Err(_) if body.is_empty() => REJECTED_DEFAULT.to_string(),
                    Err(_) => body.clone(),
                }
            }
            GenerationFailure::Transport(msg) => msg.clone(),
        };

        if message.is_empty() {
            UNEXPECTED.to_string()
        } else {
            message
        }
    }
}

/// Whether an `error` field counts as a message (non-empty, non-zero, present)
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a JSON `error` value as a page script would print it
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.as_f64().map(|f| f.to_string()).unwrap_or_default(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// A generated document held for download
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub file_name: String,
    pub payload: Vec<u8>,
}

/// Generate/download control state
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    /// A request is outstanding; the generate control is disabled
    pub in_flight: bool,
    /// Outstanding request; its file name is used if the reply names none
    pub pending: Option<GenerationRequest>,
    /// Most recent successful result
    pub generated: Option<GeneratedDocument>,
}

impl SubmissionState {
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    pub fn can_download(&self) -> bool {
        self.generated.is_some()
    }
}
