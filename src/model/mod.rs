//! Application model - the complete state of the preview form
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod form;
pub mod preview_state;
pub mod submission;

pub use form::{sanitize_target_size, FormState, SAMPLE_MARKDOWN};
pub use preview_state::{MarkupKind, PreviewState, ShapeKind};
pub use submission::{
    GeneratedDocument, GenerationFailure, GenerationRequest, GenerationResponse, SubmissionState,
    DEFAULT_OUTPUT_NAME,
};

use crate::config::PreviewConfig;
use crate::markup::MarkupPipeline;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Page navigation and markup selection
    pub preview: PreviewState,
    /// Remaining form inputs
    pub form: FormState,
    /// Generate/download control state
    pub submission: SubmissionState,
    /// Markup renderer, configured from `config`
    pub markup: MarkupPipeline,
    /// Persisted preview configuration
    pub config: PreviewConfig,
}

impl AppModel {
    pub fn new(config: PreviewConfig) -> Self {
        let markup = MarkupPipeline::standard().with_list_wrapping(config.list_wrapping);
        Self {
            preview: PreviewState::new(),
            form: FormState::new(config.default_target_size_mb),
            submission: SubmissionState::default(),
            markup,
            config,
        }
    }

    /// Output file name shown in the preview (e.g., `bluebeam_document.pdf`)
    pub fn preview_file_name(&self) -> String {
        format!(
            "{}.pdf",
            self.form.display_base_name(&self.config.default_file_name)
        )
    }

    /// Display fragment for the annotation markup
    pub fn markup_fragment(&self) -> String {
        self.markup.transform(&self.form.markdown)
    }

    /// Snapshot of the form as a generation request
    pub fn generation_request(&self) -> GenerationRequest {
        // Only an empty field gets the default; a whitespace-only name stays blank
        // so submission can reject it.
        let file_name = if self.form.file_name.is_empty() {
            DEFAULT_OUTPUT_NAME.to_string()
        } else {
            self.form.file_name.trim().to_string()
        };

        GenerationRequest {
            file_name,
            target_size: self.form.target_size_mb.to_string(),
            page_count: self.preview.total_pages().to_string(),
            markdown: self.form.markdown.clone(),
            modified_date: self.form.modified_date.clone(),
            text_enabled: self.preview.is_markup_enabled(MarkupKind::Text),
            shapes_enabled: self.preview.is_markup_enabled(MarkupKind::Shapes),
            shape_types: self.preview.shape_kinds().iter().copied().collect(),
            use_default: true,
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}
