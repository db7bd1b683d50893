//! Render instruction building
//!
//! Turns the model into a flat, serializable description of everything the
//! preview panel shows. The host binds these values to its widgets; nothing
//! here touches a display surface.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{AppModel, MarkupKind};
use crate::preview::{self, PageContentBlock, NO_MARKUPS_PLACEHOLDER};
use crate::util::{format_file_size, format_size_mb, last_updated_display};

/// Everything needed to draw the preview panel for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderInstructions {
    pub current_page: u32,
    pub total_pages: u32,
    /// e.g. "Page 2"
    pub page_indicator: String,
    /// e.g. "10.00 MB"
    pub size_display: String,
    /// e.g. "Text, Shapes"
    pub markup_summary: String,
    /// Blocks for the current page, text before shape
    pub blocks: Vec<PageContentBlock>,
    /// Display text per block, same order as `blocks`
    pub block_labels: Vec<String>,
    /// Set when `blocks` is empty
    pub placeholder: Option<String>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Output file name, e.g. "bluebeam_document.pdf"
    pub file_name: String,
    pub last_updated: String,
    pub annotation_box_visible: bool,
    pub shape_options_visible: bool,
    pub generate_enabled: bool,
    pub download_enabled: bool,
    /// Name and size of the last generated document, e.g. "plan.pdf (1.5 KB)"
    pub generated_document: Option<String>,
    /// Rendered annotation markup
    pub markup_fragment: String,
}

/// Build render instructions for the current model state
pub fn render(model: &AppModel, today: NaiveDate) -> RenderInstructions {
    let state = &model.preview;
    let blocks = preview::generate(state);
    let block_labels = blocks.iter().map(|b| b.label()).collect();
    let placeholder = blocks
        .is_empty()
        .then(|| NO_MARKUPS_PLACEHOLDER.to_string());

    RenderInstructions {
        current_page: state.current_page(),
        total_pages: state.total_pages(),
        page_indicator: preview::page_indicator(state),
        size_display: format_size_mb(model.form.target_size_mb),
        markup_summary: preview::markup_summary(state),
        blocks,
        block_labels,
        placeholder,
        prev_enabled: state.can_go_prev(),
        next_enabled: state.can_go_next(),
        file_name: model.preview_file_name(),
        last_updated: last_updated_display(model.form.modified_date.as_deref(), today),
        annotation_box_visible: state.is_markup_enabled(MarkupKind::Text),
        shape_options_visible: state.is_markup_enabled(MarkupKind::Shapes),
        generate_enabled: model.submission.can_submit(),
        download_enabled: model.submission.can_download(),
        generated_document: model.submission.generated.as_ref().map(|doc| {
            format!(
                "{} ({})",
                doc.file_name,
                format_file_size(doc.payload.len() as u64)
            )
        }),
        markup_fragment: model.markup_fragment(),
    }
}

impl RenderInstructions {
    /// Plain-text rendering for terminals and logs
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("File:         {}", self.file_name),
            format!("Size:         {}", self.size_display),
            format!("Pages:        {}", self.total_pages),
            format!("Markups:      {}", self.markup_summary),
            format!("Last updated: {}", self.last_updated),
            String::new(),
            format!(
                "{} of {}  [{}prev] [{}next]",
                self.page_indicator,
                self.total_pages,
                if self.prev_enabled { "" } else { "x " },
                if self.next_enabled { "" } else { "x " },
            ),
        ];

        match &self.placeholder {
            Some(placeholder) => lines.push(format!("  {}", placeholder)),
            None => {
                for (block, label) in self.blocks.iter().zip(&self.block_labels) {
                    match block {
                        PageContentBlock::Text { .. } => lines.push(format!("  [text] {}", label)),
                        PageContentBlock::Shape { width, height, .. } => {
                            lines.push(format!("  [shape {}x{}] {}", width, height, label))
                        }
                    }
                }
            }
        }

        if let Some(generated) = &self.generated_document {
            lines.push(format!("Generated:    {}", generated));
        }

        lines.push(String::new());
        lines.push(self.markup_fragment.clone());
        lines.join("\n")
    }
}
