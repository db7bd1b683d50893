//! Form field update handler

use crate::commands::Cmd;
use crate::messages::FormMsg;
use crate::model::{sanitize_target_size, AppModel, SAMPLE_MARKDOWN};

pub fn update_form(model: &mut AppModel, msg: FormMsg) -> Option<Cmd> {
    match msg {
        FormMsg::TargetSizeChanged(size_mb) => {
            model.form.target_size_mb =
                sanitize_target_size(size_mb, model.config.default_target_size_mb);
            Some(Cmd::Render)
        }
        FormMsg::PageCountChanged(n) => {
            model.preview.set_total_pages(n);
            // Editing the page count always starts the preview over
            model.preview.set_current_page(1);
            tracing::debug!("Page count set to {}", model.preview.total_pages());
            Some(Cmd::Render)
        }
        FormMsg::FileNameChanged(name) => {
            model.form.file_name = name;
            Some(Cmd::Render)
        }
        FormMsg::ModifiedDateChanged(date) => {
            model.form.modified_date = date.filter(|d| !d.trim().is_empty());
            Some(Cmd::Render)
        }
        FormMsg::MarkupKindToggled(kind) => {
            let enabled = model.preview.toggle_markup_kind(kind);
            tracing::debug!(
                "Markup {}: {}",
                kind.label(),
                if enabled { "enabled" } else { "disabled" }
            );
            Some(Cmd::Render)
        }
        FormMsg::ShapeKindToggled(kind) => {
            let enabled = model.preview.toggle_shape_kind(kind);
            tracing::debug!(
                "Shape {}: {}",
                kind.label(),
                if enabled { "enabled" } else { "disabled" }
            );
            Some(Cmd::Render)
        }
        FormMsg::MarkdownChanged(source) => {
            model.form.markdown = source;
            Some(Cmd::Render)
        }
        FormMsg::InsertSampleMarkdown => {
            model.form.markdown = SAMPLE_MARKDOWN.to_string();
            Some(Cmd::Render)
        }
        FormMsg::DefaultDocumentAvailable(available) => {
            model.form.default_document_available = available;
            None
        }
    }
}
