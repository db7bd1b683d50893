//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{GenerationFailure, GenerationResponse, MarkupKind, ShapeKind};

/// Form field changes
#[derive(Debug, Clone, PartialEq)]
pub enum FormMsg {
    /// Target size field changed (megabytes)
    TargetSizeChanged(f64),
    /// Page count field changed; returns the preview to page 1
    PageCountChanged(i64),
    /// Output file name field changed
    FileNameChanged(String),
    /// Modification date picked (`YYYY-MM-DD`), or cleared
    ModifiedDateChanged(Option<String>),
    /// Markup kind checkbox toggled
    MarkupKindToggled(MarkupKind),
    /// Shape kind checkbox toggled
    ShapeKindToggled(ShapeKind),
    /// Annotation markup edited
    MarkdownChanged(String),
    /// "Insert sample" clicked
    InsertSampleMarkdown,
    /// Whether a background document is available to generate from
    DefaultDocumentAvailable(bool),
}

/// Page navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMsg {
    NextPage,
    PrevPage,
    /// Jump straight to a page; stops at the first or last page
    GoToPage(u32),
}

/// Generation and download
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionMsg {
    /// Generate button clicked
    Submit,
    /// Generation request finished (async result)
    Completed(Result<GenerationResponse, GenerationFailure>),
    /// Download button clicked
    Download,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Form field messages
    Form(FormMsg),
    /// Page navigation messages
    Navigation(NavigationMsg),
    /// Generate/download messages
    Submission(SubmissionMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn next_page() -> Self {
        Msg::Navigation(NavigationMsg::NextPage)
    }

    pub fn prev_page() -> Self {
        Msg::Navigation(NavigationMsg::PrevPage)
    }

    pub fn go_to_page(page: u32) -> Self {
        Msg::Navigation(NavigationMsg::GoToPage(page))
    }

    pub fn toggle_markup(kind: MarkupKind) -> Self {
        Msg::Form(FormMsg::MarkupKindToggled(kind))
    }

    pub fn toggle_shape(kind: ShapeKind) -> Self {
        Msg::Form(FormMsg::ShapeKindToggled(kind))
    }

    pub fn page_count(n: i64) -> Self {
        Msg::Form(FormMsg::PageCountChanged(n))
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        Msg::Form(FormMsg::MarkdownChanged(source.into()))
    }
}
