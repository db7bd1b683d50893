//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod form;
mod navigation;
mod submission;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::PreviewSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use form::update_form;
pub use navigation::update_navigation;
pub use submission::update_submission;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Form(m) => form::update_form(model, m),
        Msg::Navigation(m) => navigation::update_navigation(model, m),
        Msg::Submission(m) => submission::update_submission(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = PreviewSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = PreviewSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "preview", %diff, "state changed");
    }

    model.preview.assert_invariants(&msg_name);
    result
}

/// Get a display name for a message type
///
/// Payload-heavy variants are shortened so log lines stay readable.
/// Example outputs:
/// - `Navigation::NextPage`
/// - `Form::MarkdownChanged(42 chars)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{FormMsg, SubmissionMsg};

    match msg {
        Msg::Form(FormMsg::MarkdownChanged(source)) => {
            format!("Form::MarkdownChanged({} chars)", source.chars().count())
        }
        Msg::Form(m) => format!("Form::{:?}", m),
        Msg::Navigation(m) => format!("Navigation::{:?}", m),
        Msg::Submission(SubmissionMsg::Completed(Ok(response))) => format!(
            "Submission::Completed(Ok, {} bytes)",
            response.payload.len()
        ),
        Msg::Submission(m) => format!("Submission::{:?}", m),
    }
}
