//! Annotation markup renderer
//!
//! Converts the constrained markdown-like syntax typed into the annotation
//! box into an HTML display fragment using an ordered regex rule pipeline.

mod pipeline;
pub mod rules;

use std::sync::LazyLock;

pub use pipeline::{ListWrapping, MarkupPipeline, EMPTY_PREVIEW_PLACEHOLDER};
pub use rules::MarkupRule;

static STANDARD_PIPELINE: LazyLock<MarkupPipeline> = LazyLock::new(MarkupPipeline::standard);

/// Transform markup with the standard rules and per-item list wrapping
pub fn transform(source: &str) -> String {
    STANDARD_PIPELINE.transform(source)
}
