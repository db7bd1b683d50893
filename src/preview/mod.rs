//! Preview content generation
//!
//! Pure derivations from [`PreviewState`](crate::model::PreviewState): the
//! blocks drawn on the current page and the summary strings around them.

mod content;

pub use content::{
    generate, markup_summary, page_indicator, shape_dimensions, PageContentBlock,
    NO_MARKUPS_PLACEHOLDER,
};
