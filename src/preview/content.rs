//! Per-page mock content derived from the preview state

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{MarkupKind, PreviewState, ShapeKind};

/// Shown in place of blocks when no markup kind is enabled
pub const NO_MARKUPS_PLACEHOLDER: &str = "No markups selected";

const SHAPE_BASE_WIDTH: u64 = 40;
const SHAPE_WIDTH_PER_PAGE: u64 = 5;
const SHAPE_BASE_HEIGHT: u64 = 30;
const SHAPE_HEIGHT_PER_PAGE: u64 = 3;

/// One unit of generated preview content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageContentBlock {
    Text {
        page_number: u32,
    },
    Shape {
        width: u64,
        height: u64,
        kinds: BTreeSet<ShapeKind>,
    },
}

impl PageContentBlock {
    /// Text displayed inside the block
    pub fn label(&self) -> String {
        match self {
            PageContentBlock::Text { page_number } => {
                format!("Sample text content for page {}", page_number)
            }
            PageContentBlock::Shape { kinds, .. } => join_shape_labels(kinds),
        }
    }
}

/// Size of the mock shape on a page; grows with the page number.
///
/// Computed in `u64`, which holds the result for every `u32` page.
pub fn shape_dimensions(page: u32) -> (u64, u64) {
    let page = u64::from(page);
    (
        SHAPE_BASE_WIDTH + SHAPE_WIDTH_PER_PAGE * page,
        SHAPE_BASE_HEIGHT + SHAPE_HEIGHT_PER_PAGE * page,
    )
}

/// Blocks for the current page: text first, then shape. Empty when nothing is enabled.
pub fn generate(state: &PreviewState) -> Vec<PageContentBlock> {
    let page = state.current_page();
    let mut blocks = Vec::with_capacity(2);

    if state.is_markup_enabled(MarkupKind::Text) {
        blocks.push(PageContentBlock::Text { page_number: page });
    }

    if state.is_markup_enabled(MarkupKind::Shapes) {
        let (width, height) = shape_dimensions(page);
        blocks.push(PageContentBlock::Shape {
            width,
            height,
            kinds: state.shape_kinds().clone(),
        });
    }

    blocks
}

fn join_shape_labels(kinds: &BTreeSet<ShapeKind>) -> String {
    kinds
        .iter()
        .map(|k| k.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary of the enabled markup kinds, e.g. `"Text, Shapes"`, or `"None"`.
///
/// Shape kinds only show up in the shape block label.
pub fn markup_summary(state: &PreviewState) -> String {
    let parts: Vec<&str> = state.markup_kinds().iter().map(|kind| kind.label()).collect();

    if parts.is_empty() {
        "None".to_string()
    } else {
        parts.join(", ")
    }
}

/// `"Page 3"`
pub fn page_indicator(state: &PreviewState) -> String {
    format!("Page {}", state.current_page())
}
