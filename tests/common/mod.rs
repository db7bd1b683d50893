//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use chrono::NaiveDate;
use markup_preview::model::{MarkupKind, ShapeKind};
use markup_preview::{Msg, PreviewConfig, PreviewController};

/// Fixed "today" so last-updated output is stable
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// Controller with default config and a fixed date
pub fn test_controller() -> PreviewController {
    PreviewController::with_today(PreviewConfig::default(), test_today())
}

/// Controller with `pages` pages, showing `page`, with the given kinds enabled
pub fn controller_with(
    pages: i64,
    page: u32,
    markups: &[MarkupKind],
    shapes: &[ShapeKind],
) -> PreviewController {
    let mut controller = test_controller();
    controller.dispatch(Msg::page_count(pages));
    for kind in markups {
        controller.dispatch(Msg::toggle_markup(*kind));
    }
    for kind in shapes {
        controller.dispatch(Msg::toggle_shape(*kind));
    }
    for _ in 1..page {
        controller.dispatch(Msg::next_page());
    }
    controller
}
