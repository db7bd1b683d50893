//! Preview pagination and markup selection state
//!
//! Single source of truth for which page is shown and which markup kinds are
//! enabled. All mutation goes through the methods below so the page bounds
//! hold after every operation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Category of annotation content the preview can include
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupKind {
    Text,
    Shapes,
}

impl MarkupKind {
    /// Display label (e.g., "Text")
    pub fn label(self) -> &'static str {
        match self {
            MarkupKind::Text => "Text",
            MarkupKind::Shapes => "Shapes",
        }
    }
}

/// Sub-type of Shapes markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Box,
    Cloud,
    VectorPen,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Box, ShapeKind::Cloud, ShapeKind::VectorPen];

    /// Display label (e.g., "Vector Pen")
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Box => "Box",
            ShapeKind::Cloud => "Cloud",
            ShapeKind::VectorPen => "Vector Pen",
        }
    }

    /// Form value used when submitting (e.g., "pen")
    pub fn wire_value(self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Cloud => "cloud",
            ShapeKind::VectorPen => "pen",
        }
    }

    /// Parse a form value or label, case-insensitively
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "box" => Some(ShapeKind::Box),
            "cloud" => Some(ShapeKind::Cloud),
            "pen" | "vector-pen" | "vector pen" | "vectorpen" => Some(ShapeKind::VectorPen),
            _ => None,
        }
    }
}

/// Page navigation and markup selection for the preview panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    /// Page currently shown (1-indexed)
    current_page: u32,
    /// Number of pages in the preview (always >= 1)
    total_pages: u32,
    markup_kinds: BTreeSet<MarkupKind>,
    shape_kinds: BTreeSet<ShapeKind>,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewState {
    /// Session-start state: page 1 of 1, nothing enabled
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            markup_kinds: BTreeSet::new(),
            shape_kinds: BTreeSet::new(),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn markup_kinds(&self) -> &BTreeSet<MarkupKind> {
        &self.markup_kinds
    }

    pub fn shape_kinds(&self) -> &BTreeSet<ShapeKind> {
        &self.shape_kinds
    }

    pub fn is_markup_enabled(&self, kind: MarkupKind) -> bool {
        self.markup_kinds.contains(&kind)
    }

    pub fn is_shape_enabled(&self, kind: ShapeKind) -> bool {
        self.shape_kinds.contains(&kind)
    }

    /// Set the page count. Values below 1 become 1.
    ///
    /// If the current page no longer exists it resets to page 1 rather than
    /// clamping to the new last page.
    pub fn set_total_pages(&mut self, n: i64) {
        let total = n.clamp(1, i64::from(u32::MAX)) as u32;
        self.total_pages = total;
        if self.current_page > total {
            tracing::debug!(
                "Current page {} beyond new total {}, resetting to 1",
                self.current_page,
                total
            );
            self.current_page = 1;
        }
    }

    /// Jump to a page. Out-of-range requests are ignored.
    ///
    /// Returns whether the page was applied.
    pub fn set_current_page(&mut self, page: i64) -> bool {
        if page < 1 || page > i64::from(self.total_pages) {
            return false;
        }
        self.current_page = page as u32;
        true
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Jump to `page`, clamped to `1..=total_pages`.
    ///
    /// Returns whether the current page changed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.total_pages);
        let moved = target != self.current_page;
        self.current_page = target;
        moved
    }

    /// Go back one page; no-op on page 1
    pub fn prev_page(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Panic if the page bounds are broken, naming the message that broke them
    pub fn assert_invariants(&self, context: &str) {
        assert!(
            self.total_pages >= 1,
            "[{}] total_pages must be >= 1, got {}",
            context,
            self.total_pages
        );
        assert!(
            (1..=self.total_pages).contains(&self.current_page),
            "[{}] current_page {} outside 1..={}",
            context,
            self.current_page,
            self.total_pages
        );
    }

    /// Enable or disable a markup kind. Returns whether it is now enabled.
    pub fn toggle_markup_kind(&mut self, kind: MarkupKind) -> bool {
        if !self.markup_kinds.remove(&kind) {
            self.markup_kinds.insert(kind);
        }
        self.is_markup_enabled(kind)
    }

    /// Enable or disable a shape kind. Returns whether it is now enabled.
    pub fn toggle_shape_kind(&mut self, kind: ShapeKind) -> bool {
        if !self.shape_kinds.remove(&kind) {
            self.shape_kinds.insert(kind);
        }
        self.is_shape_enabled(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bounds(state: &PreviewState) {
        assert!(state.total_pages() >= 1);
        assert!(state.current_page() >= 1);
        assert!(state.current_page() <= state.total_pages());
    }

    #[test]
    fn test_defaults() {
        let state = PreviewState::new();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);
        assert!(state.markup_kinds().is_empty());
        assert!(state.shape_kinds().is_empty());
    }

    #[test]
    fn test_set_total_pages_keeps_bounds() {
        for n in [-5, 0, 1, 2, 7, 100] {
            let mut state = PreviewState::new();
            state.set_total_pages(n);
            assert_eq!(i64::from(state.total_pages()), n.max(1));
            assert_bounds(&state);
        }
    }

    #[test]
    fn test_shrinking_resets_rather_than_clamps() {
        let mut state = PreviewState::new();
        state.set_total_pages(10);
        assert!(state.set_current_page(8));
        state.set_total_pages(5);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn test_shrinking_keeps_page_still_in_range() {
        let mut state = PreviewState::new();
        state.set_total_pages(10);
        state.set_current_page(3);
        state.set_total_pages(3);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_set_current_page_out_of_range_is_ignored() {
        let mut state = PreviewState::new();
        state.set_total_pages(4);
        assert!(!state.set_current_page(0));
        assert!(!state.set_current_page(5));
        assert_eq!(state.current_page(), 1);
        assert!(state.set_current_page(4));
        assert_eq!(state.current_page(), 4);
    }

    #[test]
    fn test_navigation_stops_at_edges() {
        let mut state = PreviewState::new();
        state.set_total_pages(2);
        assert!(!state.prev_page());
        assert!(state.next_page());
        assert_eq!(state.current_page(), 2);
        assert!(!state.next_page());
        assert_eq!(state.current_page(), 2);
        assert!(state.prev_page());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = PreviewState::new();
        state.set_total_pages(5);
        assert!(state.go_to_page(u32::MAX));
        assert_eq!(state.current_page(), 5);
        assert!(!state.go_to_page(9));
        assert!(state.go_to_page(0));
        assert_eq!(state.current_page(), 1);
        assert!(state.go_to_page(3));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = PreviewState::new();
        let before = state.clone();
        assert!(state.toggle_markup_kind(MarkupKind::Shapes));
        assert!(state.toggle_shape_kind(ShapeKind::Cloud));
        assert!(!state.toggle_markup_kind(MarkupKind::Shapes));
        assert!(!state.toggle_shape_kind(ShapeKind::Cloud));
        assert_eq!(state, before);
    }

    #[test]
    fn test_shape_kind_from_wire() {
        assert_eq!(ShapeKind::from_wire("pen"), Some(ShapeKind::VectorPen));
        assert_eq!(ShapeKind::from_wire(" Box "), Some(ShapeKind::Box));
        assert_eq!(ShapeKind::from_wire("triangle"), None);
    }
}
