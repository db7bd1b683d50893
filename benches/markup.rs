//! Benchmarks for markup rendering and preview derivation
//!
//! Run with: cargo bench markup

use markup_preview::markup::{ListWrapping, MarkupPipeline};
use markup_preview::model::{MarkupKind, PreviewState, ShapeKind, SAMPLE_MARKDOWN};
use markup_preview::{preview, update::update, AppModel, Msg};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn mixed_source(repeats: usize) -> String {
    "# Level 2\n**Beam** at *grid A*, see [plan](p.pdf)\n- Fuse Box\n- Gas Meter\n> Verify\n\n"
        .repeat(repeats)
}

// ============================================================================
// Markup pipeline
// ============================================================================

#[divan::bench(args = [1, 10, 100])]
fn transform_sample(repeats: usize) {
    let pipeline = MarkupPipeline::standard();
    let source = SAMPLE_MARKDOWN.repeat(repeats);
    divan::black_box(pipeline.transform(divan::black_box(&source)));
}

#[divan::bench(args = [10, 100, 1_000])]
fn transform_mixed_per_item(repeats: usize) {
    let pipeline = MarkupPipeline::standard();
    let source = mixed_source(repeats);
    divan::black_box(pipeline.transform(divan::black_box(&source)));
}

#[divan::bench(args = [10, 100, 1_000])]
fn transform_mixed_merged(repeats: usize) {
    let pipeline = MarkupPipeline::standard().with_list_wrapping(ListWrapping::Merged);
    let source = mixed_source(repeats);
    divan::black_box(pipeline.transform(divan::black_box(&source)));
}

// ============================================================================
// Preview content
// ============================================================================

#[divan::bench]
fn generate_blocks() {
    let mut state = PreviewState::new();
    state.set_total_pages(50);
    state.set_current_page(25);
    state.toggle_markup_kind(MarkupKind::Text);
    state.toggle_markup_kind(MarkupKind::Shapes);
    for kind in ShapeKind::ALL {
        state.toggle_shape_kind(kind);
    }
    divan::black_box(preview::generate(divan::black_box(&state)));
}

#[divan::bench(args = [10, 100])]
fn page_through_document(pages: i64) {
    let mut model = AppModel::default();
    update(&mut model, Msg::page_count(pages));
    update(&mut model, Msg::toggle_markup(MarkupKind::Shapes));
    for _ in 1..pages {
        update(&mut model, Msg::next_page());
    }
    divan::black_box(model.preview.current_page());
}
