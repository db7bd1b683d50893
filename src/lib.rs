//! Markup Preview - Elm-style preview layer for a document-generation form
//!
//! This crate provides the page preview state machine, the annotation markup
//! renderer, and the message/update/view plumbing that ties them to a form.

pub mod cli;
pub mod commands;
pub mod config;
pub mod markup;
pub mod messages;
pub mod model;
pub mod preview;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::{Alert, AlertLevel, Cmd};
pub use config::PreviewConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::PreviewController;
pub use view::RenderInstructions;
