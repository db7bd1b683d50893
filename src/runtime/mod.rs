//! Runtime glue between input events and the pure update/view functions

mod controller;

pub use controller::PreviewController;
