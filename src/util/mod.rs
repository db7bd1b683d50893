//! Utility modules

pub mod date;
pub mod input;
pub mod size;

pub use date::{format_iso_date_nice, last_updated_display};
pub use input::{page_count_from_field, parse_float_prefix, parse_int_prefix};
pub use size::{format_file_size, format_size_mb};
