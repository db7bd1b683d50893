//! Command-line argument parsing for the preview binary
//!
//! Supports:
//! - Setting every form field the preview reflects
//! - Choosing which page to show
//! - Reading annotation markup from a file or stdin
//! - JSON or plain-text output

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::markup::ListWrapping;
use crate::messages::{FormMsg, Msg};
use crate::model::{MarkupKind, ShapeKind};
use crate::util::{page_count_from_field, parse_float_prefix};

/// Render a document preview from form values
#[derive(Parser, Debug)]
#[command(
    name = "markup-preview",
    version,
    about = "Preview a generated document from form values"
)]
pub struct CliArgs {
    /// Target file size in megabytes (leading number is used, e.g. "2.5MB")
    #[arg(long, value_name = "MB", allow_hyphen_values = true)]
    pub target_size: Option<String>,

    /// Number of pages in the preview (non-numeric or zero means 1)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub pages: Option<String>,

    /// Page to show (stops at the last page)
    #[arg(long, value_name = "N")]
    pub page: Option<u32>,

    /// Include text markups
    #[arg(long)]
    pub text: bool,

    /// Include shape markups
    #[arg(long)]
    pub shapes: bool,

    /// Shape kind to include (box, cloud, pen); repeatable
    #[arg(long = "shape", value_name = "KIND", value_parser = parse_shape_kind)]
    pub shape_kinds: Vec<ShapeKind>,

    /// Output file name (without extension)
    #[arg(long, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Modification date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub modified_date: Option<String>,

    /// Annotation markup file, or `-` for stdin
    #[arg(long, value_name = "PATH", conflicts_with = "sample")]
    pub markdown: Option<PathBuf>,

    /// Use the built-in sample annotations
    #[arg(long)]
    pub sample: bool,

    /// Override list wrapping from the config file
    #[arg(long, value_enum, value_name = "MODE")]
    pub list_wrapping: Option<ListWrappingArg>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How render instructions are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// CLI spelling of [`ListWrapping`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListWrappingArg {
    PerItem,
    Merged,
}

impl From<ListWrappingArg> for ListWrapping {
    fn from(arg: ListWrappingArg) -> Self {
        match arg {
            ListWrappingArg::PerItem => ListWrapping::PerItem,
            ListWrappingArg::Merged => ListWrapping::Merged,
        }
    }
}

fn parse_shape_kind(value: &str) -> Result<ShapeKind, String> {
    ShapeKind::from_wire(value)
        .ok_or_else(|| format!("unknown shape kind '{}' (expected box, cloud or pen)", value))
}

impl CliArgs {
    /// Whether the markup source should be read from stdin
    pub fn markdown_from_stdin(&self) -> bool {
        self.markdown
            .as_ref()
            .is_some_and(|path| path.as_os_str() == "-")
    }

    /// Translate the arguments into the form events a user would produce.
    ///
    /// `markdown` is the already-read annotation source, if any.
    pub fn into_messages(self, markdown: Option<String>) -> Vec<Msg> {
        let mut msgs = Vec::new();

        if let Some(size) = self.target_size {
            // No number at all falls back to the configured default
            let size = parse_float_prefix(&size).unwrap_or(f64::NAN);
            msgs.push(Msg::Form(FormMsg::TargetSizeChanged(size)));
        }
        if let Some(pages) = self.pages {
            msgs.push(Msg::page_count(page_count_from_field(&pages)));
        }
        if let Some(name) = self.file_name {
            msgs.push(Msg::Form(FormMsg::FileNameChanged(name)));
        }
        if self.modified_date.is_some() {
            msgs.push(Msg::Form(FormMsg::ModifiedDateChanged(self.modified_date)));
        }
        if self.text {
            msgs.push(Msg::toggle_markup(MarkupKind::Text));
        }
        if self.shapes {
            msgs.push(Msg::toggle_markup(MarkupKind::Shapes));
        }

        // Repeated kinds must not toggle themselves back off
        let mut seen = Vec::new();
        for kind in self.shape_kinds {
            if !seen.contains(&kind) {
                seen.push(kind);
                msgs.push(Msg::toggle_shape(kind));
            }
        }

        if self.sample {
            msgs.push(Msg::Form(FormMsg::InsertSampleMarkdown));
        } else if let Some(source) = markdown {
            msgs.push(Msg::markdown(source));
        }

        if let Some(page) = self.page {
            msgs.push(Msg::go_to_page(page));
        }

        msgs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("markup-preview").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_args_gives_no_messages() {
        assert!(parse(&[]).into_messages(None).is_empty());
    }

    #[test]
    fn test_page_becomes_single_jump() {
        let msgs = parse(&["--pages", "5", "--page", "3"]).into_messages(None);
        assert_eq!(msgs, vec![Msg::page_count(5), Msg::go_to_page(3)]);
    }

    #[test]
    fn test_page_beyond_count_is_one_message() {
        let msgs = parse(&["--pages", "2", "--page", "4294967295"]).into_messages(None);
        assert_eq!(msgs, vec![Msg::page_count(2), Msg::go_to_page(u32::MAX)]);

        let mut model = crate::model::AppModel::default();
        for msg in msgs {
            crate::update::update(&mut model, msg);
        }
        assert_eq!(model.preview.current_page(), 2);
    }

    #[test]
    fn test_negative_pages_accepted() {
        let msgs = parse(&["--pages", "-4"]).into_messages(None);
        assert_eq!(msgs, vec![Msg::page_count(-4)]);
    }

    #[test]
    fn test_raw_field_text_is_parsed_leniently() {
        let msgs = parse(&["--target-size", "2.5MB", "--pages", "abc"]).into_messages(None);
        assert_eq!(
            msgs,
            vec![
                Msg::Form(FormMsg::TargetSizeChanged(2.5)),
                Msg::page_count(1),
            ]
        );
    }

    #[test]
    fn test_shape_kinds_are_deduplicated() {
        let msgs = parse(&["--shapes", "--shape", "box", "--shape", "pen", "--shape", "box"])
            .into_messages(None);
        assert_eq!(
            msgs,
            vec![
                Msg::toggle_markup(MarkupKind::Shapes),
                Msg::toggle_shape(ShapeKind::Box),
                Msg::toggle_shape(ShapeKind::VectorPen),
            ]
        );
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let result = CliArgs::try_parse_from(["markup-preview", "--shape", "star"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_markdown_source_is_forwarded() {
        let msgs = parse(&["--markdown", "notes.md"]).into_messages(Some("# Hi".to_string()));
        assert_eq!(msgs, vec![Msg::markdown("# Hi")]);
    }

    #[test]
    fn test_stdin_marker() {
        assert!(parse(&["--markdown", "-"]).markdown_from_stdin());
        assert!(!parse(&["--markdown", "a.md"]).markdown_from_stdin());
    }

    #[test]
    fn test_sample_conflicts_with_markdown() {
        let result =
            CliArgs::try_parse_from(["markup-preview", "--sample", "--markdown", "a.md"]);
        assert!(result.is_err());
    }
}
