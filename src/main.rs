//! markup-preview binary
//!
//! Feeds command-line form values through the preview controller and prints
//! the resulting render instructions.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use markup_preview::cli::{CliArgs, OutputFormat};
use markup_preview::{PreviewConfig, PreviewController};

fn main() -> Result<()> {
    markup_preview::tracing::init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => PreviewConfig::load_from(path).map_err(anyhow::Error::msg)?,
        None => PreviewConfig::load(),
    };
    if let Some(wrapping) = args.list_wrapping {
        config.list_wrapping = wrapping.into();
    }

    let markdown = read_markdown(&args)?;
    let format = args.format;

    let mut controller = PreviewController::new(config);
    let cmds = controller.dispatch_all(args.into_messages(markdown));
    tracing::debug!("Applied {} form events", cmds.len());

    let instructions = controller.render();
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&instructions)
                .context("Failed to serialize render instructions")?;
            println!("{}", json);
        }
        OutputFormat::Text => println!("{}", instructions.to_text()),
    }

    Ok(())
}

fn read_markdown(args: &CliArgs) -> Result<Option<String>> {
    let Some(path) = &args.markdown else {
        return Ok(None);
    };

    if args.markdown_from_stdin() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read markup from stdin")?;
        return Ok(Some(source));
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read markup from {}", path.display()))?;
    Ok(Some(source))
}
