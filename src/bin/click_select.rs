//! CLI for resolving click selections over a scene file
//!
//! Usage:
//!   click_select --input scene.txt
//!   click_select --input scene.txt --expected answer.txt
//!   click_select < scene.txt
//!
//! Set RUST_LOG=debug to trace every click decision on stderr.

use anyhow::{bail, Context};
use clap::Parser;
use click_select::{compare_output, RenderOptions};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve which icon or region each click selects
///
/// Examples:
///   click_select --input scene.txt              # print one line per click
///   click_select -i scene.txt -e expected.txt   # verify against a reference answer
///   click_select -i scene.txt --json            # one JSON object per click
#[derive(Parser, Debug)]
#[clap(name = "click_select", version, about = "Resolve click selections over stacked icons and regions")]
struct CliArgs {
    /// Scene file; reads stdin when omitted
    #[clap(long = "input", short = 'i')]
    input: Option<PathBuf>,

    /// Reference answer to compare the output against (trailing whitespace ignored)
    #[clap(long = "expected", short = 'e')]
    expected: Option<PathBuf>,

    /// Width of the right-aligned field for icon names
    #[clap(long = "icon-width", default_value_t = 3)]
    icon_width: usize,

    /// Emit one JSON object per click instead of text lines
    #[clap(long = "json")]
    json: bool,

    /// Resolve clicks in parallel
    #[clap(long = "parallel")]
    parallel: bool,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read scene from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let options = RenderOptions {
        icon_width: args.icon_width,
        json: args.json,
    };

    let text = read_input(args.input.as_ref())?;
    let output = click_select::run(&text, &options, args.parallel)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    if let Some(expected_path) = &args.expected {
        let expected = std::fs::read_to_string(expected_path)
            .with_context(|| format!("failed to read expected output {}", expected_path.display()))?;
        if let Some(mismatch) = compare_output(&output, &expected) {
            bail!(
                "output differs from {} at line {}: expected {:?}, got {:?}",
                expected_path.display(),
                mismatch.line,
                mismatch.expected.unwrap_or_default(),
                mismatch.actual.unwrap_or_default()
            );
        }
        tracing::info!("output matches {}", expected_path.display());
    }

    Ok(())
}
