// File: crates/demo/src/main.rs
// Summary: Demo loads a price series from CSV (file or stdin) and writes an SVG sparkline.

mod cli;
mod data;
mod svg;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use sparkchart_core::{extent, Chart};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let values = match cli.input_path() {
        Some(raw) => {
            let (path, used_alt) = data::resolve_path(raw)?;
            info!(input = %path.display(), used_alt, "using input file");
            data::load_path(&path, &cli.column)?
        }
        None => {
            info!("reading CSV from stdin");
            data::load_series(std::io::stdin().lock(), &cli.column).context("failed to load CSV from stdin")?
        }
    };
    info!(rows = values.len(), extent = ?extent(values.iter().copied()), "loaded series");

    let opts = cli.chart_options();
    let chart = Chart::new(values, &opts);
    let frame = chart.frame(&cli.marks()).context("rendering chart")?;
    let doc = svg::document(&frame, &cli.color);

    match &cli.output {
        Some(out) => {
            write_output(out, &doc)?;
            info!(output = %out.display(), marks = frame.paths.len(), "wrote chart");
        }
        None => print!("{doc}"),
    }
    Ok(())
}

fn write_output(out: &Path, doc: &str) -> Result<()> {
    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(out, doc).with_context(|| format!("writing {}", out.display()))
}
