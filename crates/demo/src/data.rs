// File: crates/demo/src/data.rs
// Summary: CSV loading: locate the value column and parse rows into an optional-value series.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
pub fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

pub fn load_path(path: &Path, column: &str) -> Result<Vec<Option<f64>>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_series(file, column).with_context(|| format!("failed to load CSV '{}'", path.display()))
}

/// Reads `column` (case-insensitive header match) from CSV data. A file with
/// a single column is read regardless of its header. Blank or non-numeric
/// cells become gaps.
pub fn load_series<R: Read>(reader: R, column: &str) -> Result<Vec<Option<f64>>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let want = column.to_lowercase();
    let idx = match headers.iter().position(|h| *h == want) {
        Some(i) => i,
        None if headers.len() == 1 => 0,
        None => anyhow::bail!("column '{column}' not found; headers: {headers:?}"),
    };

    let mut out = Vec::new();
    let mut gaps = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let v = rec.get(idx).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite());
        if v.is_none() {
            gaps += 1;
        }
        out.push(v);
    }

    if gaps > 0 {
        warn!(gaps, "rows without a numeric value are drawn as gaps");
    }
    if out.iter().all(Option::is_none) {
        anyhow::bail!("no numeric values in column '{column}'");
    }
    Ok(out)
}
