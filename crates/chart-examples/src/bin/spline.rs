// File: crates/chart-examples/src/bin/spline.rs
// Summary: Minimal example that prints the spline path and baseline for a short series.

use sparkchart_core::{render_line, ChartOptions};

fn main() -> sparkchart_core::Result<()> {
    // A short series with one gap
    let data = [Some(4.0), Some(6.5), Some(5.2), None, Some(8.1), Some(7.4), Some(9.0)];

    let out = render_line(data, &ChartOptions::small())?;
    println!("baseline y: {}", out.baseline_y);
    match out.path {
        Some(d) => println!("{d}"),
        None => println!("(nothing to draw)"),
    }
    Ok(())
}
