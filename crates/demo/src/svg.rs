// File: crates/demo/src/svg.rs
// Summary: Wraps a rendered chart frame in a standalone SVG document.

use std::fmt::Write as _;

use sparkchart_core::{ChartFrame, Mark};

/// SVG document for `frame`: a grey zero line, then one path per mark.
/// Lines are stroked; areas, bars and dots are filled.
pub fn document(frame: &ChartFrame, color: &str) -> String {
    let (w, h, zero) = (frame.width, frame.height, frame.baseline_y);
    let mut body = String::new();
    for (mark, d) in &frame.paths {
        let _ = match mark {
            Mark::Line => writeln!(
                body,
                r#"  <path fill="none" style="vector-effect:non-scaling-stroke;" stroke="{color}" d="{d}"></path>"#
            ),
            Mark::Area | Mark::Bars | Mark::Dots => writeln!(body, r#"  <path fill="{color}" d="{d}"></path>"#),
        };
    }

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="none" viewBox="0 0 {w} {h}">"#
    );
    // a series without values has no zero line to draw
    if zero.is_finite() {
        let _ = writeln!(
            svg,
            r##"  <line style="vector-effect:non-scaling-stroke;" stroke="#ccc" x1="0" x2="{w}" y1="{zero}" y2="{zero}"></line>"##
        );
    }
    svg.push_str(&body);
    svg.push_str("</svg>\n");
    svg
}
