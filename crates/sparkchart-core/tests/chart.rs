// File: crates/sparkchart-core/tests/chart.rs
// Purpose: End-to-end chart assembly: scales from data, marks, gaps and degenerate series.

use sparkchart_core::{render_line, Chart, ChartOptions, CurveKind, Mark};

const SERIES: [f64; 5] = [10.0, 12.0, 9.0, 15.0, 11.0];

fn count(d: &str, c: char) -> usize {
    d.chars().filter(|&x| x == c).count()
}

#[test]
fn small_chart_scales_and_line() {
    let chart = Chart::new(SERIES, &ChartOptions::small());
    assert_eq!(chart.y_scale().domain(), &[9.0, 15.0]);
    assert_eq!(chart.x_scale().domain().len(), 5);

    for i in 0..SERIES.len() {
        let (x, y) = chart.point(i).expect("defined point");
        assert!((5.0..=235.0).contains(&x), "x {x}");
        assert!((5.0 - 1e-9..=85.0 + 1e-9).contains(&y), "y {y}");
    }
    assert!((chart.point(3).expect("max").1 - 5.0).abs() < 1e-9);
    assert!((chart.point(2).expect("min").1 - 85.0).abs() < 1e-9);
    assert!((chart.baseline_y() - 205.0).abs() < 1e-9);

    let d = chart.line_path().expect("line").expect("path");
    assert!(d.starts_with('M'));
    assert_eq!(count(&d, 'C'), 4);
}

#[test]
fn points_sit_on_band_centres() {
    let chart = Chart::new(SERIES, &ChartOptions::default());
    let x = chart.x_scale();
    for i in 0..SERIES.len() {
        let start = x.map(&i).expect("band");
        let (cx, _) = chart.point(i).expect("point");
        assert!((cx - (start + x.bandwidth() / 2.0)).abs() < 1e-9);
    }
}

#[test]
fn flat_series_stays_finite() {
    let out = render_line([5.0, 5.0, 5.0], &ChartOptions::small()).expect("render");
    let d = out.path.expect("path");
    assert!(!d.contains("NaN"), "{d}");
    assert_eq!(out.baseline_y, 45.0);
}

#[test]
fn empty_series_draws_nothing() {
    let out = render_line(Vec::<f64>::new(), &ChartOptions::default()).expect("render");
    assert_eq!(out.path, None);
    assert!(out.baseline_y.is_nan());

    let chart = Chart::new(Vec::<f64>::new(), &ChartOptions::default());
    let frame = chart.frame(&[Mark::Line, Mark::Area, Mark::Bars, Mark::Dots]).expect("frame");
    assert!(frame.paths.is_empty());
}

#[test]
fn gaps_keep_their_band_and_break_the_line() {
    let chart = Chart::new([Some(1.0), None, Some(3.0)], &ChartOptions::default());
    assert_eq!(chart.x_scale().domain().len(), 3);
    assert_eq!(chart.point(1), None);
    let d = chart.line_path().expect("line").expect("path");
    assert_eq!(count(&d, 'M'), 2);
}

#[test]
fn dots_are_full_circles() {
    let chart = Chart::new([1.0, 2.0, 3.0], &ChartOptions::small());
    let frame = chart.frame(&[Mark::Dots]).expect("frame");
    let (mark, d) = &frame.paths[0];
    assert_eq!(*mark, Mark::Dots);
    assert_eq!(count(d, 'M'), 3);
    assert_eq!(count(d, 'A'), 6);
    assert_eq!(count(d, 'L'), 0);
}

#[test]
fn bars_grow_from_zero_in_both_directions() {
    let chart = Chart::new([1.0, -1.0], &ChartOptions::default());
    assert!((chart.baseline_y() - 90.0).abs() < 1e-9);
    let d = chart.bars_path().expect("bars").expect("path");
    assert_eq!(count(&d, 'Z'), 2);
    assert_eq!(d.matches("v80").count(), 2);
}

#[test]
fn area_closes_on_the_baseline() {
    let opts = ChartOptions { curve: CurveKind::Linear, ..ChartOptions::default() };
    let chart = Chart::new([1.0, 2.0, 3.0], &opts);
    assert_eq!(chart.y_scale().domain(), &[1.0, 3.0]);
    let d = chart.area_path().expect("area").expect("path");
    assert!(d.ends_with(",250Z"), "{d}");
    assert_eq!(count(&d, 'M'), 1);
}

#[test]
fn frame_keeps_mark_order_and_viewport() {
    let chart = Chart::new(SERIES, &ChartOptions::default());
    let frame = chart.frame(&[Mark::Area, Mark::Line, Mark::Dots]).expect("frame");
    assert_eq!((frame.width, frame.height), (480.0, 180.0));
    let marks: Vec<Mark> = frame.paths.iter().map(|(m, _)| *m).collect();
    assert_eq!(marks, vec![Mark::Area, Mark::Line, Mark::Dots]);
    assert_eq!(frame.baseline_y, chart.baseline_y());
}

#[test]
fn small_preset_viewport() {
    let opts = ChartOptions::small();
    assert_eq!(opts.viewport(), (240.0, 90.0));
    assert_eq!(ChartOptions::default().viewport(), (480.0, 180.0));
}

#[test]
fn unrounded_output_keeps_full_precision() {
    let opts = ChartOptions { digits: None, curve: CurveKind::Linear, ..ChartOptions::small() };
    let rounded = render_line(SERIES, &ChartOptions { curve: CurveKind::Linear, ..ChartOptions::small() })
        .expect("render")
        .path
        .expect("path");
    let full = render_line(SERIES, &opts).expect("render").path.expect("path");
    assert!(full.len() > rounded.len());
}

#[test]
fn invalid_digits_surface_as_errors() {
    let opts = ChartOptions { digits: Some(-2.0), ..ChartOptions::default() };
    assert!(render_line(SERIES, &opts).is_err());
}
