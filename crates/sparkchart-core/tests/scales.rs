// File: crates/sparkchart-core/tests/scales.rs
// Purpose: Validate ordinal, band and linear scales (mapping, inversion, clamping, nice).

use sparkchart_core::{BandSpec, Interpolate, LinearSpec, OrdinalScale, Unknown};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn ordinal_registers_unseen_values_and_wraps() {
    let mut s = OrdinalScale::new().with_range(["red", "green"]);
    assert_eq!(s.map(&"a"), Some("red"));
    assert_eq!(s.map(&"b"), Some("green"));
    assert_eq!(s.map(&"c"), Some("red"));
    assert_eq!(s.map(&"a"), Some("red"));
    assert_eq!(s.domain(), &["a", "b", "c"]);
}

#[test]
fn ordinal_explicit_unknown_does_not_grow_domain() {
    let mut s = OrdinalScale::new()
        .with_domain([1, 2])
        .with_range([10, 20])
        .with_unknown(Unknown::Value(-1));
    assert_eq!(s.map(&3), Some(-1));
    assert_eq!(s.domain(), &[1, 2]);

    let mut undefined = OrdinalScale::new().with_domain([1]).with_range([10]).with_unknown(Unknown::Undefined);
    assert_eq!(undefined.map(&5), None);
    assert_eq!(undefined.domain().len(), 1);
}

#[test]
fn ordinal_domain_deduplicates_by_key() {
    let s: OrdinalScale<f64, &str, u64> = OrdinalScale::with_key(|v: &f64| v.to_bits())
        .with_domain([1.5, 2.5, 1.5, 3.5])
        .with_range(["x", "y", "z"]);
    assert_eq!(s.domain(), &[1.5, 2.5, 3.5]);
    assert_eq!(s.get(&3.5), Some("z"));
    assert_eq!(s.get(&9.0), None);
}

#[test]
fn ordinal_range_replacement_keeps_domain() {
    let mut s = OrdinalScale::new().with_domain(["a", "b"]).with_range([1, 2]);
    s.set_range([7]);
    assert_eq!(s.domain(), &["a", "b"]);
    assert_eq!(s.get(&"b"), Some(7));
}

#[test]
fn band_bandwidth_and_symmetry() {
    let b = BandSpec::new(0..5, (0.0, 100.0)).with_padding_inner(0.05).with_align(0.5).build();
    let step = 100.0 / 4.95;
    assert!(close(b.step(), step));
    assert!(close(b.bandwidth(), step * 0.95));
    assert!((b.bandwidth() - 19.19).abs() < 0.01);

    let starts = b.band_starts();
    assert_eq!(starts.len(), 5);
    for w in starts.windows(2) {
        assert!(close(w[1] - w[0], step));
    }
    let lead = starts[0] - 0.0;
    let trail = 100.0 - (starts[4] + b.bandwidth());
    assert!(close(lead, trail));
    assert_eq!(b.map(&7), None);
}

#[test]
fn band_alignment_and_outer_padding() {
    let spec = BandSpec::new(["a", "b"], (0.0, 120.0)).with_padding(0.5);
    // step = 120 / (2 - 0.5 + 1) = 48; leftover = 120 - 48 * 1.5 = 48
    let start = spec.clone().with_align(0.0).build();
    assert!(close(start.map(&"a").unwrap(), 0.0));
    let end = spec.clone().with_align(1.0).build();
    assert!(close(end.map(&"a").unwrap(), 48.0));
    let mid = spec.with_align(0.5).build();
    assert!(close(mid.map(&"a").unwrap(), 24.0));
    assert!(close(mid.map(&"b").unwrap(), 72.0));
    assert!(close(mid.bandwidth(), 24.0));
}

#[test]
fn band_reversed_range_and_rounding() {
    let b = BandSpec::new(0..3, (90.0, 0.0)).build();
    assert!(close(b.map(&0).unwrap(), 60.0));
    assert!(close(b.map(&2).unwrap(), 0.0));

    let r = BandSpec::new(0..3, (0.0, 100.0)).with_range_round((0.0, 100.0)).build();
    assert_eq!(r.step(), 33.0);
    assert_eq!(r.map(&0), Some(1.0));
    assert_eq!(r.bandwidth(), 33.0);
}

#[test]
fn band_options_are_clamped() {
    let spec = BandSpec::new(0..2, (0.0, 1.0)).with_align(3.0).with_padding_inner(4.0);
    assert_eq!(spec.align(), 1.0);
    assert_eq!(spec.padding_inner(), 1.0);
}

#[test]
fn band_empty_domain() {
    let b = BandSpec::<usize>::new(Vec::new(), (0.0, 10.0)).build();
    assert!(b.band_starts().is_empty());
    assert_eq!(b.step(), 10.0);
}

#[test]
fn linear_maps_and_inverts() {
    let s = LinearSpec::new([0.0, 10.0], [0.0, 100.0]).build();
    assert!(close(s.map(5.0), 50.0));
    assert!(close(s.invert(50.0), 5.0));
    assert!(close(s.map(20.0), 200.0));

    let flipped = LinearSpec::new([10.0, 0.0], [0.0, 100.0]).build();
    assert!(close(flipped.map(10.0), 0.0));
    assert!(close(flipped.map(0.0), 100.0));
}

#[test]
fn linear_round_trip_inside_domain() {
    let s = LinearSpec::new([-3.5, 42.0], [170.0, 10.0]).build();
    let mut x = -3.5;
    while x <= 42.0 {
        assert!((s.invert(s.map(x)) - x).abs() < 1e-9, "round trip failed at {x}");
        x += 0.7;
    }
}

#[test]
fn linear_clamp_restricts_input_and_inverse() {
    let s = LinearSpec::new([0.0, 10.0], [0.0, 100.0]).with_clamp(true).build();
    assert_eq!(s.map(20.0), 100.0);
    assert_eq!(s.map(-5.0), 0.0);
    assert_eq!(s.invert(150.0), 10.0);
}

#[test]
fn linear_piecewise_domain() {
    let s = LinearSpec::new([-1.0, 0.0, 1.0], [0.0, 50.0, 200.0]).build();
    assert!(close(s.map(-0.5), 25.0));
    assert!(close(s.map(0.5), 125.0));
    assert!(close(s.map(2.0), 350.0));
    assert!(close(s.invert(125.0), 0.5));

    let descending = LinearSpec::new([1.0, 0.0, -1.0], [200.0, 50.0, 0.0]).build();
    assert!(close(descending.map(0.5), 125.0));
}

#[test]
fn linear_degenerate_domain_maps_to_middle() {
    let s = LinearSpec::new([3.0, 3.0], [0.0, 100.0]).build();
    assert_eq!(s.map(3.0), 50.0);
    assert_eq!(s.map(-40.0), 50.0);
}

#[test]
fn linear_unknown_and_rounding() {
    let s = LinearSpec::new([0.0, 1.0], [0.0, 1.0]).build();
    assert!(s.map(f64::NAN).is_nan());
    let s = s.spec().clone().with_unknown(-1.0).build();
    assert_eq!(s.map(f64::NAN), -1.0);

    let r = LinearSpec::new([0.0, 3.0], [0.0, 0.0]).with_range_round([0.0, 10.0]).build();
    assert_eq!(r.spec().interpolate(), Interpolate::Round);
    assert_eq!(r.map(1.0), 3.0);
    assert_eq!(r.map(1.5), 5.0);
}

#[test]
fn nice_extends_to_round_values() {
    let s = LinearSpec::new([0.201479, 0.996679], [0.0, 1.0]).nice(10);
    assert_eq!(s.domain(), &[0.2, 1.0]);

    let s = LinearSpec::new([1.3, 9.7], [0.0, 1.0]).nice(10);
    assert_eq!(s.domain(), &[1.0, 10.0]);

    let s = LinearSpec::new([9.7, 1.3], [0.0, 1.0]).nice(10);
    assert_eq!(s.domain(), &[10.0, 1.0]);
}

#[test]
fn nice_is_idempotent() {
    for (a, b) in [(0.201479, 0.996679), (9.0, 15.0), (-13.2, 87.1), (1234.5, 1299.9)] {
        let once = LinearSpec::new([a, b], [0.0, 1.0]).nice(10);
        let twice = once.clone().nice(10);
        assert_eq!(once.domain(), twice.domain());
    }
}

#[test]
fn nice_leaves_flat_and_short_domains_alone() {
    let flat = LinearSpec::new([5.0, 5.0], [0.0, 1.0]).nice(10);
    assert_eq!(flat.domain(), &[5.0, 5.0]);
    let short = LinearSpec::new([5.0], [0.0, 1.0]).nice(10);
    assert_eq!(short.domain(), &[5.0]);
}

#[test]
fn scale_ticks_follow_domain() {
    let s = LinearSpec::new([0.0, 1.0], [0.0, 100.0]).build();
    assert_eq!(s.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
}
