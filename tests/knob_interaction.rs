//! Pointer interaction scenarios for the knob control.

use plug_ui::KnobCtrl;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn drag_up_raises_value_in_steps() {
    let mut k = KnobCtrl::with_range(0.0, 0.0, 100.0, 100.0, 0.0, 1.0, 0.0);

    assert!(k.on_pointer_down(50.0, 50.0));
    assert!(k.is_dragging());

    k.on_pointer_drag(50.0, 30.0);
    assert!(approx(k.value(), 0.2));

    k.on_pointer_drag(50.0, 10.0);
    assert!(approx(k.value(), 0.4));

    k.on_pointer_up(12.0, 345.0);
    assert!(!k.is_dragging());
    assert!(approx(k.value(), 0.4));
}

#[test]
fn press_in_corner_does_not_start_drag() {
    let mut k = KnobCtrl::new(0.0, 0.0, 100.0, 100.0);
    assert!(!k.on_pointer_down(0.0, 0.0));
    assert!(!k.is_dragging());
    assert!(!k.on_pointer_drag(50.0, 0.0));
    assert_eq!(k.normalized_value(), 0.0);
}

#[test]
fn drag_after_release_is_ignored() {
    let mut k = KnobCtrl::new(0.0, 0.0, 100.0, 100.0);
    k.on_pointer_down(50.0, 50.0);
    k.on_pointer_drag(50.0, 40.0);
    k.on_pointer_up(50.0, 40.0);
    k.on_pointer_up(50.0, 40.0);
    k.on_pointer_drag(50.0, 0.0);
    assert!(approx(k.normalized_value(), 0.1));
}

#[test]
fn set_value_round_trips_inside_range() {
    let mut k = KnobCtrl::with_range(0.0, 0.0, 60.0, 60.0, 20.0, 20_000.0, 20.0);
    for v in [20.0_f32, 440.0, 1000.0, 9999.5, 20_000.0] {
        k.set_value(v);
        assert!((k.value() - v).abs() <= v.abs() * 1e-5, "{v} read back as {}", k.value());
    }
}

#[test]
fn set_value_is_not_clamped() {
    let mut k = KnobCtrl::with_range(0.0, 0.0, 100.0, 100.0, 0.0, 100.0, 0.0);
    k.set_value(150.0);
    assert!(approx(k.value(), 150.0));
    assert!(approx(k.normalized_value(), 1.5));

    // The first drag pulls an out-of-range value back into [0, 1].
    k.on_pointer_down(50.0, 50.0);
    k.on_pointer_drag(50.0, 49.0);
    assert_eq!(k.normalized_value(), 1.0);
}

#[test]
fn drag_sequences_stay_clamped() {
    let mut k = KnobCtrl::new(0.0, 0.0, 100.0, 100.0);
    k.on_pointer_down(50.0, 50.0);
    // Deterministic zig-zag with large swings in both directions.
    let mut y = 50.0_f32;
    for i in 0..200 {
        let step = ((i * 37) % 151) as f32 - 75.0;
        y += step;
        k.on_pointer_drag(50.0, y);
        let n = k.normalized_value();
        assert!((0.0..=1.0).contains(&n), "normalized value {n} escaped after step {i}");
    }
}

#[test]
fn hit_test_boundary() {
    let k = KnobCtrl::new(10.0, 10.0, 80.0, 80.0);
    let (cx, cy, r) = (50.0_f32, 50.0_f32, 40.0_f32);
    let eps = 0.01;
    assert!(k.hit_test(cx, cy));
    for (dx, dy) in [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)] {
        assert!(k.hit_test(cx + dx * r, cy + dy * r));
        assert!(!k.hit_test(cx + dx * (r + eps), cy + dy * (r + eps)));
    }
}
