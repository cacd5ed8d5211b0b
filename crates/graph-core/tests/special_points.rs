// File: crates/graph-core/tests/special_points.rs
// Purpose: Validate floor-parity classification of special points.

use graph_core::Sample;

#[test]
fn floor_parity_classification() {
    assert!(Sample::new(0.0, 4.0).is_special());
    assert!(!Sample::new(0.0, 3.0).is_special());
    assert!(Sample::new(0.0, -2.0).is_special());

    // floor(-1.5) = -2, which is even. Truncation toward zero would give -1
    // and misclassify this point.
    assert!(Sample::new(0.0, -1.5).is_special());
    // floor(-0.5) = -1, odd.
    assert!(!Sample::new(0.0, -0.5).is_special());
    // floor(0.25) = 0, even.
    assert!(Sample::new(0.0, 0.25).is_special());
}

#[test]
fn non_finite_y_is_never_special() {
    assert!(!Sample::new(0.0, f64::NAN).is_special());
    assert!(!Sample::new(0.0, f64::INFINITY).is_special());
}
