use super::*;

#[test]
fn unlerp_handles_degenerate_spans() {
    assert_eq!(unlerp_clamped(0.5, 0.5, 0.4), 0.0);
    assert_eq!(unlerp_clamped(0.5, 0.5, 0.5), 1.0);
    assert_eq!(unlerp_clamped(0.0, 0.5, 0.25), 0.5);
    assert_eq!(unlerp_clamped(0.0, 0.5, 2.0), 1.0);
}

#[test]
fn lerp_u8_rounds_and_saturates() {
    assert_eq!(lerp_u8(0, 255, 0.5), 128);
    assert_eq!(lerp_u8(10, 20, 2.0), 30);
    assert_eq!(lerp_u8(200, 0, 1.0), 0);
}

#[test]
fn clamp01_maps_nan_to_zero() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(1.2), 1.0);
    assert_eq!(lerp_f64(2.0, 4.0, 0.5), 3.0);
}
