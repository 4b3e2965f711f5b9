use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL.into_iter().filter(|e| e.is_bounded()) {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_back_overshoots() {
    let peak = (1..100)
        .map(|i| Ease::OutBack.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn inputs_outside_unit_range_are_clamped() {
    assert_eq!(Ease::InQuad.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(4.0), 1.0);
}

#[test]
fn serde_uses_snake_case_names() {
    let e: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
    assert_eq!(e, Ease::InOutCubic);
    assert_eq!(serde_json::to_string(&Ease::OutExpo).unwrap(), "\"out_expo\"");
}
