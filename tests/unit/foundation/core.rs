use super::*;

#[test]
fn progress_clamps_and_rejects_nan() {
    assert_eq!(Progress::new(-0.5).get(), 0.0);
    assert_eq!(Progress::new(1.5).get(), 1.0);
    assert_eq!(Progress::new(f64::NAN).get(), 0.0);
    assert_eq!(Progress::new(f64::INFINITY).get(), 0.0);
    assert_eq!(Progress::new(0.25).get(), 0.25);
}

#[test]
fn progress_serializes_as_plain_number() {
    let s = serde_json::to_string(&Progress::new(0.5)).unwrap();
    assert_eq!(s, "0.5");
    let p: Progress = serde_json::from_str("2.0").unwrap();
    assert_eq!(p, Progress::END);
}

#[test]
fn pointer_clamps_each_axis() {
    let p = Pointer::new(3.0, -7.0);
    assert_eq!(p, Pointer { x: 1.0, y: -1.0 });
    assert_eq!(Pointer::new(f64::NAN, 0.5), Pointer { x: 0.0, y: 0.5 });
}

#[test]
fn viewport_rejects_negative() {
    assert!(ViewportSize::new(-1.0, 10.0).is_err());
    assert!(ViewportSize::new(0.0, 0.0).is_ok());
}

#[test]
fn hex_colors_parse_and_format() {
    let c = Rgba8::from_hex("#ff8000").unwrap();
    assert_eq!(c, Rgba8::rgb(255, 128, 0));
    assert_eq!(c.to_hex(), "#ff8000ff");
    assert_eq!(Rgba8::from_hex("00000080").unwrap().a, 128);
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
}
