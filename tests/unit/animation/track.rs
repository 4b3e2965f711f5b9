use super::*;

#[test]
fn scalar_tracks_interpolate_with_easing() {
    let t = TrackSpec::new("hero", Property::Opacity, 0.0, 1.0);
    assert_eq!(t.sample(0.5), TrackValue::Scalar(0.5));

    let eased = TrackSpec::new("hero", Property::Opacity, 0.0, 1.0).ease(Ease::InQuad);
    assert_eq!(eased.sample(0.5), TrackValue::Scalar(0.25));
}

#[test]
fn color_tracks_interpolate_per_channel() {
    let t = TrackSpec::new(
        "title",
        Property::Color,
        Rgba8::rgb(0, 0, 0),
        Rgba8::rgb(200, 100, 50),
    );
    assert_eq!(t.sample(0.5), TrackValue::Color(Rgba8::rgb(100, 50, 25)));
    assert_eq!(t.sample(1.0).as_color(), Some(Rgba8::rgb(200, 100, 50)));
}

#[test]
fn validate_rejects_mixed_kinds() {
    let t = TrackSpec::new("x", Property::Color, 0.0, Rgba8::rgb(1, 2, 3));
    assert!(t.validate().is_err());
    let t = TrackSpec::new("x", Property::Opacity, Rgba8::rgb(1, 2, 3), Rgba8::rgb(1, 2, 3));
    assert!(t.validate().is_err());
    let t = TrackSpec::new("x", Property::Scale, 1.0, f64::NAN);
    assert!(t.validate().is_err());
    let t = TrackSpec::new("", Property::Scale, 1.0, 2.0);
    assert!(t.validate().is_err());
    assert!(TrackSpec::new("x", Property::Scale, 1.0, 2.0).validate().is_ok());
}

#[test]
fn track_spec_deserializes_untagged_values() {
    let json = r#"{"target":"grid","property":"translate_y","from":40.0,"to":0.0,"ease":"out_cubic"}"#;
    let t: TrackSpec = serde_json::from_str(json).unwrap();
    assert_eq!(t.property, Property::TranslateY);
    assert_eq!(t.from, TrackValue::Scalar(40.0));
    assert_eq!(t.ease, Ease::OutCubic);

    let json = r#"{"target":"bg","property":"color","from":{"r":0,"g":0,"b":0,"a":255},"to":{"r":255,"g":255,"b":255,"a":255}}"#;
    let t: TrackSpec = serde_json::from_str(json).unwrap();
    assert_eq!(t.ease, Ease::Linear);
    assert!(t.validate().is_ok());
}
