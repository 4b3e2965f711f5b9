use super::*;
use crate::animation::track::Property;

#[test]
fn window_is_half_open_except_at_the_end() {
    let p = ScrollPhase::new("a", 0.2, 0.5);
    assert!(!p.contains(Progress::new(0.1)));
    assert!(p.contains(Progress::new(0.2)));
    assert!(p.contains(Progress::new(0.49)));
    assert!(!p.contains(Progress::new(0.5)));

    let last = ScrollPhase::new("z", 0.8, 1.0);
    assert!(last.contains(Progress::END));
}

#[test]
fn local_t_maps_window_to_unit_range() {
    let p = ScrollPhase::new("a", 0.2, 0.6);
    assert_eq!(p.local_t(Progress::new(0.2)), 0.0);
    assert!((p.local_t(Progress::new(0.4)) - 0.5).abs() < 1e-12);
    assert_eq!(p.local_t(Progress::new(0.9)), 1.0);
}

#[test]
fn validate_rejects_bad_windows() {
    assert!(ScrollPhase::new("a", 0.5, 0.5).validate().is_err());
    assert!(ScrollPhase::new("a", -0.1, 0.5).validate().is_err());
    assert!(ScrollPhase::new("a", 0.1, 1.5).validate().is_err());
    assert!(ScrollPhase::new("", 0.1, 0.5).validate().is_err());
    let bad_track = ScrollPhase::new("a", 0.0, 0.5).track(TrackSpec::new(
        "x",
        Property::Opacity,
        0.0,
        f64::INFINITY,
    ));
    assert!(bad_track.validate().is_err());
    assert!(ScrollPhase::new("a", 0.0, 1.0).validate().is_ok());
}
