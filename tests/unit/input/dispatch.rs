use super::*;

fn dispatcher() -> InputDispatcher {
    InputDispatcher::new(InputOpts::default()).unwrap()
}

fn key(key: Key) -> InputEvent {
    InputEvent::Key { key, shift: false }
}

#[test]
fn landing_keys_page_the_timeline() {
    let mut d = dispatcher();
    assert_eq!(
        d.dispatch(View::Landing, key(Key::Space)),
        Some(Command::Snap(SnapDirection::Forward))
    );
    assert_eq!(
        d.dispatch(View::Landing, InputEvent::Key { key: Key::Space, shift: true }),
        Some(Command::Snap(SnapDirection::Backward))
    );
    assert_eq!(
        d.dispatch(View::Landing, key(Key::Enter)),
        Some(Command::OpenReport)
    );
    assert_eq!(d.dispatch(View::Landing, key(Key::ArrowRight)), None);
    assert_eq!(d.dispatch(View::Landing, key(Key::Escape)), None);
}

#[test]
fn report_keys_drive_the_router() {
    let mut d = dispatcher();
    assert_eq!(d.dispatch(View::Report, key(Key::ArrowRight)), Some(Command::Next));
    assert_eq!(d.dispatch(View::Report, key(Key::PageDown)), Some(Command::Next));
    assert_eq!(d.dispatch(View::Report, key(Key::ArrowLeft)), Some(Command::Prev));
    assert_eq!(d.dispatch(View::Conclusion, key(Key::ArrowUp)), Some(Command::Prev));
    assert_eq!(d.dispatch(View::ThankYou, key(Key::Escape)), Some(Command::Close));
    assert_eq!(d.dispatch(View::Report, key(Key::End)), Some(Command::Conclusion));
    assert_eq!(d.dispatch(View::Report, key(Key::Enter)), None);
}

#[test]
fn wheel_has_cooldown_and_dead_zone() {
    let mut d = dispatcher();
    let wheel = |delta_y, now_ms| InputEvent::Wheel { delta_y, now_ms };
    assert_eq!(d.dispatch(View::Report, wheel(5.0, 0)), None);
    assert_eq!(d.dispatch(View::Report, wheel(120.0, 0)), Some(Command::Next));
    assert_eq!(d.dispatch(View::Report, wheel(120.0, 400)), None);
    assert_eq!(d.dispatch(View::Report, wheel(-120.0, 900)), Some(Command::Prev));
    d.reset();
    assert_eq!(
        d.dispatch(View::Landing, wheel(80.0, 901)),
        Some(Command::Snap(SnapDirection::Forward))
    );
}

#[test]
fn swipes_need_distance_and_respect_axis() {
    let mut d = dispatcher();
    d.dispatch(View::Report, InputEvent::TouchStart { x: 300.0, y: 400.0 });
    assert_eq!(
        d.dispatch(View::Report, InputEvent::TouchEnd { x: 200.0, y: 410.0 }),
        Some(Command::Next)
    );

    d.dispatch(View::Report, InputEvent::TouchStart { x: 300.0, y: 400.0 });
    assert_eq!(
        d.dispatch(View::Report, InputEvent::TouchEnd { x: 310.0, y: 420.0 }),
        None
    );

    d.dispatch(View::Landing, InputEvent::TouchStart { x: 300.0, y: 400.0 });
    assert_eq!(
        d.dispatch(View::Landing, InputEvent::TouchEnd { x: 300.0, y: 200.0 }),
        Some(Command::Snap(SnapDirection::Forward))
    );

    d.dispatch(View::Landing, InputEvent::TouchStart { x: 300.0, y: 400.0 });
    assert_eq!(
        d.dispatch(View::Landing, InputEvent::TouchEnd { x: 100.0, y: 400.0 }),
        None
    );

    // Touch end without a start is ignored.
    assert_eq!(
        d.dispatch(View::Report, InputEvent::TouchEnd { x: 0.0, y: 0.0 }),
        None
    );
}

#[test]
fn scroll_only_matters_on_landing() {
    let mut d = dispatcher();
    assert_eq!(
        d.dispatch(View::Landing, InputEvent::Scroll { offset: 120.0 }),
        Some(Command::ScrollTo(120.0))
    );
    assert_eq!(d.dispatch(View::Report, InputEvent::Scroll { offset: 120.0 }), None);
}

#[test]
fn dom_key_names_map() {
    assert_eq!(Key::from_dom(" "), Some(Key::Space));
    assert_eq!(Key::from_dom("Esc"), Some(Key::Escape));
    assert_eq!(Key::from_dom("q"), None);
}

#[test]
fn events_deserialize_from_tagged_json() {
    let e: InputEvent = serde_json::from_str(r#"{"kind":"key","key":"arrow_down"}"#).unwrap();
    assert_eq!(e, InputEvent::Key { key: Key::ArrowDown, shift: false });
    let e: InputEvent =
        serde_json::from_str(r#"{"kind":"wheel","delta_y":-40.0,"now_ms":12}"#).unwrap();
    assert_eq!(e, InputEvent::Wheel { delta_y: -40.0, now_ms: 12 });
}

#[test]
fn invalid_opts_are_rejected() {
    let opts = InputOpts {
        swipe_min_px: f64::NAN,
        ..InputOpts::default()
    };
    assert!(InputDispatcher::new(opts).is_err());
}
