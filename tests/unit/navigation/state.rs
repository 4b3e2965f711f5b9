use super::*;
use crate::content::model::{LayerSummary, ShiftRecord};

fn timeline() -> VirtualTimeline {
    let layers = ["I", "II"].map(|id| LayerSummary {
        id: id.to_owned(),
        title: id.to_owned(),
        subtitle: String::new(),
        description: String::new(),
        accent: None,
    });
    let shifts = [("01", "I"), ("02", "I"), ("03", "II")].map(|(id, layer)| ShiftRecord {
        id: id.to_owned(),
        layer_id: layer.to_owned(),
        title: id.to_owned(),
        summary: String::new(),
        quote: None,
        links: vec![],
    });
    VirtualTimeline::build(&layers, &shifts)
}

fn reachable(tl: &VirtualTimeline) -> Vec<ViewState> {
    let mut v = vec![
        ViewState::LANDING,
        ViewState::CONCLUSION,
        ViewState::THANK_YOU,
    ];
    v.extend((0..tl.len()).map(ViewState::report));
    v
}

#[test]
fn every_reachable_state_round_trips_through_its_hash() {
    let tl = timeline();
    for s in reachable(&tl) {
        assert_eq!(state_from_hash(&hash_of(s, &tl), &tl), s);
    }
}

#[test]
fn every_valid_hash_round_trips() {
    let tl = timeline();
    for h in [
        "#main",
        "#layer-I",
        "#shift-02",
        "#layer-II",
        "#shift-03",
        "#summary",
        "#conclusion",
        "#thankyou",
    ] {
        assert_eq!(hash_of(state_from_hash(h, &tl), &tl), h);
    }
}

#[test]
fn unknown_hash_falls_back_to_landing() {
    let tl = timeline();
    assert_eq!(state_from_hash("#shift-07", &tl), ViewState::LANDING);
    assert_eq!(resolve_slug("shift-07", &tl), None);
    assert_eq!(state_from_hash("#summary", &VirtualTimeline::default()), ViewState::LANDING);
}

#[test]
fn out_of_range_report_has_landing_slug() {
    let tl = timeline();
    assert_eq!(slug_of_state(ViewState::report(99), &tl), "main");
    assert_eq!(ViewState::report(3).report_index(), Some(3));
    assert_eq!(ViewState::CONCLUSION.report_index(), None);
}
