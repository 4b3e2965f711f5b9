use super::*;
use crate::content::model::LayerSummary;

fn timeline() -> VirtualTimeline {
    VirtualTimeline::build(
        &[LayerSummary {
            id: "I".to_owned(),
            title: "Ground".to_owned(),
            subtitle: String::new(),
            description: String::new(),
            accent: None,
        }],
        &[],
    )
}

#[test]
fn report_views_carry_their_item_and_position() {
    let tl = timeline();
    let prefs = Preferences::default();
    let props = SceneProps::resolve(ViewState::report(1), &tl, &prefs, None);
    assert!(matches!(props.data, SceneData::Item(TimelineItem::Summary(_))));
    assert_eq!(props.position.as_deref(), Some("2 / 2"));
}

#[test]
fn missing_items_render_as_loading() {
    let empty = VirtualTimeline::default();
    let prefs = Preferences::default();
    let props = SceneProps::resolve(ViewState::report(0), &empty, &prefs, None);
    assert_eq!(props.data, SceneData::Loading);
}

#[test]
fn styles_only_reach_the_landing() {
    let tl = timeline();
    let prefs = Preferences::default();
    let styles = AppliedStyles::default();
    let landing = SceneProps::resolve(ViewState::LANDING, &tl, &prefs, Some(&styles));
    assert!(landing.styles.is_some());
    let card = SceneProps::resolve(ViewState::report(0), &tl, &prefs, Some(&styles));
    assert!(card.styles.is_none());
}

#[test]
fn nav_records_intents_in_order() {
    let mut nav = SceneNav::default();
    nav.on_next();
    nav.on_back();
    nav.on_prev();
    assert_eq!(nav.intents(), [NavIntent::Next, NavIntent::Back, NavIntent::Prev]);
    assert_eq!(nav.take().len(), 3);
    assert!(nav.intents().is_empty());
}
