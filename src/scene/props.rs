use crate::{
    navigation::model::{TimelineItem, VirtualTimeline},
    navigation::router::NavIntent,
    navigation::state::{View, ViewState},
    prefs::Preferences,
    scene::binder::AppliedStyles,
};

/// What the active scene should show.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "scene", content = "item", rename_all = "snake_case")]
pub enum SceneData<'a> {
    /// Content is still loading; show a loading affordance.
    Loading,
    /// The scroll-driven landing.
    Landing,
    /// A report card.
    Item(&'a TimelineItem),
    /// The manifesto / conclusion.
    Conclusion,
    /// The closing thank-you.
    ThankYou,
}

/// Everything a scene renderer receives.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneProps<'a> {
    /// Router state being rendered.
    pub state: ViewState,
    /// Scene payload.
    pub data: SceneData<'a>,
    /// `"3 / 12"` on report cards.
    pub position: Option<String>,
    /// Active preferences (theme and language).
    pub prefs: &'a Preferences,
    /// Landing styles for this frame, when on the landing.
    pub styles: Option<&'a AppliedStyles>,
}

impl<'a> SceneProps<'a> {
    /// Resolve the props for `state`.
    pub fn resolve(
        state: ViewState,
        timeline: &'a VirtualTimeline,
        prefs: &'a Preferences,
        styles: Option<&'a AppliedStyles>,
    ) -> Self {
        let (data, position) = match state.view {
            View::Landing => (SceneData::Landing, None),
            View::Conclusion => (SceneData::Conclusion, None),
            View::ThankYou => (SceneData::ThankYou, None),
            View::Report => match timeline.get(state.index) {
                Some(item) => (
                    SceneData::Item(item),
                    Some(timeline.position_label(state.index)),
                ),
                None => (SceneData::Loading, None),
            },
        };
        let styles = styles.filter(|_| state.view == View::Landing);
        Self {
            state,
            data,
            position,
            prefs,
            styles,
        }
    }
}

/// Navigation callbacks handed to a scene. Scenes record intents; the session applies them
/// through the router after the scene returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneNav {
    intents: Vec<NavIntent>,
}

impl SceneNav {
    /// `onNext`.
    pub fn on_next(&mut self) {
        self.intents.push(NavIntent::Next);
    }

    /// `onPrev`.
    pub fn on_prev(&mut self) {
        self.intents.push(NavIntent::Prev);
    }

    /// `onBack`.
    pub fn on_back(&mut self) {
        self.intents.push(NavIntent::Back);
    }

    /// Recorded intents, in call order.
    pub fn intents(&self) -> &[NavIntent] {
        &self.intents
    }

    pub(crate) fn take(&mut self) -> Vec<NavIntent> {
        std::mem::take(&mut self.intents)
    }
}

/// A scene renderer. Rendering is out of this crate's scope; implementations live in hosts.
pub trait SceneRenderer {
    /// Draw `props`; call `nav` for user-triggered navigation.
    fn render(&mut self, props: &SceneProps<'_>, nav: &mut SceneNav);
}

#[cfg(test)]
#[path = "../../tests/unit/scene/props.rs"]
mod tests;
