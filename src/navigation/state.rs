use crate::navigation::model::{
    SLUG_CONCLUSION, SLUG_MAIN, SLUG_THANKYOU, SlugTarget, VirtualTimeline,
};

/// Top-level view of the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Scroll-driven landing scene.
    Landing,
    /// A card of the virtual timeline.
    Report,
    /// Manifesto / conclusion scene.
    Conclusion,
    /// Closing thank-you scene.
    ThankYou,
}

/// Where the user is. `index` is only meaningful for [`View::Report`] and is `0` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ViewState {
    /// Active view.
    pub view: View,
    /// Timeline index for report views.
    pub index: usize,
}

impl ViewState {
    /// The landing view.
    pub const LANDING: Self = Self {
        view: View::Landing,
        index: 0,
    };
    /// The conclusion view.
    pub const CONCLUSION: Self = Self {
        view: View::Conclusion,
        index: 0,
    };
    /// The thank-you view.
    pub const THANK_YOU: Self = Self {
        view: View::ThankYou,
        index: 0,
    };

    /// Report card at `index`.
    pub const fn report(index: usize) -> Self {
        Self {
            view: View::Report,
            index,
        }
    }

    /// Timeline index when this is a report view.
    pub fn report_index(self) -> Option<usize> {
        (self.view == View::Report).then_some(self.index)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::LANDING
    }
}

/// Canonical slug (no `#`) for `state`.
///
/// A report index that is out of range for `timeline` has no slug of its own and maps to the
/// landing slug.
pub fn slug_of_state(state: ViewState, timeline: &VirtualTimeline) -> String {
    match state.view {
        View::Landing => SLUG_MAIN.to_owned(),
        View::Conclusion => SLUG_CONCLUSION.to_owned(),
        View::ThankYou => SLUG_THANKYOU.to_owned(),
        View::Report => timeline
            .slug_of(state.index)
            .unwrap_or_else(|| SLUG_MAIN.to_owned()),
    }
}

/// Canonical URL hash (`#...`) for `state`.
pub fn hash_of(state: ViewState, timeline: &VirtualTimeline) -> String {
    format!("#{}", slug_of_state(state, timeline))
}

/// Resolve a slug to a state, `None` when nothing matches.
pub fn resolve_slug(slug: &str, timeline: &VirtualTimeline) -> Option<ViewState> {
    match timeline.index_from_slug(slug) {
        SlugTarget::Landing => Some(ViewState::LANDING),
        SlugTarget::Report(i) => Some(ViewState::report(i)),
        SlugTarget::Conclusion => Some(ViewState::CONCLUSION),
        SlugTarget::ThankYou => Some(ViewState::THANK_YOU),
        SlugTarget::NotFound => None,
    }
}

/// Resolve a URL hash to a state; unknown hashes fall back to the landing view.
///
/// Initial load and history navigation both go through this function.
pub fn state_from_hash(hash: &str, timeline: &VirtualTimeline) -> ViewState {
    resolve_slug(hash, timeline).unwrap_or_else(|| {
        tracing::debug!(hash, "unknown hash, falling back to landing");
        ViewState::LANDING
    })
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/state.rs"]
mod tests;
