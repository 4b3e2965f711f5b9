use std::sync::Arc;

use crate::navigation::{
    history::{HistoryAdapter, Viewport},
    model::{SlugTarget, TimelineItem, VirtualTimeline},
    state::{View, ViewState, resolve_slug, slug_of_state, state_from_hash},
};

/// A state change performed by the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Transition {
    /// State before the change.
    pub from: ViewState,
    /// State after the change.
    pub to: ViewState,
}

impl Transition {
    /// Whether the top-level view changed (as opposed to moving between report cards).
    pub fn view_changed(&self) -> bool {
        self.from.view != self.to.view
    }
}

/// Navigation requests a scene may issue through its injected callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIntent {
    /// Advance one step.
    Next,
    /// Go back one step.
    Prev,
    /// Return to the landing view.
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HashWrite {
    Push,
    Replace,
}

/// Single source of truth for the current [`ViewState`].
///
/// Every transition updates state synchronously, writes the hash only when it differs from the
/// canonical slug, and scrolls the viewport to the top when the state changes.
pub struct Router<H, V> {
    timeline: Arc<VirtualTimeline>,
    state: ViewState,
    history: H,
    viewport: V,
    pending_slug: Option<String>,
}

impl<H: HistoryAdapter, V: Viewport> Router<H, V> {
    /// Derive the initial state from the current hash.
    ///
    /// While content is loading (empty timeline) a hash naming a card is remembered and
    /// resolved once [`Router::set_timeline`] supplies items.
    pub fn new(timeline: Arc<VirtualTimeline>, history: H, viewport: V) -> Self {
        let mut router = Self {
            timeline,
            state: ViewState::LANDING,
            history,
            viewport,
            pending_slug: None,
        };
        let slug = router.history.slug();
        router.resolve_external(&slug);
        router
    }

    /// Current state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Current timeline.
    pub fn timeline(&self) -> &Arc<VirtualTimeline> {
        &self.timeline
    }

    /// Item shown by the current report view.
    pub fn current_item(&self) -> Option<&TimelineItem> {
        self.state.report_index().and_then(|i| self.timeline.get(i))
    }

    /// History adapter.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable history adapter (hosts forward browser events through it).
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Viewport.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Hash that could not be resolved yet because content is loading.
    pub fn pending_slug(&self) -> Option<&str> {
        self.pending_slug.as_deref()
    }

    /// `Landing -> Report(0)`. No-op elsewhere or while content is loading.
    pub fn open_report(&mut self) -> Option<Transition> {
        if self.state.view != View::Landing || self.timeline.is_empty() {
            return None;
        }
        self.go(ViewState::report(0))
    }

    /// Advance one step along `Landing -> Report(0..N) -> Conclusion -> ThankYou`.
    pub fn next(&mut self) -> Option<Transition> {
        let n = self.timeline.len();
        let target = match self.state.view {
            View::Landing if n == 0 => return None,
            View::Landing => ViewState::report(0),
            View::Report if self.state.index + 1 < n => ViewState::report(self.state.index + 1),
            View::Report => ViewState::CONCLUSION,
            View::Conclusion => ViewState::THANK_YOU,
            View::ThankYou => return None,
        };
        self.go(target)
    }

    /// Step back along the same path. `Landing` is terminal.
    pub fn prev(&mut self) -> Option<Transition> {
        let n = self.timeline.len();
        let target = match self.state.view {
            View::Landing => return None,
            View::Report if self.state.index == 0 => ViewState::LANDING,
            View::Report => ViewState::report(self.state.index - 1),
            View::Conclusion if n == 0 => ViewState::LANDING,
            View::Conclusion => ViewState::report(n - 1),
            View::ThankYou => ViewState::CONCLUSION,
        };
        self.go(target)
    }

    /// Jump to the state named by `slug`. Unknown slugs leave the state unchanged.
    pub fn jump(&mut self, slug: &str) -> Option<Transition> {
        match resolve_slug(slug, &self.timeline) {
            Some(target) => self.go(target),
            None => {
                tracing::debug!(slug, "jump to unknown slug ignored");
                None
            }
        }
    }

    /// Return to the landing view from anywhere.
    pub fn close(&mut self) -> Option<Transition> {
        self.go(ViewState::LANDING)
    }

    /// Skip straight to the conclusion.
    pub fn go_to_conclusion(&mut self) -> Option<Transition> {
        self.go(ViewState::CONCLUSION)
    }

    /// Apply a scene's navigation intent.
    pub fn apply(&mut self, intent: NavIntent) -> Option<Transition> {
        match intent {
            NavIntent::Next => self.next(),
            NavIntent::Prev => self.prev(),
            NavIntent::Back => self.close(),
        }
    }

    /// Re-derive state after browser back/forward, using the same resolution as initial load.
    pub fn sync_from_history(&mut self) -> Option<Transition> {
        let slug = self.history.take_slug_change()?;
        self.resolve_external(&slug)
    }

    /// Swap in a new timeline (content arrived, or the language changed).
    ///
    /// A hash remembered during loading is resolved now; otherwise a report index past the new
    /// end is clamped to the last card, or reset to landing when the timeline is empty.
    pub fn set_timeline(&mut self, timeline: Arc<VirtualTimeline>) -> Option<Transition> {
        self.timeline = timeline;
        if !self.timeline.is_empty()
            && let Some(slug) = self.pending_slug.take()
        {
            return self.resolve_external(&slug);
        }

        let target = match self.state.report_index() {
            Some(_) if self.timeline.is_empty() => ViewState::LANDING,
            Some(i) if i >= self.timeline.len() => ViewState::report(self.timeline.len() - 1),
            _ => self.state,
        };
        if target == self.state {
            // Same position, but the slug at that position may differ under new content.
            self.write_hash(HashWrite::Replace);
            return None;
        }
        tracing::debug!(from = ?self.state, to = ?target, "state revalidated against new timeline");
        self.transition(target, HashWrite::Replace)
    }

    fn resolve_external(&mut self, slug: &str) -> Option<Transition> {
        let target = if self.timeline.is_empty()
            && self.timeline.index_from_slug(slug) == SlugTarget::NotFound
        {
            self.pending_slug = Some(slug.to_owned());
            ViewState::LANDING
        } else {
            self.pending_slug = None;
            state_from_hash(slug, &self.timeline)
        };
        if target == self.state {
            if self.pending_slug.is_none() {
                self.write_hash(HashWrite::Replace);
            }
            return None;
        }
        let transition = self.transition_inner(target);
        if self.pending_slug.is_none() {
            self.write_hash(HashWrite::Replace);
        }
        Some(transition)
    }

    fn go(&mut self, target: ViewState) -> Option<Transition> {
        self.pending_slug = None;
        if target == self.state {
            return None;
        }
        self.transition(target, HashWrite::Push)
    }

    fn transition(&mut self, target: ViewState, write: HashWrite) -> Option<Transition> {
        let t = self.transition_inner(target);
        self.write_hash(write);
        Some(t)
    }

    fn transition_inner(&mut self, target: ViewState) -> Transition {
        let from = std::mem::replace(&mut self.state, target);
        self.viewport.scroll_to_top();
        tracing::debug!(?from, to = ?target, "transition");
        Transition { from, to: target }
    }

    fn write_hash(&mut self, write: HashWrite) {
        let slug = slug_of_state(self.state, &self.timeline);
        if self.history.slug() == slug {
            return;
        }
        match write {
            HashWrite::Push => self.history.set_slug(&slug),
            HashWrite::Replace => self.history.replace_slug(&slug),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/router.rs"]
mod tests;
