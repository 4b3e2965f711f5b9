use crate::navigation::state::View;

/// Kinds of host event listeners a scene can own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerKind {
    /// Native scroll within the pinned region.
    Scroll,
    /// Pointer movement (parallax).
    Pointer,
    /// Keyboard.
    Keyboard,
    /// Mouse wheel.
    Wheel,
    /// Touch start/end.
    Touch,
}

impl ListenerKind {
    /// Listeners a scene for `view` installs when it mounts.
    pub fn for_view(view: View) -> &'static [ListenerKind] {
        match view {
            View::Landing => &[
                Self::Scroll,
                Self::Pointer,
                Self::Keyboard,
                Self::Wheel,
                Self::Touch,
            ],
            View::Report | View::Conclusion | View::ThankYou => {
                &[Self::Keyboard, Self::Wheel, Self::Touch]
            }
        }
    }
}

/// Listeners currently installed, keyed by owning scene.
///
/// At most one listener per `(owner, kind)`; the exiting scene is torn down before the entering
/// scene registers, so handlers never accumulate across navigations.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    entries: Vec<(View, ListenerKind)>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a listener. Returns `false` if the owner already has one of this kind.
    pub fn register(&mut self, owner: View, kind: ListenerKind) -> bool {
        if self.entries.contains(&(owner, kind)) {
            tracing::warn!(?owner, ?kind, "duplicate listener registration ignored");
            return false;
        }
        self.entries.push((owner, kind));
        true
    }

    /// Install every listener the scene for `owner` needs.
    pub fn mount(&mut self, owner: View) {
        for &kind in ListenerKind::for_view(owner) {
            self.register(owner, kind);
        }
    }

    /// Remove all listeners owned by `owner`; returns how many were removed.
    pub fn teardown(&mut self, owner: View) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(o, _)| *o != owner);
        before - self.entries.len()
    }

    /// Whether any scene currently listens for `kind`.
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.entries.iter().any(|(_, k)| *k == kind)
    }

    /// Number of installed listeners of `kind`.
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.entries.iter().filter(|(_, k)| *k == kind).count()
    }

    /// Total installed listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/listeners.rs"]
mod tests;
