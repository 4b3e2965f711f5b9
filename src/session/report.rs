use std::sync::Arc;

use crate::{
    animation::landing::{LANDING_DEPTHS, landing_timeline},
    animation::timeline::{EvaluatedTracks, PhaseTimeline, SnapDirection, SnapOutcome},
    content::model::LocaleContent,
    foundation::core::{Progress, ViewportSize},
    foundation::error::ReportResult,
    input::dispatch::{Command, InputDispatcher, InputEvent, InputOpts},
    navigation::history::{HistoryAdapter, Viewport},
    navigation::model::VirtualTimeline,
    navigation::router::{NavIntent, Router, Transition},
    navigation::state::{View, ViewState},
    prefs::{Language, PreferenceStore, Preferences, Theme},
    progress::source::{PinnedRegion, ProgressSample, ProgressSource},
    scene::binder::{AppliedStyles, SceneBinder},
    scene::props::{SceneNav, SceneProps, SceneRenderer},
    session::listeners::{ListenerKind, ListenerRegistry},
};

/// Session tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionOpts {
    /// Parallax smoothing factor per frame, in `(0, 1)`.
    pub damping: f64,
    /// Parallax travel at depth `1.0` and a pointer at the viewport edge.
    pub max_parallax_px: f64,
    /// Height of the landing's pinned region, in viewports.
    pub landing_screens: f64,
    /// Gesture thresholds.
    pub input: InputOpts,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            damping: 0.08,
            max_parallax_px: 24.0,
            landing_screens: 4.0,
            input: InputOpts::default(),
        }
    }
}

/// Handle for a requested animation frame.
///
/// Tickets issued before a view change are stale and evaluate to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTicket {
    generation: u64,
}

/// One evaluated frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    /// Router state the frame was evaluated for.
    pub state: ViewState,
    /// The single progress snapshot used for the whole evaluation.
    pub sample: ProgressSample,
    /// Timeline output (landing only; empty elsewhere).
    pub tracks: EvaluatedTracks,
    /// Styles after parallax (landing only; empty elsewhere).
    pub styles: AppliedStyles,
}

/// Wires progress, timeline, binder, input, and router into one event-loop-driven session.
pub struct ReportSession<H, V> {
    prefs: Preferences,
    opts: SessionOpts,
    viewport: ViewportSize,
    router: Router<H, V>,
    landing: PhaseTimeline,
    progress: ProgressSource,
    binder: SceneBinder,
    input: InputDispatcher,
    listeners: ListenerRegistry,
    generation: u64,
}

impl<H: HistoryAdapter, V: Viewport> ReportSession<H, V> {
    /// Build a session. The initial view comes from the history's current hash.
    #[tracing::instrument(skip_all, fields(theme = ?prefs.theme, language = %prefs.language))]
    pub fn new(
        content: &LocaleContent,
        prefs: Preferences,
        history: H,
        viewport_handle: V,
        viewport: ViewportSize,
        opts: SessionOpts,
    ) -> ReportResult<Self> {
        let timeline = Arc::new(VirtualTimeline::from_content(content));
        let router = Router::new(timeline, history, viewport_handle);
        let landing = landing_timeline(prefs.theme)?;
        let region = PinnedRegion::screens(viewport.height, opts.landing_screens)?;
        let binder = SceneBinder::new(opts.damping, opts.max_parallax_px)?
            .with_depths(LANDING_DEPTHS);
        let input = InputDispatcher::new(opts.input)?;

        let mut listeners = ListenerRegistry::new();
        listeners.mount(router.state().view);
        tracing::debug!(state = ?router.state(), items = router.timeline().len(), "session ready");

        Ok(Self {
            prefs,
            opts,
            viewport,
            router,
            landing,
            progress: ProgressSource::new(region, viewport),
            binder,
            input,
            listeners,
            generation: 0,
        })
    }

    /// Current router state.
    pub fn state(&self) -> ViewState {
        self.router.state()
    }

    /// The router (read-only; navigation goes through session methods).
    pub fn router(&self) -> &Router<H, V> {
        &self.router
    }

    /// Mutable history adapter, for hosts forwarding browser back/forward.
    pub fn history_mut(&mut self) -> &mut H {
        self.router.history_mut()
    }

    /// Active preferences.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Landing timeline in use.
    pub fn landing(&self) -> &PhaseTimeline {
        &self.landing
    }

    /// Current landing progress snapshot.
    pub fn sample(&self) -> ProgressSample {
        self.progress.sample()
    }

    /// Current viewport size.
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Installed listeners.
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Feed one input event.
    pub fn handle(&mut self, event: InputEvent) -> Option<Transition> {
        if !self.listeners.is_listening(listener_for(&event)) {
            return None;
        }
        let command = self.input.dispatch(self.router.state().view, event)?;
        self.execute(command)
    }

    /// Pointer moved (viewport pixels).
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.listeners.is_listening(ListenerKind::Pointer) {
            self.progress.pointer_move(x, y);
        }
    }

    /// Viewport resized.
    pub fn resize(&mut self, viewport: ViewportSize) -> ReportResult<()> {
        let region = PinnedRegion::screens(viewport.height, self.opts.landing_screens)?;
        self.viewport = viewport;
        self.progress.resize(region, viewport);
        Ok(())
    }

    /// Browser back/forward happened; re-derive state from the hash.
    pub fn sync_history(&mut self) -> Option<Transition> {
        let t = self.router.sync_from_history();
        self.after(t)
    }

    /// Navigate to a slug (deep link, table of contents).
    pub fn jump(&mut self, slug: &str) -> Option<Transition> {
        let t = self.router.jump(slug);
        self.after(t)
    }

    /// Apply a navigation intent directly.
    pub fn navigate(&mut self, intent: NavIntent) -> Option<Transition> {
        let t = self.router.apply(intent);
        self.after(t)
    }

    /// New locale content arrived.
    pub fn set_content(&mut self, content: &LocaleContent) -> Option<Transition> {
        let timeline = Arc::new(VirtualTimeline::from_content(content));
        let t = self.router.set_timeline(timeline);
        self.after(t)
    }

    /// Flip the theme, persist it, and rebuild the landing colors. On error neither the
    /// preferences nor the landing change.
    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) -> ReportResult<Theme> {
        let landing = landing_timeline(self.prefs.theme.toggled())?;
        let theme = self.prefs.toggle_theme(store)?;
        self.landing = landing;
        Ok(theme)
    }

    /// Switch language, persist it, and swap in that language's content.
    pub fn set_language(
        &mut self,
        language: Language,
        content: &LocaleContent,
        store: &mut impl PreferenceStore,
    ) -> ReportResult<Option<Transition>> {
        self.prefs.set_language(language, store)?;
        Ok(self.set_content(content))
    }

    /// Request an animation frame for the current scene.
    pub fn request_frame(&self) -> FrameTicket {
        FrameTicket {
            generation: self.generation,
        }
    }

    /// Evaluate a requested frame. Returns `None` for tickets issued before the last view
    /// change.
    pub fn tick(&mut self, ticket: FrameTicket) -> Option<Frame> {
        if ticket.generation != self.generation {
            tracing::trace!(
                ticket = ticket.generation,
                current = self.generation,
                "stale frame ignored"
            );
            return None;
        }
        let state = self.router.state();
        let sample = self.progress.sample();
        if state.view != View::Landing {
            return Some(Frame {
                state,
                sample,
                tracks: EvaluatedTracks::default(),
                styles: AppliedStyles::default(),
            });
        }
        let tracks = self.landing.evaluate(sample.progress);
        self.binder.tick(sample.pointer);
        let styles = self.binder.bind(&tracks);
        Some(Frame {
            state,
            sample,
            tracks,
            styles,
        })
    }

    /// Render the active scene and apply whatever navigation it requested.
    pub fn render_with(
        &mut self,
        renderer: &mut impl SceneRenderer,
        frame: Option<&Frame>,
    ) -> Vec<Transition> {
        let mut nav = SceneNav::default();
        {
            let styles = frame
                .filter(|f| f.state == self.router.state())
                .map(|f| &f.styles);
            let props = SceneProps::resolve(
                self.router.state(),
                self.router.timeline(),
                &self.prefs,
                styles,
            );
            renderer.render(&props, &mut nav);
        }
        nav.take()
            .into_iter()
            .filter_map(|intent| self.navigate(intent))
            .collect()
    }

    fn execute(&mut self, command: Command) -> Option<Transition> {
        match command {
            Command::ScrollTo(offset) => {
                let before = self.progress.progress();
                let after = self.progress.set_scroll_offset(offset).progress;
                if before < Progress::END && after == Progress::END {
                    tracing::debug!("landing scrolled to the end, opening report");
                    let t = self.router.open_report();
                    return self.after(t);
                }
                None
            }
            Command::Snap(direction) => {
                match self.landing.snap_to(self.progress.progress(), direction) {
                    SnapOutcome::Moved(p) => {
                        self.progress.set_progress(p);
                        None
                    }
                    SnapOutcome::Boundary(_) if direction == SnapDirection::Forward => {
                        let t = self.router.open_report();
                        self.after(t)
                    }
                    SnapOutcome::Boundary(_) => None,
                }
            }
            Command::OpenReport => {
                let t = self.router.open_report();
                self.after(t)
            }
            Command::Next => self.navigate(NavIntent::Next),
            Command::Prev => self.navigate(NavIntent::Prev),
            Command::Close => self.navigate(NavIntent::Back),
            Command::Conclusion => {
                let t = self.router.go_to_conclusion();
                self.after(t)
            }
        }
    }

    fn after(&mut self, transition: Option<Transition>) -> Option<Transition> {
        let t = transition?;
        if t.view_changed() {
            self.generation += 1;
            self.listeners.teardown(t.from.view);
            self.input.reset();
            self.binder.reset();
            self.progress.pointer_leave();
            self.listeners.mount(t.to.view);
        }
        // The router already reset the host viewport; mirror that in the pinned region.
        self.progress.set_scroll_offset(0.0);
        self.progress.drain_changes();
        Some(t)
    }
}

fn listener_for(event: &InputEvent) -> ListenerKind {
    match event {
        InputEvent::Key { .. } => ListenerKind::Keyboard,
        InputEvent::Wheel { .. } => ListenerKind::Wheel,
        InputEvent::TouchStart { .. } | InputEvent::TouchEnd { .. } => ListenerKind::Touch,
        InputEvent::Scroll { .. } => ListenerKind::Scroll,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/report.rs"]
mod tests;
