//! Headless engine for a scroll-scrubbed, hash-routed narrative report.
//!
//! The report opens on a pinned landing section whose animation is scrubbed by scroll progress,
//! then becomes a paged sequence of cards (layers, shifts, a closing summary), a conclusion and
//! a thank-you screen. This crate owns everything except pixels:
//!
//! - Sample scroll/pointer input into a [`ProgressSource`]
//! - Evaluate a declarative [`PhaseTimeline`] into per-element properties
//! - Apply pointer parallax with a [`SceneBinder`]
//! - Flatten locale content into a [`VirtualTimeline`] and route it with a [`Router`]
//! - Turn keys, wheel and touch into navigation with an [`InputDispatcher`]
//! - Drive all of the above from a single [`ReportSession`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod content;
mod foundation;
mod input;
mod navigation;
mod prefs;
mod preview;
mod progress;
mod scene;
mod session;

pub use crate::foundation::core::{Point, Pointer, Progress, Rgba8, Vec2, ViewportSize};
pub use crate::foundation::error::{ReportError, ReportResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::landing::{
    LANDING_DEPTHS, LANDING_SNAP_POINTS, TARGET_BACKGROUND, TARGET_CTA, TARGET_FAULT_LINE,
    TARGET_INTRO, TARGET_PLATES, TARGET_SUBTITLE, TARGET_TITLE, landing_timeline,
};
pub use crate::animation::phase::ScrollPhase;
pub use crate::animation::timeline::{
    EvaluatedTracks, PhaseTimeline, PhaseTimelineBuilder, SnapDirection, SnapOutcome,
};
pub use crate::animation::track::{Lerp, Property, TrackSpec, TrackValue};

pub use crate::content::model::{
    LayerSummary, LocaleContent, ShiftLink, ShiftRecord, compare_shift_ids,
};
pub use crate::content::store::{
    ContentSource, ContentStore, DirContentSource, StaticContentSource,
};

pub use crate::input::dispatch::{Command, InputDispatcher, InputEvent, InputOpts, Key};

pub use crate::navigation::history::{CountingViewport, HistoryAdapter, MemoryHistory, Viewport};
pub use crate::navigation::model::{
    SLUG_CONCLUSION, SLUG_MAIN, SLUG_SUMMARY, SLUG_THANKYOU, SlugTarget, SummaryData,
    TimelineItem, VirtualTimeline, default_summary_header,
};
pub use crate::navigation::router::{NavIntent, Router, Transition};
pub use crate::navigation::state::{
    View, ViewState, hash_of, resolve_slug, slug_of_state, state_from_hash,
};

pub use crate::prefs::{
    JsonFileStore, LANGUAGE_KEY, Language, MemoryStore, PreferenceStore, Preferences, THEME_KEY,
    Theme,
};

#[cfg(feature = "http-preview")]
pub use crate::preview::HttpPreviewFetcher;
pub use crate::preview::{
    DEFAULT_PREVIEW_TIMEOUT, OpenGraphParser, PreviewCache, PreviewFetcher, PreviewMeta,
    PreviewState,
};

pub use crate::progress::source::{PinnedRegion, ProgressSample, ProgressSource};

pub use crate::scene::binder::{AppliedStyles, ElementStyle, SceneBinder};
pub use crate::scene::props::{SceneData, SceneNav, SceneProps, SceneRenderer};

pub use crate::session::listeners::{ListenerKind, ListenerRegistry};
pub use crate::session::report::{Frame, FrameTicket, ReportSession, SessionOpts};
