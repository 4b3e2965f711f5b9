//! The landing scene's scroll choreography for this release.
//!
//! Scene targets are fixed element ids the landing renderer exposes. Snap points sit on the
//! boundaries between the story beats so paging input lands on a settled frame.

use crate::{
    animation::ease::Ease,
    animation::phase::ScrollPhase,
    animation::timeline::PhaseTimeline,
    animation::track::{Property, TrackSpec, TrackValue},
    foundation::core::Rgba8,
    foundation::error::ReportResult,
    prefs::Theme,
};

/// Hero title element.
pub const TARGET_TITLE: &str = "title";
/// Hero subtitle element.
pub const TARGET_SUBTITLE: &str = "subtitle";
/// Decorative plate illustration.
pub const TARGET_PLATES: &str = "plates";
/// Fault-line stroke drawn across the plates.
pub const TARGET_FAULT_LINE: &str = "fault-line";
/// Introductory copy block.
pub const TARGET_INTRO: &str = "intro";
/// Full-bleed background.
pub const TARGET_BACKGROUND: &str = "background";
/// "Open the report" call to action.
pub const TARGET_CTA: &str = "cta";

/// Snap points aligned with the beat boundaries below.
pub const LANDING_SNAP_POINTS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Parallax depth per target; `0` pins a target, larger values drift further with the pointer.
pub const LANDING_DEPTHS: [(&str, f64); 4] = [
    (TARGET_PLATES, 1.0),
    (TARGET_FAULT_LINE, 0.6),
    (TARGET_TITLE, 0.25),
    (TARGET_BACKGROUND, 0.1),
];

fn palette(theme: Theme) -> (Rgba8, Rgba8) {
    match theme {
        Theme::Dark => (Rgba8::rgb(0x0b, 0x0d, 0x12), Rgba8::rgb(0x3a, 0x1c, 0x12)),
        Theme::Light => (Rgba8::rgb(0xf6, 0xf3, 0xee), Rgba8::rgb(0xf2, 0xd8, 0xc4)),
    }
}

fn hold(target: &str, property: Property, value: impl Into<TrackValue> + Copy) -> TrackSpec {
    TrackSpec::new(target, property, value, value)
}

/// Build the landing timeline for `theme`.
///
/// The four beats tile `[0, 1]` and every beat drives every `(target, property)` pair, so each
/// pair has a value at every progress and adjacent beats meet at the same value.
pub fn landing_timeline(theme: Theme) -> ReportResult<PhaseTimeline> {
    let (bg_start, bg_end) = palette(theme);
    PhaseTimeline::builder()
        .phase(
            ScrollPhase::new("hero", 0.0, 0.25)
                .track(hold(TARGET_TITLE, Property::Opacity, 1.0))
                .track(
                    TrackSpec::new(TARGET_TITLE, Property::TranslateY, 0.0, -40.0)
                        .ease(Ease::OutCubic),
                )
                .track(hold(TARGET_TITLE, Property::Blur, 0.0))
                .track(
                    TrackSpec::new(TARGET_SUBTITLE, Property::TextReveal, 0.0, 1.0)
                        .ease(Ease::InOutSine),
                )
                .track(hold(TARGET_SUBTITLE, Property::Opacity, 1.0))
                .track(hold(TARGET_PLATES, Property::TranslateX, 0.0))
                .track(hold(TARGET_PLATES, Property::Scale, 1.0))
                .track(hold(TARGET_FAULT_LINE, Property::Opacity, 0.0))
                .track(hold(TARGET_INTRO, Property::Opacity, 0.0))
                .track(hold(TARGET_INTRO, Property::TranslateY, 30.0))
                .track(hold(TARGET_INTRO, Property::TextReveal, 0.0))
                .track(hold(TARGET_BACKGROUND, Property::Color, bg_start))
                .track(hold(TARGET_CTA, Property::Opacity, 0.0))
                .track(hold(TARGET_CTA, Property::Scale, 0.9)),
        )
        .phase(
            ScrollPhase::new("plates-drift", 0.25, 0.5)
                .track(TrackSpec::new(TARGET_TITLE, Property::Opacity, 1.0, 0.0).ease(Ease::InQuad))
                .track(TrackSpec::new(TARGET_TITLE, Property::TranslateY, -40.0, -80.0))
                .track(TrackSpec::new(TARGET_TITLE, Property::Blur, 0.0, 8.0))
                .track(hold(TARGET_SUBTITLE, Property::TextReveal, 1.0))
                .track(TrackSpec::new(TARGET_SUBTITLE, Property::Opacity, 1.0, 0.0))
                .track(
                    TrackSpec::new(TARGET_PLATES, Property::TranslateX, 0.0, -120.0)
                        .ease(Ease::InOutCubic),
                )
                .track(TrackSpec::new(TARGET_PLATES, Property::Scale, 1.0, 1.15))
                .track(
                    TrackSpec::new(TARGET_FAULT_LINE, Property::Opacity, 0.0, 1.0)
                        .ease(Ease::OutQuad),
                )
                .track(hold(TARGET_INTRO, Property::Opacity, 0.0))
                .track(hold(TARGET_INTRO, Property::TranslateY, 30.0))
                .track(hold(TARGET_INTRO, Property::TextReveal, 0.0))
                .track(hold(TARGET_BACKGROUND, Property::Color, bg_start))
                .track(hold(TARGET_CTA, Property::Opacity, 0.0))
                .track(hold(TARGET_CTA, Property::Scale, 0.9)),
        )
        .phase(
            ScrollPhase::new("intro-copy", 0.5, 0.75)
                .track(hold(TARGET_TITLE, Property::Opacity, 0.0))
                .track(hold(TARGET_TITLE, Property::TranslateY, -80.0))
                .track(hold(TARGET_TITLE, Property::Blur, 8.0))
                .track(hold(TARGET_SUBTITLE, Property::TextReveal, 1.0))
                .track(hold(TARGET_SUBTITLE, Property::Opacity, 0.0))
                .track(hold(TARGET_PLATES, Property::TranslateX, -120.0))
                .track(hold(TARGET_PLATES, Property::Scale, 1.15))
                .track(hold(TARGET_FAULT_LINE, Property::Opacity, 1.0))
                .track(TrackSpec::new(TARGET_INTRO, Property::Opacity, 0.0, 1.0))
                .track(
                    TrackSpec::new(TARGET_INTRO, Property::TranslateY, 30.0, 0.0)
                        .ease(Ease::OutExpo),
                )
                .track(TrackSpec::new(TARGET_INTRO, Property::TextReveal, 0.0, 1.0))
                .track(TrackSpec::new(TARGET_BACKGROUND, Property::Color, bg_start, bg_end))
                .track(hold(TARGET_CTA, Property::Opacity, 0.0))
                .track(hold(TARGET_CTA, Property::Scale, 0.9)),
        )
        .phase(
            ScrollPhase::new("call-to-action", 0.75, 1.0)
                .track(hold(TARGET_TITLE, Property::Opacity, 0.0))
                .track(hold(TARGET_TITLE, Property::TranslateY, -80.0))
                .track(hold(TARGET_TITLE, Property::Blur, 8.0))
                .track(hold(TARGET_SUBTITLE, Property::TextReveal, 1.0))
                .track(hold(TARGET_SUBTITLE, Property::Opacity, 0.0))
                .track(hold(TARGET_PLATES, Property::TranslateX, -120.0))
                .track(hold(TARGET_PLATES, Property::Scale, 1.15))
                .track(hold(TARGET_FAULT_LINE, Property::Opacity, 1.0))
                .track(TrackSpec::new(TARGET_INTRO, Property::Opacity, 1.0, 0.6))
                .track(hold(TARGET_INTRO, Property::TranslateY, 0.0))
                .track(hold(TARGET_INTRO, Property::TextReveal, 1.0))
                .track(hold(TARGET_BACKGROUND, Property::Color, bg_end))
                .track(TrackSpec::new(TARGET_CTA, Property::Opacity, 0.0, 1.0))
                .track(TrackSpec::new(TARGET_CTA, Property::Scale, 0.9, 1.0).ease(Ease::OutBack)),
        )
        .snap_points(LANDING_SNAP_POINTS)
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/landing.rs"]
mod tests;
