use std::collections::BTreeMap;

use crate::{
    animation::timeline::EvaluatedTracks,
    animation::track::{Property, TrackValue},
    foundation::core::{Pointer, Rgba8, Vec2},
    foundation::error::{ReportError, ReportResult},
    foundation::math::clamp01,
};

/// Presentation properties resolved for one scene element.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ElementStyle {
    /// Opacity in `[0, 1]`, if driven.
    pub opacity: Option<f64>,
    /// Pixel translation: timeline value plus parallax offset.
    pub translate: Vec2,
    /// Uniform scale, if driven.
    pub scale: Option<f64>,
    /// Rotation in degrees, if driven.
    pub rotate_deg: Option<f64>,
    /// Visible fraction of text, if driven.
    pub text_reveal: Option<f64>,
    /// Color, if driven.
    pub color: Option<Rgba8>,
    /// Blur radius in pixels, if driven.
    pub blur_px: Option<f64>,
}

impl ElementStyle {
    /// CSS `transform` value for this element.
    pub fn css_transform(&self) -> String {
        let mut out = format!(
            "translate({:.2}px, {:.2}px)",
            self.translate.x, self.translate.y
        );
        if let Some(s) = self.scale {
            out.push_str(&format!(" scale({s:.4})"));
        }
        if let Some(r) = self.rotate_deg {
            out.push_str(&format!(" rotate({r:.2}deg)"));
        }
        out
    }

    /// Number of characters of `text` to show under the current reveal fraction.
    pub fn revealed_chars(&self, text: &str) -> usize {
        let total = text.chars().count();
        match self.text_reveal {
            Some(f) => ((total as f64) * f).round() as usize,
            None => total,
        }
    }

    fn apply(&mut self, property: Property, value: TrackValue) {
        match (property, value) {
            (Property::Opacity, TrackValue::Scalar(v)) => self.opacity = Some(clamp01(v)),
            (Property::TranslateX, TrackValue::Scalar(v)) => self.translate.x = v,
            (Property::TranslateY, TrackValue::Scalar(v)) => self.translate.y = v,
            (Property::Scale, TrackValue::Scalar(v)) => self.scale = Some(v),
            (Property::Rotate, TrackValue::Scalar(v)) => self.rotate_deg = Some(v),
            (Property::TextReveal, TrackValue::Scalar(v)) => self.text_reveal = Some(clamp01(v)),
            (Property::Blur, TrackValue::Scalar(v)) => self.blur_px = Some(v.max(0.0)),
            (Property::Color, TrackValue::Color(c)) => self.color = Some(c),
            _ => {}
        }
    }
}

/// Styles for every bound element of a scene.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct AppliedStyles {
    /// `target -> style`.
    pub elements: BTreeMap<String, ElementStyle>,
}

impl AppliedStyles {
    /// Style of one element.
    pub fn get(&self, target: &str) -> Option<&ElementStyle> {
        self.elements.get(target)
    }
}

/// Applies evaluated tracks to scene elements and layers pointer parallax on top.
///
/// The smoothed parallax offset follows the pointer with an exponential filter
/// (`pos += (target - pos) * damping` once per animation tick) and is added to the timeline's
/// translate values, never substituted for them.
#[derive(Clone, Debug)]
pub struct SceneBinder {
    damping: f64,
    max_shift_px: f64,
    depths: BTreeMap<String, f64>,
    offset: Vec2,
}

impl SceneBinder {
    /// Create a binder; `damping` must be in `(0, 1)`.
    pub fn new(damping: f64, max_shift_px: f64) -> ReportResult<Self> {
        if !(damping > 0.0 && damping < 1.0) {
            return Err(ReportError::validation("parallax damping must be in (0, 1)"));
        }
        if !max_shift_px.is_finite() || max_shift_px < 0.0 {
            return Err(ReportError::validation(
                "parallax max shift must be finite and >= 0",
            ));
        }
        Ok(Self {
            damping,
            max_shift_px,
            depths: BTreeMap::new(),
            offset: Vec2::ZERO,
        })
    }

    /// Register a parallax depth for `target`.
    pub fn with_depth(mut self, target: impl Into<String>, depth: f64) -> Self {
        self.depths.insert(target.into(), depth);
        self
    }

    /// Register several depths.
    pub fn with_depths<'a>(mut self, depths: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        for (target, depth) in depths {
            self.depths.insert(target.to_owned(), depth);
        }
        self
    }

    /// Current smoothed offset in normalized pointer units.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Advance the smoothing filter one animation tick towards `pointer`.
    pub fn tick(&mut self, pointer: Pointer) -> Vec2 {
        self.offset += (pointer.to_vec2() - self.offset) * self.damping;
        self.offset
    }

    /// Drop any accumulated parallax (scene teardown).
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Resolve styles for every evaluated target and every target with a parallax depth.
    pub fn bind(&self, tracks: &EvaluatedTracks) -> AppliedStyles {
        let mut out = AppliedStyles::default();
        for (target, props) in &tracks.targets {
            let style = out.elements.entry(target.clone()).or_default();
            for (&property, &value) in props {
                style.apply(property, value);
            }
        }
        for (target, &depth) in &self.depths {
            let style = out.elements.entry(target.clone()).or_default();
            style.translate += self.offset * (depth * self.max_shift_px);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/binder.rs"]
mod tests;
