use crate::{
    animation::ease::Ease,
    foundation::core::Rgba8,
    foundation::error::{ReportError, ReportResult},
    foundation::math::{lerp_f64, lerp_u8},
};

/// Linear interpolation between two values of the same kind.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` at `t` (not clamped; eases may overshoot).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp_f64(*a, *b, t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Presentation property a track drives.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Horizontal offset in pixels.
    TranslateX,
    /// Vertical offset in pixels.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    /// Rotation in degrees.
    Rotate,
    /// Fraction of a text block's characters that are visible, `[0, 1]`.
    TextReveal,
    /// Fill/text color.
    Color,
    /// Gaussian blur radius in pixels.
    Blur,
}

impl Property {
    /// Whether values of this property are fractions that must stay in `[0, 1]` when applied.
    pub fn is_unit_interval(self) -> bool {
        matches!(self, Self::Opacity | Self::TextReveal)
    }

    fn expects_color(self) -> bool {
        matches!(self, Self::Color)
    }
}

/// A value produced by evaluating a track.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TrackValue {
    /// Numeric property value.
    Scalar(f64),
    /// Color property value.
    Color(Rgba8),
}

impl TrackValue {
    /// Numeric value, if this is a scalar.
    pub fn as_scalar(self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Color(_) => None,
        }
    }

    /// Color value, if this is a color.
    pub fn as_color(self) -> Option<Rgba8> {
        match self {
            Self::Color(c) => Some(c),
            Self::Scalar(_) => None,
        }
    }

    fn same_kind(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Scalar(_), Self::Scalar(_)) | (Self::Color(_), Self::Color(_))
        )
    }
}

impl From<f64> for TrackValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Rgba8> for TrackValue {
    fn from(c: Rgba8) -> Self {
        Self::Color(c)
    }
}

/// One interpolated property on one scene target within a phase.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackSpec {
    /// Scene element identifier.
    pub target: String,
    /// Property driven by this track.
    pub property: Property,
    /// Value at local `t = 0`.
    pub from: TrackValue,
    /// Value at local `t = 1`.
    pub to: TrackValue,
    /// Easing applied to local `t`.
    #[serde(default)]
    pub ease: Ease,
}

impl TrackSpec {
    /// Create a track with linear easing.
    pub fn new(
        target: impl Into<String>,
        property: Property,
        from: impl Into<TrackValue>,
        to: impl Into<TrackValue>,
    ) -> Self {
        Self {
            target: target.into(),
            property,
            from: from.into(),
            to: to.into(),
            ease: Ease::Linear,
        }
    }

    /// Replace the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Check value kinds and finiteness.
    pub fn validate(&self) -> ReportResult<()> {
        if self.target.is_empty() {
            return Err(ReportError::timeline("track target must be non-empty"));
        }
        if !self.from.same_kind(self.to) {
            return Err(ReportError::timeline(format!(
                "track '{}.{:?}' mixes scalar and color endpoints",
                self.target, self.property
            )));
        }
        let is_color = matches!(self.from, TrackValue::Color(_));
        if is_color != self.property.expects_color() {
            return Err(ReportError::timeline(format!(
                "track '{}.{:?}' has values of the wrong kind for its property",
                self.target, self.property
            )));
        }
        if let (TrackValue::Scalar(a), TrackValue::Scalar(b)) = (self.from, self.to) {
            if !a.is_finite() || !b.is_finite() {
                return Err(ReportError::timeline(format!(
                    "track '{}.{:?}' endpoints must be finite",
                    self.target, self.property
                )));
            }
        }
        Ok(())
    }

    /// Sample the track at local phase progress `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> TrackValue {
        let te = self.ease.apply(t);
        match (self.from, self.to) {
            (TrackValue::Scalar(a), TrackValue::Scalar(b)) => {
                TrackValue::Scalar(<f64 as Lerp>::lerp(&a, &b, te))
            }
            (TrackValue::Color(a), TrackValue::Color(b)) => {
                TrackValue::Color(<Rgba8 as Lerp>::lerp(&a, &b, te))
            }
            // Rejected by `validate`; hold the start value rather than guess.
            (from, _) => from,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
