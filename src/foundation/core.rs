use crate::foundation::error::{ReportError, ReportResult};

pub use kurbo::{Point, Vec2};

/// Normalized scroll progress through a pinned region, always in `[0, 1]`.
///
/// Non-finite inputs collapse to `0` so downstream evaluation never sees NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Start of the pinned region.
    pub const START: Self = Self(0.0);
    /// End of the pinned region.
    pub const END: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Raw progress value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Normalized pointer position in `[-1, 1] x [-1, 1]`, viewport center at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pointer {
    /// Horizontal position, `-1` at the left edge.
    pub x: f64,
    /// Vertical position, `-1` at the top edge.
    pub y: f64,
}

impl Pointer {
    /// Pointer resting at the viewport center.
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Build a pointer, clamping both axes into `[-1, 1]`.
    pub fn new(x: f64, y: f64) -> Self {
        fn axis(v: f64) -> f64 {
            if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 }
        }
        Self {
            x: axis(x),
            y: axis(y),
        }
    }

    /// View as a kurbo vector for arithmetic.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ViewportSize {
    /// Create a validated viewport size. Zero is allowed (collapsed window), negatives are not.
    pub fn new(width: f64, height: f64) -> ReportResult<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ReportError::validation(
                "viewport dimensions must be finite and >= 0",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Straight-alpha RGBA8 color used by color tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> ReportResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(ReportError::validation(format!("invalid hex color '{s}'")));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ReportError::validation(format!("invalid hex color '{s}'")))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 255 },
        })
    }

    /// Format as lowercase `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
