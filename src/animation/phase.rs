use crate::{
    animation::track::TrackSpec,
    foundation::core::Progress,
    foundation::error::{ReportError, ReportResult},
    foundation::math::unlerp_clamped,
};

/// A named progress window `[start, end)` with the tracks it drives.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollPhase {
    /// Stable phase identifier.
    pub id: String,
    /// Inclusive window start in `[0, 1]`.
    pub start: f64,
    /// Exclusive window end in `[0, 1]`; an end of exactly `1.0` also admits progress `1.0`.
    pub end: f64,
    /// Property tracks interpolated across the window.
    pub tracks: Vec<TrackSpec>,
}

impl ScrollPhase {
    /// Create a phase with no tracks.
    pub fn new(id: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            tracks: Vec::new(),
        }
    }

    /// Append a track.
    pub fn track(mut self, track: TrackSpec) -> Self {
        self.tracks.push(track);
        self
    }

    /// Check window bounds and every track.
    pub fn validate(&self) -> ReportResult<()> {
        if self.id.is_empty() {
            return Err(ReportError::timeline("phase id must be non-empty"));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ReportError::timeline(format!(
                "phase '{}' bounds must be finite",
                self.id
            )));
        }
        if !(0.0..=1.0).contains(&self.start) || !(0.0..=1.0).contains(&self.end) {
            return Err(ReportError::timeline(format!(
                "phase '{}' bounds must lie in [0, 1]",
                self.id
            )));
        }
        if self.start >= self.end {
            return Err(ReportError::timeline(format!(
                "phase '{}' start must be < end",
                self.id
            )));
        }
        for track in &self.tracks {
            track.validate()?;
        }
        Ok(())
    }

    /// Whether `progress` falls inside this phase's window.
    pub fn contains(&self, progress: Progress) -> bool {
        let p = progress.get();
        (self.start <= p && p < self.end) || (p >= 1.0 && self.end >= 1.0)
    }

    /// Local progress `t` in `[0, 1]` for a global `progress`.
    pub fn local_t(&self, progress: Progress) -> f64 {
        unlerp_clamped(self.start, self.end, progress.get())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
