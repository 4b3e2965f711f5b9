use crate::{
    foundation::core::{Pointer, Progress, ViewportSize},
    foundation::error::{ReportError, ReportResult},
};

/// Geometry of a pinned scroll region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinnedRegion {
    /// Total height of the region in pixels.
    pub region_height: f64,
    /// Height of the viewport the region is pinned in.
    pub viewport_height: f64,
}

impl PinnedRegion {
    /// Create a validated region.
    pub fn new(region_height: f64, viewport_height: f64) -> ReportResult<Self> {
        if !region_height.is_finite() || !viewport_height.is_finite() {
            return Err(ReportError::validation("pinned region heights must be finite"));
        }
        if region_height < 0.0 || viewport_height < 0.0 {
            return Err(ReportError::validation("pinned region heights must be >= 0"));
        }
        Ok(Self {
            region_height,
            viewport_height,
        })
    }

    /// A region `screens` viewports tall.
    pub fn screens(viewport_height: f64, screens: f64) -> ReportResult<Self> {
        Self::new(viewport_height * screens, viewport_height)
    }

    /// Scroll distance that maps onto progress `0..1`. May be zero.
    pub fn scrollable_height(self) -> f64 {
        (self.region_height - self.viewport_height).max(0.0)
    }
}

/// One consistent reading of the progress source.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ProgressSample {
    /// Scroll progress through the pinned region.
    pub progress: Progress,
    /// Normalized pointer position.
    pub pointer: Pointer,
}

/// Converts raw scroll offsets and pointer positions into normalized samples.
///
/// Changes are queued so a host can drain them as a stream; frame evaluation should instead
/// take a single [`ProgressSource::sample`] snapshot.
#[derive(Clone, Debug)]
pub struct ProgressSource {
    region: PinnedRegion,
    viewport: ViewportSize,
    offset: f64,
    pointer: Pointer,
    pending: Vec<ProgressSample>,
}

impl ProgressSource {
    /// Create a source at offset 0 with the pointer centered.
    pub fn new(region: PinnedRegion, viewport: ViewportSize) -> Self {
        Self {
            region,
            viewport,
            offset: 0.0,
            pointer: Pointer::CENTER,
            pending: Vec::new(),
        }
    }

    /// Current region geometry.
    pub fn region(&self) -> PinnedRegion {
        self.region
    }

    /// Current scroll offset within the region, in pixels.
    pub fn scroll_offset(&self) -> f64 {
        self.offset
    }

    /// Progress for the current offset. Degenerate regions report `0`.
    pub fn progress(&self) -> Progress {
        let scrollable = self.region.scrollable_height();
        if scrollable <= 0.0 {
            return Progress::START;
        }
        Progress::new(self.offset / scrollable)
    }

    /// Snapshot of progress and pointer.
    pub fn sample(&self) -> ProgressSample {
        ProgressSample {
            progress: self.progress(),
            pointer: self.pointer,
        }
    }

    /// Update from a scroll event. Offsets outside the region clamp to its edges.
    pub fn set_scroll_offset(&mut self, offset: f64) -> ProgressSample {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        self.offset = offset.clamp(0.0, self.region.scrollable_height());
        self.emit()
    }

    /// Scrub directly to `progress`, moving the equivalent scroll offset.
    pub fn set_progress(&mut self, progress: Progress) -> ProgressSample {
        self.offset = progress.get() * self.region.scrollable_height();
        self.emit()
    }

    /// Update from a pointer-move event given in viewport pixels.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ProgressSample {
        let ViewportSize { width, height } = self.viewport;
        self.pointer = if width <= 0.0 || height <= 0.0 {
            Pointer::CENTER
        } else {
            Pointer::new((x / width) * 2.0 - 1.0, (y / height) * 2.0 - 1.0)
        };
        self.emit()
    }

    /// Pointer left the viewport; recenter.
    pub fn pointer_leave(&mut self) -> ProgressSample {
        self.pointer = Pointer::CENTER;
        self.emit()
    }

    /// Apply new geometry, keeping the pixel offset (clamped to the new region).
    pub fn resize(&mut self, region: PinnedRegion, viewport: ViewportSize) -> ProgressSample {
        self.region = region;
        self.viewport = viewport;
        self.offset = self.offset.clamp(0.0, region.scrollable_height());
        self.emit()
    }

    /// Samples produced since the previous drain, oldest first. Consecutive duplicates are
    /// collapsed.
    pub fn drain_changes(&mut self) -> Vec<ProgressSample> {
        std::mem::take(&mut self.pending)
    }

    fn emit(&mut self) -> ProgressSample {
        let sample = self.sample();
        if self.pending.last() != Some(&sample) {
            self.pending.push(sample);
        }
        sample
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/source.rs"]
mod tests;
