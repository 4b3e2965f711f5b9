use std::collections::BTreeMap;

use crate::{
    animation::phase::ScrollPhase,
    animation::track::{Property, TrackValue},
    foundation::core::Progress,
    foundation::error::{ReportError, ReportResult},
    foundation::math::PROGRESS_EPSILON,
};

/// First snap point must sit at or below this value.
const SNAP_LOW_MAX: f64 = 0.05;
/// Last snap point must sit at or above this value.
const SNAP_HIGH_MIN: f64 = 0.95;

/// Direction of a discrete paging request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapDirection {
    /// Towards progress `1`.
    Forward,
    /// Towards progress `0`.
    Backward,
}

/// Result of [`PhaseTimeline::snap_to`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum SnapOutcome {
    /// A snap point exists in the requested direction.
    Moved(Progress),
    /// No snap point in that direction; progress is unchanged and the caller should perform
    /// the next logical transition instead.
    Boundary(Progress),
}

impl SnapOutcome {
    /// Resulting progress value.
    pub fn progress(self) -> Progress {
        match self {
            Self::Moved(p) | Self::Boundary(p) => p,
        }
    }

    /// Whether the request ran past the last (or first) snap point.
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary(_))
    }
}

/// Property values for every target touched at one progress value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct EvaluatedTracks {
    /// `target -> property -> value`.
    pub targets: BTreeMap<String, BTreeMap<Property, TrackValue>>,
}

impl EvaluatedTracks {
    /// Value for `(target, property)`, if any active phase drives it.
    pub fn get(&self, target: &str, property: Property) -> Option<TrackValue> {
        self.targets.get(target)?.get(&property).copied()
    }

    /// Scalar value for `(target, property)`.
    pub fn scalar(&self, target: &str, property: Property) -> Option<f64> {
        self.get(target, property)?.as_scalar()
    }

    /// Whether no phase contributed anything.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    fn set(&mut self, target: &str, property: Property, value: TrackValue) {
        self.targets
            .entry(target.to_owned())
            .or_default()
            .insert(property, value);
    }
}

/// Ordered, immutable set of scroll phases plus the snap points used for discrete paging.
///
/// Evaluation is a pure function of progress: there is no cursor, so scrubbing backward over a
/// range replays exactly the values seen when scrubbing forward.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "PhaseTimelineDef")]
pub struct PhaseTimeline {
    phases: Vec<ScrollPhase>,
    snap_points: Vec<f64>,
}

impl PhaseTimeline {
    /// Create a validated timeline.
    pub fn new(phases: Vec<ScrollPhase>, snap_points: Vec<f64>) -> ReportResult<Self> {
        let timeline = Self {
            phases,
            snap_points,
        };
        timeline.validate()?;
        Ok(timeline)
    }

    /// Start building a timeline phase by phase.
    pub fn builder() -> PhaseTimelineBuilder {
        PhaseTimelineBuilder::default()
    }

    /// Check phase ordering and snap-point coverage.
    pub fn validate(&self) -> ReportResult<()> {
        if self.phases.is_empty() {
            return Err(ReportError::timeline("timeline must have at least one phase"));
        }
        for phase in &self.phases {
            phase.validate()?;
        }
        if !self.phases.windows(2).all(|w| w[0].start <= w[1].start) {
            return Err(ReportError::timeline(
                "phases must be ordered by start progress",
            ));
        }
        let mut ids = std::collections::BTreeSet::new();
        for phase in &self.phases {
            if !ids.insert(phase.id.as_str()) {
                return Err(ReportError::timeline(format!(
                    "duplicate phase id '{}'",
                    phase.id
                )));
            }
        }

        let Some((&first, &last)) = self.snap_points.first().zip(self.snap_points.last()) else {
            return Err(ReportError::timeline(
                "timeline must have at least one snap point",
            ));
        };
        if self
            .snap_points
            .iter()
            .any(|p| !p.is_finite() || !(0.0..=1.0).contains(p))
        {
            return Err(ReportError::timeline("snap points must lie in [0, 1]"));
        }
        if !self.snap_points.windows(2).all(|w| w[0] < w[1]) {
            return Err(ReportError::timeline(
                "snap points must be strictly ascending",
            ));
        }
        if first > SNAP_LOW_MAX || last < SNAP_HIGH_MIN {
            return Err(ReportError::timeline(format!(
                "snap points must span the progress range (first <= {SNAP_LOW_MAX}, last >= {SNAP_HIGH_MIN})"
            )));
        }
        Ok(())
    }

    /// Phases in declaration order.
    pub fn phases(&self) -> &[ScrollPhase] {
        &self.phases
    }

    /// Snap points in ascending order.
    pub fn snap_points(&self) -> &[f64] {
        &self.snap_points
    }

    /// Ids of the phases active at `progress`, in declaration order.
    pub fn active_phases(&self, progress: Progress) -> Vec<&str> {
        self.phases
            .iter()
            .filter(|p| p.contains(progress))
            .map(|p| p.id.as_str())
            .collect()
    }

    /// Evaluate every active phase at `progress`.
    ///
    /// Overlapping phases writing the same `(target, property)` resolve last-phase-wins in
    /// declaration order. Inactive phases contribute nothing, not even their boundary values.
    pub fn evaluate(&self, progress: Progress) -> EvaluatedTracks {
        let mut out = EvaluatedTracks::default();
        for phase in self.phases.iter().filter(|p| p.contains(progress)) {
            let t = phase.local_t(progress);
            for track in &phase.tracks {
                out.set(&track.target, track.property, track.sample(t));
            }
        }
        out
    }

    /// Next snap point in `direction` from `current`.
    pub fn snap_to(&self, current: Progress, direction: SnapDirection) -> SnapOutcome {
        let c = current.get();
        let found = match direction {
            SnapDirection::Forward => self
                .snap_points
                .iter()
                .copied()
                .find(|&p| p > c + PROGRESS_EPSILON),
            SnapDirection::Backward => self
                .snap_points
                .iter()
                .rev()
                .copied()
                .find(|&p| p < c - PROGRESS_EPSILON),
        };
        match found {
            Some(p) => {
                tracing::debug!(from = c, to = p, ?direction, "snap");
                SnapOutcome::Moved(Progress::new(p))
            }
            None => {
                tracing::debug!(at = c, ?direction, "snap boundary");
                SnapOutcome::Boundary(current)
            }
        }
    }

    /// Snap point closest to `current`; ties resolve towards the earlier point.
    pub fn nearest_snap(&self, current: Progress) -> Progress {
        let c = current.get();
        let Some((&first, rest)) = self.snap_points.split_first() else {
            return current;
        };
        let mut best = first;
        for &p in rest {
            if (p - c).abs() < (best - c).abs() {
                best = p;
            }
        }
        Progress::new(best)
    }
}

#[derive(serde::Deserialize)]
struct PhaseTimelineDef {
    phases: Vec<ScrollPhase>,
    snap_points: Vec<f64>,
}

impl TryFrom<PhaseTimelineDef> for PhaseTimeline {
    type Error = ReportError;

    fn try_from(def: PhaseTimelineDef) -> ReportResult<Self> {
        Self::new(def.phases, def.snap_points)
    }
}

/// Incremental builder for [`PhaseTimeline`].
#[derive(Default)]
pub struct PhaseTimelineBuilder {
    phases: Vec<ScrollPhase>,
    snap_points: Vec<f64>,
}

impl PhaseTimelineBuilder {
    /// Append a phase.
    pub fn phase(mut self, phase: ScrollPhase) -> Self {
        self.phases.push(phase);
        self
    }

    /// Replace the snap points.
    pub fn snap_points(mut self, points: impl IntoIterator<Item = f64>) -> Self {
        self.snap_points = points.into_iter().collect();
        self
    }

    /// Use every distinct phase start plus `1.0` as snap points.
    pub fn snap_at_phase_starts(mut self) -> Self {
        let mut points: Vec<f64> = self.phases.iter().map(|p| p.start).collect();
        points.push(1.0);
        points.sort_by(f64::total_cmp);
        points.dedup_by(|a, b| (*a - *b).abs() <= PROGRESS_EPSILON);
        self.snap_points = points;
        self
    }

    /// Build and validate the final [`PhaseTimeline`].
    pub fn build(self) -> ReportResult<PhaseTimeline> {
        PhaseTimeline::new(self.phases, self.snap_points)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
