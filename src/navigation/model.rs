use crate::content::model::{LayerSummary, LocaleContent, ShiftRecord, compare_shift_ids};

/// Slug of the landing view.
pub const SLUG_MAIN: &str = "main";
/// Slug of the synthetic summary item.
pub const SLUG_SUMMARY: &str = "summary";
/// Slug of the conclusion (manifesto) view.
pub const SLUG_CONCLUSION: &str = "conclusion";
/// Slug of the thank-you view.
pub const SLUG_THANKYOU: &str = "thankyou";

const LAYER_PREFIX: &str = "layer-";
const SHIFT_PREFIX: &str = "shift-";

/// Header data plus every shift, shown on the summary card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SummaryData {
    /// Title block of the summary card.
    #[serde(flatten)]
    pub header: LayerSummary,
    /// All shifts in narrative order.
    pub shifts: Vec<ShiftRecord>,
}

/// One entry of the virtual timeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum TimelineItem {
    /// Layer intro card.
    Layer(LayerSummary),
    /// Shift card.
    Shift(ShiftRecord),
    /// Synthetic closing summary.
    Summary(SummaryData),
}

impl TimelineItem {
    /// Canonical hash slug for this item.
    pub fn slug(&self) -> String {
        match self {
            Self::Layer(l) => format!("{LAYER_PREFIX}{}", l.id),
            Self::Shift(s) => format!("{SHIFT_PREFIX}{}", s.id),
            Self::Summary(_) => SLUG_SUMMARY.to_owned(),
        }
    }

    /// Display title.
    pub fn title(&self) -> &str {
        match self {
            Self::Layer(l) => &l.title,
            Self::Shift(s) => &s.title,
            Self::Summary(s) => &s.header.title,
        }
    }

    fn matches_slug(&self, slug: &str) -> bool {
        match self {
            Self::Layer(l) => slug.strip_prefix(LAYER_PREFIX) == Some(l.id.as_str()),
            Self::Shift(s) => slug.strip_prefix(SHIFT_PREFIX) == Some(s.id.as_str()),
            Self::Summary(_) => slug == SLUG_SUMMARY,
        }
    }
}

/// Where a slug points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SlugTarget {
    /// The landing view.
    Landing,
    /// A timeline item.
    Report(usize),
    /// The conclusion view.
    Conclusion,
    /// The thank-you view.
    ThankYou,
    /// Nothing matched.
    NotFound,
}

/// Default header for the synthetic summary item.
pub fn default_summary_header() -> LayerSummary {
    LayerSummary {
        id: SLUG_SUMMARY.to_owned(),
        title: "Summary".to_owned(),
        subtitle: String::new(),
        description: String::new(),
        accent: None,
    }
}

/// Flat, ordered narrative sequence derived from locale content.
///
/// Positions are stable for a given input, which the hash <-> index mapping relies on.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct VirtualTimeline {
    items: Vec<TimelineItem>,
}

impl VirtualTimeline {
    /// Build with the default summary header.
    pub fn build(layers: &[LayerSummary], shifts: &[ShiftRecord]) -> Self {
        Self::build_with_summary(layers, shifts, default_summary_header())
    }

    /// Build from locale content with the default summary header.
    pub fn from_content(content: &LocaleContent) -> Self {
        Self::build(&content.layers, &content.shifts)
    }

    /// Emit each layer followed by its shifts (ascending numeric id), then one summary item.
    ///
    /// Shifts whose layer is unknown are dropped so every shift has a preceding layer item.
    /// No layers means content is still loading and the sequence is empty.
    pub fn build_with_summary(
        layers: &[LayerSummary],
        shifts: &[ShiftRecord],
        summary_header: LayerSummary,
    ) -> Self {
        if layers.is_empty() {
            return Self::default();
        }

        let mut items = Vec::with_capacity(layers.len() + shifts.len() + 1);
        let mut emitted_shifts = Vec::with_capacity(shifts.len());
        let mut seen_layers = std::collections::BTreeSet::new();
        for layer in layers {
            if !seen_layers.insert(layer.id.as_str()) {
                tracing::warn!(layer = %layer.id, "duplicate layer id, skipping");
                continue;
            }
            items.push(TimelineItem::Layer(layer.clone()));
            let mut own: Vec<&ShiftRecord> =
                shifts.iter().filter(|s| s.layer_id == layer.id).collect();
            own.sort_by(|a, b| compare_shift_ids(a, b));
            for shift in own {
                items.push(TimelineItem::Shift(shift.clone()));
                emitted_shifts.push(shift.clone());
            }
        }

        for orphan in shifts
            .iter()
            .filter(|s| !seen_layers.contains(s.layer_id.as_str()))
        {
            tracing::warn!(
                shift = %orphan.id,
                layer = %orphan.layer_id,
                "shift references unknown layer, dropped"
            );
        }

        items.push(TimelineItem::Summary(SummaryData {
            header: summary_header,
            shifts: emitted_shifts,
        }));
        Self { items }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether content is still loading.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&TimelineItem> {
        self.items.get(index)
    }

    /// All items in order.
    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    /// Iterate items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineItem> {
        self.items.iter()
    }

    /// Canonical slug of the item at `index`.
    pub fn slug_of(&self, index: usize) -> Option<String> {
        self.items.get(index).map(TimelineItem::slug)
    }

    /// Resolve a slug (with or without a leading `#`).
    pub fn index_from_slug(&self, slug: &str) -> SlugTarget {
        let slug = slug.trim();
        let slug = slug.strip_prefix('#').unwrap_or(slug);
        match slug {
            "" | SLUG_MAIN => SlugTarget::Landing,
            SLUG_CONCLUSION => SlugTarget::Conclusion,
            SLUG_THANKYOU => SlugTarget::ThankYou,
            _ => self
                .items
                .iter()
                .position(|item| item.matches_slug(slug))
                .map_or(SlugTarget::NotFound, SlugTarget::Report),
        }
    }

    /// Human-readable position, `"3 / 12"`.
    pub fn position_label(&self, index: usize) -> String {
        format!("{} / {}", index + 1, self.len())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/model.rs"]
mod tests;
