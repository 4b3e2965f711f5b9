use std::cmp::Ordering;

/// A thematic layer grouping several shifts.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSummary {
    /// Layer identifier (`"I"`, `"II"`, ...).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short line under the title.
    #[serde(default)]
    pub subtitle: String,
    /// Intro paragraph shown on the layer card.
    #[serde(default)]
    pub description: String,
    /// Optional accent color as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// Outbound reference attached to a shift.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShiftLink {
    /// Link text.
    pub label: String,
    /// Absolute URL.
    pub url: String,
}

/// One tectonic shift card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// Zero-padded numeric id (`"01"`, `"07"`).
    pub id: String,
    /// Owning layer id.
    pub layer_id: String,
    /// Card title.
    pub title: String,
    /// Card body.
    #[serde(default)]
    pub summary: String,
    /// Optional pull quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    /// Reference links, previewed on hover.
    #[serde(default)]
    pub links: Vec<ShiftLink>,
}

impl ShiftRecord {
    /// Numeric value of the id, if it parses.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.trim().parse().ok()
    }
}

/// Narrative order of shift ids: numeric ids ascending, then non-numeric ids lexicographically.
pub fn compare_shift_ids(a: &ShiftRecord, b: &ShiftRecord) -> Ordering {
    match (a.numeric_id(), b.numeric_id()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

/// Everything the report needs for one language.
///
/// Empty arrays mean the content is still loading.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LocaleContent {
    /// Layers in canonical order.
    #[serde(default)]
    pub layers: Vec<LayerSummary>,
    /// Shifts in any order.
    #[serde(default)]
    pub shifts: Vec<ShiftRecord>,
}

impl LocaleContent {
    /// Whether this is the loading placeholder.
    pub fn is_loading(&self) -> bool {
        self.layers.is_empty() && self.shifts.is_empty()
    }

    /// Parse locale content from JSON.
    pub fn from_json_str(s: &str) -> crate::ReportResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
