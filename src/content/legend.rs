use crate::core::constants::{LAYER_RAILWAYS, LAYER_STATIONS, LAYER_TRIP, RAIL_COLOR, ROUTE_COLOR};
use crate::state::layers::LayerMap;
use crate::StoryMapError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Rendering hint for a legend swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendShape {
    Line,
    Circle,
}

impl std::fmt::Display for LegendShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegendShape::Line => write!(f, "line"),
            LegendShape::Circle => write!(f, "circle"),
        }
    }
}

/// One row of the map legend.
///
/// `id` names the layer-visibility key this row toggles; the match is a
/// convention, not enforced anywhere on the default paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub id: String,
    pub label: String,
    pub description: String,
    pub color: String,
    pub shape: LegendShape,
}

impl LegendEntry {
    fn new(id: &str, label: &str, description: &str, color: &str, shape: LegendShape) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            shape,
        }
    }
}

static LEGEND: Lazy<Vec<LegendEntry>> = Lazy::new(|| {
    vec![
        LegendEntry::new(
            LAYER_TRIP,
            "Johnny's Trip",
            "Johnny's sprint to all 26 cantons in one day.",
            ROUTE_COLOR,
            LegendShape::Line,
        ),
        LegendEntry::new(
            LAYER_RAILWAYS,
            "Railways",
            "Core SBB railway lines that span the country.",
            RAIL_COLOR,
            LegendShape::Line,
        ),
        LegendEntry::new(
            LAYER_STATIONS,
            "Major Stations",
            "Key SBB hubs across the network.",
            RAIL_COLOR,
            LegendShape::Circle,
        ),
    ]
});

/// Legend rows in display order.
pub fn legend() -> &'static [LegendEntry] {
    &LEGEND
}

/// Opt-in check that every legend row has a matching key in the given
/// visibility mapping. Nothing in this crate calls it; hosts that want the
/// convention enforced can run it against a fresh snapshot.
pub fn verify_legend_coverage(layers: &LayerMap) -> crate::Result<()> {
    for entry in legend() {
        if !layers.contains_key(&entry.id) {
            return Err(StoryMapError::UnknownLegendLayer(entry.id.clone()).into());
        }
    }
    Ok(())
}
