pub mod chapters;
pub mod hotspots;
pub mod legend;

pub use chapters::{chapters, Chapter, ChapterRegistry};
pub use hotspots::{hotspots, Hotspot};
pub use legend::{legend, verify_legend_coverage, LegendEntry, LegendShape};

use serde::Serialize;

/// Serializable view over the full static content configuration, for
/// handing to the embedding page as one JSON value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StoryContent<'a> {
    pub hotspots: &'a [Hotspot],
    pub chapters: &'a ChapterRegistry,
    pub legend: &'a [LegendEntry],
}

/// Bundles the three static registries.
pub fn bundle() -> StoryContent<'static> {
    StoryContent {
        hotspots: hotspots(),
        chapters: chapters(),
        legend: legend(),
    }
}
