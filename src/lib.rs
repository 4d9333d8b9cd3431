//! # Storymap
//!
//! Content configuration and shared UI state for a map-based storytelling
//! page: the hotspots shown along the trip, the camera chapters the scroll
//! driver steps through, and the legend plus layer-visibility state the
//! map and legend UI share.
//!
//! The crate owns data and one small observable store; rendering, scroll
//! handling and route animation are external consumers of it.

pub mod content;
pub mod core;
pub mod prelude;
pub mod state;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::geo::LngLat;

pub use crate::content::{
    bundle,
    chapters::{chapters, Chapter, ChapterRegistry},
    hotspots::{hotspots, Hotspot},
    legend::{legend, verify_legend_coverage, LegendEntry, LegendShape},
    StoryContent,
};

pub use crate::state::{
    layers::{LayerMap, LayerVisibility},
    store::{Store, SubscriptionId},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum StoryMapError {
    #[error("legend entry references unknown layer id: {0}")]
    UnknownLegendLayer(String),
}

/// Error type alias for convenience
pub type Error = StoryMapError;
