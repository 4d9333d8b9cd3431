//! Prelude module for common storymap types
//!
//! Re-exports the most commonly used types and accessors for easy
//! importing with `use storymap::prelude::*;`

pub use crate::core::{constants, geo::LngLat};

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

pub use crate::{Error as StoryMapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
