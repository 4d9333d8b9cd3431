use crate::core::geo::LngLat;
use crate::prelude::HashMap;
use once_cell::sync::Lazy;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Camera and route-animation parameters for one step of the scripted
/// map narrative.
///
/// Millisecond fields carry a `_ms` suffix in Rust but serialize under the
/// field names the map frontend already consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Camera target.
    pub center: LngLat,
    pub bearing: f64,
    pub pitch: f64,
    /// Camera transition time.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    pub zoom: f64,
    /// Zoom override for desktop-sized viewports.
    pub zoom_desktop: f64,
    /// Cap on how much route geometry this chapter progressively reveals.
    pub max_route_increment: u32,
    #[serde(rename = "routeAnimationDuration")]
    pub route_animation_duration_ms: u64,
    /// Wait before the route animation starts; only the opening chapter
    /// carries this.
    #[serde(
        rename = "initialRouteDelay",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_route_delay_ms: Option<u64>,
}

/// Read-only, order-preserving mapping from chapter key to [`Chapter`].
///
/// Keys follow the `position-N` convention and declaration order is the
/// narrative order the scroll driver advances through.
#[derive(Debug)]
pub struct ChapterRegistry {
    /// All chapters indexed by key
    chapters: HashMap<String, Chapter>,
    /// Keys in declaration order
    order: Vec<String>,
}

impl ChapterRegistry {
    fn new() -> Self {
        Self {
            chapters: HashMap::default(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, key: &str, chapter: Chapter) {
        if self.chapters.insert(key.to_string(), chapter).is_none() {
            self.order.push(key.to_string());
        }
    }

    /// Looks up a chapter by key. Absent keys are the caller's concern.
    pub fn get(&self, key: &str) -> Option<&Chapter> {
        self.chapters.get(key)
    }

    /// Iterates `(key, chapter)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Chapter)> {
        self.order
            .iter()
            .filter_map(move |key| self.chapters.get(key).map(|c| (key.as_str(), c)))
    }

    /// Chapter keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Serialize for ChapterRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, chapter) in self.iter() {
            map.serialize_entry(key, chapter)?;
        }
        map.end()
    }
}

static CHAPTERS: Lazy<ChapterRegistry> = Lazy::new(|| {
    let mut registry = ChapterRegistry::new();
    // Opening leg, Geneva toward Biel
    registry.insert(
        "position-0",
        Chapter {
            center: LngLat::new(6.3, 46.35),
            bearing: 45.0,
            pitch: 60.0,
            duration_ms: 5000,
            zoom: 10.0,
            zoom_desktop: 10.0,
            max_route_increment: 6,
            route_animation_duration_ms: 9000,
            initial_route_delay_ms: Some(600),
        },
    );
    // Biel toward Lucerne, pulled back
    registry.insert(
        "position-1",
        Chapter {
            center: LngLat::new(7.5, 47.0),
            bearing: 30.0,
            pitch: 50.0,
            duration_ms: 6000,
            zoom: 9.0,
            zoom_desktop: 9.0,
            max_route_increment: 13,
            route_animation_duration_ms: 5000,
            initial_route_delay_ms: None,
        },
    );
    // Around Lucerne
    registry.insert(
        "position-2",
        Chapter {
            center: LngLat::new(8.3, 47.05),
            bearing: 20.0,
            pitch: 55.0,
            duration_ms: 4000,
            zoom: 10.0,
            zoom_desktop: 10.0,
            max_route_increment: 17,
            route_animation_duration_ms: 3800,
            initial_route_delay_ms: None,
        },
    );
    // Mountain segment near Wassen
    registry.insert(
        "position-3",
        Chapter {
            center: LngLat::new(8.59964884814253, 46.70825534250202),
            bearing: 10.0,
            pitch: 60.0,
            duration_ms: 6000,
            zoom: 11.0,
            zoom_desktop: 11.5,
            max_route_increment: 20,
            route_animation_duration_ms: 4200,
            initial_route_delay_ms: None,
        },
    );
    // Closing overview with every route visible
    registry.insert(
        "position-4",
        Chapter {
            center: LngLat::new(8.2275, 46.8182),
            bearing: 0.0,
            pitch: 0.0,
            duration_ms: 5000,
            zoom: 6.5,
            zoom_desktop: 7.0,
            max_route_increment: 100,
            route_animation_duration_ms: 6000,
            initial_route_delay_ms: None,
        },
    );
    registry
});

/// The scripted trip chapters, `position-0` through `position-4`.
pub fn chapters() -> &'static ChapterRegistry {
    &CHAPTERS
}
