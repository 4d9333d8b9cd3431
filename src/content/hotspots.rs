use crate::core::geo::LngLat;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A labeled point of interest along the trip, with an associated image.
///
/// The image field is a bare filename; resolving and loading the asset is
/// the embedding page's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: String,
    pub coordinates: LngLat,
    pub image: String,
    pub title: String,
    pub description: String,
}

impl Hotspot {
    fn new(id: &str, coordinates: LngLat, image: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            coordinates,
            image: image.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

static HOTSPOTS: Lazy<Vec<Hotspot>> = Lazy::new(|| {
    vec![
        Hotspot::new(
            "hotspot-1",
            LngLat::new(7.24608, 47.13713),
            "DO1000921.jpg",
            "Biel/Bienne Junction",
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
             tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
             quis nostrud exercitation ullamco laboris.",
        ),
        Hotspot::new(
            "hotspot-2",
            LngLat::new(8.55, 47.36667),
            "DO1000930.jpg",
            "Zurich Hauptbahnhof",
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Duis aute irure \
             dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla \
             pariatur. Excepteur sint occaecat cupidatat non proident.",
        ),
        Hotspot::new(
            "hotspot-3",
            LngLat::new(8.3101611, 47.0501694),
            "DO1000933.jpg",
            "Luzern Central",
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed ut perspiciatis \
             unde omnis iste natus error sit voluptatem accusantium doloremque laudantium, \
             totam rem aperiam, eaque ipsa quae ab illo inventore.",
        ),
        Hotspot::new(
            "hotspot-4",
            LngLat::new(9.01703, 46.19278),
            "DO1000937.jpg",
            "Bellinzona",
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nemo enim ipsam \
             voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia \
             consequuntur magni dolores eos qui ratione voluptatem sequi nesciunt.",
        ),
    ]
});

/// All trip hotspots, in trip order.
pub fn hotspots() -> &'static [Hotspot] {
    &HOTSPOTS
}
