//! Shared display constants and the canonical map-layer ids.
//! The ids join the visibility state and the legend by string equality,
//! so they live in a single place.

/// Color of the trip route line, reused by its legend entry.
pub const ROUTE_COLOR: &str = "#008566";

/// Color shared by the railway-line and station legend entries.
pub const RAIL_COLOR: &str = "#F50A0A";

/// Layer id of the animated trip route.
pub const LAYER_TRIP: &str = "routes-johnny";

/// Layer id of the railway network lines.
pub const LAYER_RAILWAYS: &str = "lines";

/// Layer id of the major station markers.
pub const LAYER_STATIONS: &str = "SBB";
