use serde_json::json;
use storymap::prelude::*;

#[test]
fn test_hotspot_ids_unique() {
    let ids: HashSet<&str> = hotspots().iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids.len(), hotspots().len());
}

#[test]
fn test_hotspot_coordinates_finite_and_valid() {
    for hotspot in hotspots() {
        assert!(hotspot.coordinates.is_finite(), "{}", hotspot.id);
        assert!(hotspot.coordinates.is_valid(), "{}", hotspot.id);
    }
}

#[test]
fn test_hotspot_reads_are_stable() {
    let first: Vec<&str> = hotspots().iter().map(|h| h.id.as_str()).collect();
    let second: Vec<&str> = hotspots().iter().map(|h| h.id.as_str()).collect();
    assert_eq!(first, second);
    assert_eq!(first, ["hotspot-1", "hotspot-2", "hotspot-3", "hotspot-4"]);
}

#[test]
fn test_chapter_keys_in_narrative_order() {
    let keys: Vec<&str> = chapters().keys().collect();
    assert_eq!(
        keys,
        [
            "position-0",
            "position-1",
            "position-2",
            "position-3",
            "position-4"
        ]
    );
}

#[test]
fn test_only_opening_chapter_delays_route() {
    for (key, chapter) in chapters().iter() {
        if key == "position-0" {
            assert_eq!(chapter.initial_route_delay_ms, Some(600));
        } else {
            assert_eq!(chapter.initial_route_delay_ms, None, "{}", key);
        }
    }
}

#[test]
fn test_chapter_lookup() {
    let closing = chapters().get("position-4").unwrap();
    assert_eq!(closing.max_route_increment, 100);
    assert_eq!(closing.pitch, 0.0);
    assert_eq!(closing.zoom, 6.5);
    assert_eq!(closing.zoom_desktop, 7.0);
    assert!(chapters().get("position-5").is_none());
}

#[test]
fn test_legend_rows_and_shared_color() {
    let ids: Vec<&str> = legend().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["routes-johnny", "lines", "SBB"]);
    assert_eq!(legend()[0].color, constants::ROUTE_COLOR);
    assert_eq!(constants::ROUTE_COLOR, "#008566");
    assert_eq!(legend()[0].shape, LegendShape::Line);
    assert_eq!(legend()[1].shape, LegendShape::Line);
    assert_eq!(legend()[2].shape, LegendShape::Circle);
}

#[test]
fn test_legend_coverage_against_default_state() {
    let layers = LayerVisibility::new();
    assert!(verify_legend_coverage(&layers.snapshot()).is_ok());

    let mut missing = layers.snapshot();
    missing.remove("SBB");
    let err = verify_legend_coverage(&missing).unwrap_err();
    assert!(err.to_string().contains("SBB"));
}

#[test]
fn test_chapter_wire_format_matches_frontend() {
    let opening = chapters().get("position-0").unwrap();
    assert_eq!(
        serde_json::to_value(opening).unwrap(),
        json!({
            "center": [6.3, 46.35],
            "bearing": 45.0,
            "pitch": 60.0,
            "duration": 5000,
            "zoom": 10.0,
            "zoomDesktop": 10.0,
            "maxRouteIncrement": 6,
            "routeAnimationDuration": 9000,
            "initialRouteDelay": 600
        })
    );

    // Chapters without the opening delay omit the field entirely.
    let value = serde_json::to_value(chapters().get("position-1").unwrap()).unwrap();
    assert!(value.get("initialRouteDelay").is_none());
}

#[test]
fn test_hotspot_wire_format_matches_frontend() {
    assert_eq!(
        serde_json::to_value(&hotspots()[1]).unwrap()["coordinates"],
        json!([8.55, 47.36667])
    );
    assert_eq!(
        serde_json::to_value(&hotspots()[0]).unwrap()["image"],
        json!("DO1000921.jpg")
    );
}

#[test]
fn test_bundle_serializes_all_sections() {
    let value = serde_json::to_value(bundle()).unwrap();
    assert_eq!(value["hotspots"].as_array().unwrap().len(), 4);
    assert_eq!(value["legend"][0]["shape"], json!("line"));
    assert_eq!(value["chapters"]["position-3"]["zoomDesktop"], json!(11.5));

    let keys: Vec<&String> = value["chapters"].as_object().unwrap().keys().collect();
    assert_eq!(keys[0], "position-0");
    assert_eq!(keys[4], "position-4");
}

#[test]
fn test_chapter_round_trips_through_json() {
    let original = chapters().get("position-0").unwrap();
    let text = serde_json::to_string(original).unwrap();
    let parsed: Chapter = serde_json::from_str(&text).unwrap();
    assert_eq!(&parsed, original);
}
