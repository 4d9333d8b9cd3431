use anyhow::Result;
use storymap::prelude::*;

/// Walks the three content components the way the embedding page consumes
/// them: read the hotspots and chapters, then drive the shared layer state.
fn main() -> Result<()> {
    env_logger::init();

    println!("🗺️ Johnny's Trip content layer");
    println!("==============================");

    println!("\n📍 Hotspots:");
    for hotspot in hotspots() {
        println!(
            "   {} ({:.4}, {:.4}) — {}",
            hotspot.title, hotspot.coordinates.lng, hotspot.coordinates.lat, hotspot.image
        );
    }

    println!("\n🎬 Chapters:");
    for (key, chapter) in chapters().iter() {
        println!(
            "   {}: zoom {} / pitch {}, reveal up to segment {} over {}ms",
            key,
            chapter.zoom,
            chapter.pitch,
            chapter.max_route_increment,
            chapter.route_animation_duration_ms
        );
    }

    println!("\n🎛 Toggling layers:");
    let mut layers = LayerVisibility::new();
    let subscription = layers.subscribe(|state| {
        let mut ids: Vec<&String> = state.keys().collect();
        ids.sort();
        for id in ids {
            println!("   {} -> {}", id, state[id]);
        }
    });

    layers.set_visible(constants::LAYER_RAILWAYS, false);
    layers.unsubscribe(subscription);
    layers.set_visible(constants::LAYER_RAILWAYS, true); // silent now

    println!("\n🏷 Legend:");
    for entry in legend() {
        println!("   [{}] {} ({}) — {}", entry.shape, entry.label, entry.color, entry.description);
    }

    let config = serde_json::to_string_pretty(&bundle())?;
    println!("\n✅ frontend config: {} bytes of JSON", config.len());

    Ok(())
}
