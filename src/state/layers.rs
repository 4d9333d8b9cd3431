use crate::core::constants::{LAYER_RAILWAYS, LAYER_STATIONS, LAYER_TRIP};
use crate::prelude::HashMap;
use crate::state::store::{Store, SubscriptionId};

/// Full layer-visibility mapping, layer id to visible flag.
pub type LayerMap = HashMap<String, bool>;

/// Shared visibility state for the togglable map layers.
///
/// Construct once per page session and pass by reference to the legend UI
/// and the map renderer. Every session starts from the same fixed initial
/// state; nothing is persisted.
pub struct LayerVisibility {
    store: Store<LayerMap>,
}

impl LayerVisibility {
    /// Creates the session state with all layers visible.
    pub fn new() -> Self {
        let mut initial = LayerMap::default();
        initial.insert(LAYER_TRIP.to_string(), true);
        initial.insert(LAYER_RAILWAYS.to_string(), true);
        initial.insert(LAYER_STATIONS.to_string(), true);
        Self {
            store: Store::new(initial),
        }
    }

    /// Overwrites the flag for `layer_id`, inserting it if unknown.
    /// Subscribers are notified before this returns.
    pub fn set_visible(&mut self, layer_id: &str, visible: bool) {
        log::debug!("layer '{}' visibility -> {}", layer_id, visible);
        self.store
            .update(|layers| {
                layers.insert(layer_id.to_string(), visible);
            });
    }

    /// Current flag for `layer_id`; unknown ids read as hidden.
    pub fn is_visible(&self, layer_id: &str) -> bool {
        self.store.value().get(layer_id).copied().unwrap_or(false)
    }

    /// Fresh clone of the full current mapping.
    pub fn snapshot(&self) -> LayerMap {
        self.store.get()
    }

    /// Subscribes to every subsequent visibility change; each notification
    /// carries the full mapping.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(LayerMap) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    /// Stops notifications for one subscriber, leaving the rest untouched.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layers_all_visible() {
        let layers = LayerVisibility::new();
        assert_eq!(layers.snapshot().len(), 3);
        assert!(layers.is_visible(LAYER_TRIP));
        assert!(layers.is_visible(LAYER_RAILWAYS));
        assert!(layers.is_visible(LAYER_STATIONS));
    }

    #[test]
    fn test_unknown_layer_reads_hidden() {
        let layers = LayerVisibility::new();
        assert!(!layers.is_visible("no-such-layer"));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let layers = LayerVisibility::new();
        let mut copy = layers.snapshot();
        copy.insert("scratch".to_string(), false);
        assert_eq!(layers.snapshot().len(), 3);
    }
}
