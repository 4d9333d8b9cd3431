/// Subscriber callback type; receives its own snapshot of the new value.
pub type Subscriber<T> = Box<dyn Fn(T) + Send + Sync>;

/// Handle identifying one subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An owned observable value container.
///
/// Holds the current value and a list of subscribers that are notified
/// synchronously, in registration order, whenever the value changes.
/// Every notification hands each subscriber a fresh clone, so no observer
/// can alias the canonical value or another observer's copy.
///
/// Mutation goes through `&mut self`; all reads and writes are immediate
/// and single-threaded, so no locking is involved.
pub struct Store<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T: Clone> Store<T> {
    /// Creates a store holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns a fresh clone of the current value.
    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Borrows the current value without cloning.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the value and notifies every subscriber.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutates the value in place, then notifies every subscriber.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.value);
        self.notify();
    }

    /// Registers a subscriber; it receives every update published from now on.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        log::trace!("store subscriber {} registered", id.0);
        id
    }

    /// Removes one subscriber. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        let removed = self.subscribers.len() != before;
        if removed {
            log::trace!("store subscriber {} removed", id.0);
        }
        removed
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&self) {
        for (_, callback) in &self.subscribers {
            callback(self.value.clone());
        }
    }
}
