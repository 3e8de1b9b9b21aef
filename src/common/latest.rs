use tokio::sync::Mutex;

/// Single-slot latest-value channel.
///
/// `put` evicts any unread item so a consumer never sees a stale one and a
/// slow consumer never stalls the producer; `try_take` never blocks. Dropped
/// items are deliberate backpressure: the pipeline prefers freshness over
/// completeness.
pub struct LatestSlot<T> {
    slot: Mutex<Option<T>>,
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Stores `item`, discarding any unread predecessor. Returns whether a
    /// predecessor was evicted.
    pub async fn put(&self, item: T) -> bool {
        let mut slot = self.slot.lock().await;
        let evicted = slot.is_some();
        *slot = Some(item);
        evicted
    }

    /// Takes the current item if one is present. Never waits for a producer.
    pub async fn try_take(&self) -> Option<T> {
        self.slot.lock().await.take()
    }

    pub async fn is_empty(&self) -> bool {
        self.slot.lock().await.is_none()
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
