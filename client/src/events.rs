//! Typed publish/subscribe bus with synchronous delivery.
//!
//! Replaces the DOM custom-event pattern with an explicit subscription
//! interface decoupled from any UI framework. `publish` invokes every
//! subscriber registered at that moment before it returns; there is no
//! eventual-consistency window. The subscriber list is snapshotted before
//! delivery, so a callback may subscribe, unsubscribe or publish again
//! without deadlocking the bus.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Handle returned by [`EventBus::subscribe`], used to unregister.
pub type SubscriptionId = u64;

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

pub struct EventBus<E> {
    subscribers: Mutex<Vec<(SubscriptionId, Callback<E>)>>,
    next_id: AtomicU64,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register an observer. It stays active until [`unsubscribe`] is
    /// called with the returned id.
    ///
    /// [`unsubscribe`]: EventBus::unsubscribe
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push((id, Arc::new(callback)));
        }
        id
    }

    /// Remove a subscriber. Returns false when the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let Ok(mut subscribers) = self.subscribers.lock() else {
            return false;
        };
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    /// Deliver `event` to every current subscriber, synchronously, in
    /// registration order.
    pub fn publish(&self, event: &E) {
        let snapshot: Vec<Callback<E>> = match self.subscribers.lock() {
            Ok(subscribers) => subscribers.iter().map(|(_, cb)| cb.clone()).collect(),
            Err(_) => {
                log::warn!("event bus lock poisoned, dropping event");
                return;
            }
        };
        for callback in snapshot {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn delivers_synchronously_to_all_subscribers() {
        let bus = EventBus::<String>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["a", "b"] {
            let seen = seen.clone();
            bus.subscribe(move |event: &String| {
                seen.lock().unwrap().push(format!("{tag}:{event}"));
            });
        }

        bus.publish(&"hello".to_string());
        // Both observers ran before publish returned.
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["a:hello".to_string(), "b:hello".to_string()]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = EventBus::<u32>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = count.clone();
        let id = bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(&1);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&2);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscriber_may_use_bus_reentrantly() {
        let bus = Arc::new(EventBus::<u32>::new());
        let count = Arc::new(AtomicUsize::new(0));

        let inner_bus = bus.clone();
        let counter = count.clone();
        bus.subscribe(move |event: &u32| {
            counter.fetch_add(1, Ordering::SeqCst);
            if *event == 0 {
                // Re-entrant publish must not deadlock.
                inner_bus.publish(&1);
            }
        });

        bus.publish(&0);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
