//! # Topic Hub
//!
//! In-process publish/subscribe keyed by topic. Each topic gets its own
//! `tokio::sync::broadcast` channel, created the first time anyone subscribes.
//!
//! Delivery is best effort: a message published to a topic nobody listens to
//! is dropped, there is no ordering between topics, no replay for late
//! subscribers, and a receiver that falls more than `capacity` messages behind
//! observes `RecvError::Lagged`.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Default buffer capacity of each topic channel.
pub const DEFAULT_CAPACITY: usize = 64;

/// Fan-out hub of broadcast channels, one per topic.
///
/// Clones share the same topics.
///
/// ```rust
/// use actor_framework::EventHub;
///
/// #[tokio::main]
/// async fn main() {
///     let hub: EventHub<&'static str, u32> = EventHub::default();
///     let mut kitchen = hub.subscribe("kitchen");
///     assert_eq!(hub.publish(&"kitchen", 7), 1);
///     assert_eq!(kitchen.recv().await.unwrap(), 7);
/// }
/// ```
pub struct EventHub<K, M> {
    topics: Arc<Mutex<HashMap<K, broadcast::Sender<M>>>>,
    capacity: usize,
}

impl<K, M> Clone for EventHub<K, M> {
    fn clone(&self) -> Self {
        Self {
            topics: Arc::clone(&self.topics),
            capacity: self.capacity,
        }
    }
}

impl<K, M> EventHub<K, M>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    M: Clone,
{
    /// Create a hub whose topic channels buffer `capacity` messages.
    ///
    /// When a topic's buffer is full the oldest messages are dropped and slow
    /// receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        Self {
            topics: Arc::new(Mutex::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Subscribe to one topic.
    pub fn subscribe(&self, topic: K) -> broadcast::Receiver<M> {
        let mut topics = self.lock();
        let sender = topics.entry(topic.clone()).or_insert_with(|| {
            debug!(?topic, "Topic opened");
            let (sender, _) = broadcast::channel(self.capacity);
            sender
        });
        sender.subscribe()
    }

    /// Publish to one topic. Returns how many receivers got the message.
    ///
    /// Topics whose receivers have all gone away are closed here.
    pub fn publish(&self, topic: &K, message: M) -> usize {
        let mut topics = self.lock();
        let Some(sender) = topics.get(topic) else {
            trace!(?topic, "No subscribers");
            return 0;
        };
        match sender.send(message) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!(?topic, "Topic closed");
                topics.remove(topic);
                0
            }
        }
    }

    /// Current receiver count for a topic.
    pub fn subscriber_count(&self, topic: &K) -> usize {
        self.lock()
            .get(topic)
            .map_or(0, broadcast::Sender::receiver_count)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<K, broadcast::Sender<M>>> {
        // The map holds only senders; a panic while locked leaves it usable.
        self.topics
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<K, M> Default for EventHub<K, M>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    M: Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::{RecvError, TryRecvError};

    #[tokio::test]
    async fn subscribers_of_a_topic_all_receive() {
        let hub: EventHub<String, u32> = EventHub::default();
        let mut a = hub.subscribe("restaurant:1".to_string());
        let mut b = hub.subscribe("restaurant:1".to_string());

        assert_eq!(hub.publish(&"restaurant:1".to_string(), 42), 2);
        assert_eq!(a.recv().await.unwrap(), 42);
        assert_eq!(b.recv().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn topics_are_isolated() {
        let hub: EventHub<&'static str, u32> = EventHub::default();
        let mut first = hub.subscribe("order:1");
        let mut second = hub.subscribe("order:2");

        hub.publish(&"order:1", 1);

        assert_eq!(first.recv().await.unwrap(), 1);
        assert!(matches!(second.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn publish_without_subscribers_is_dropped() {
        let hub: EventHub<&'static str, u32> = EventHub::default();
        assert_eq!(hub.publish(&"nobody", 1), 0);
    }

    #[test]
    fn dropped_receivers_close_the_topic() {
        let hub: EventHub<&'static str, u32> = EventHub::default();
        let rx = hub.subscribe("order:9");
        assert_eq!(hub.subscriber_count(&"order:9"), 1);
        drop(rx);
        assert_eq!(hub.publish(&"order:9", 1), 0);
        assert_eq!(hub.subscriber_count(&"order:9"), 0);
    }

    #[tokio::test]
    async fn slow_receiver_lags() {
        let hub: EventHub<&'static str, u32> = EventHub::new(2);
        let mut rx = hub.subscribe("busy");
        for n in 0..5 {
            hub.publish(&"busy", n);
        }
        assert!(matches!(rx.recv().await, Err(RecvError::Lagged(_))));
        assert_eq!(rx.recv().await.unwrap(), 3);
    }
}
