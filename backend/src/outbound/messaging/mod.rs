//! In-process message bus adapter.
//!
//! Messages fan out over a Tokio broadcast channel to every live subscriber
//! of the queue. Nothing is persisted: messages sent while no subscriber is
//! attached are dropped.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::ports::{BusMessage, MessageBus, MessageBusError};

/// Default number of undelivered messages a slow subscriber may lag behind.
pub const DEFAULT_CAPACITY: usize = 64;

/// Broadcast-backed [`MessageBus`] for a single named queue.
///
/// # Examples
/// ```
/// use bookshelf::domain::ports::{BusMessage, MessageBus};
/// use bookshelf::outbound::messaging::InMemoryMessageBus;
/// use serde_json::json;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let bus = InMemoryMessageBus::new("Messages");
/// let mut inbox = bus.subscribe();
/// bus.send(BusMessage::new("books.viewed", json!({"id": 1})))
///     .await
///     .expect("send");
/// assert_eq!(inbox.recv().await.expect("message").topic, "books.viewed");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryMessageBus {
    queue: String,
    sender: broadcast::Sender<BusMessage>,
}

impl InMemoryMessageBus {
    /// Provision a bus for `queue` with the default capacity.
    pub fn new(queue: impl Into<String>) -> Self {
        Self::with_capacity(queue, DEFAULT_CAPACITY)
    }

    /// Provision a bus for `queue` holding up to `capacity` pending messages
    /// per subscriber.
    ///
    /// A zero capacity is raised to one.
    pub fn with_capacity(queue: impl Into<String>, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            queue: queue.into(),
            sender,
        }
    }

    /// Attach a new subscriber that receives messages sent from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<BusMessage> {
        self.sender.subscribe()
    }

    /// Number of attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[async_trait]
impl MessageBus for InMemoryMessageBus {
    fn queue_name(&self) -> &str {
        &self.queue
    }

    async fn send(&self, message: BusMessage) -> Result<usize, MessageBusError> {
        if message.topic.trim().is_empty() {
            return Err(MessageBusError::rejected("topic must not be blank"));
        }
        match self.sender.send(message) {
            Ok(delivered) => Ok(delivered),
            Err(broadcast::error::SendError(dropped)) => {
                debug!(
                    queue = %self.queue,
                    topic = %dropped.topic,
                    "no subscribers attached; message dropped"
                );
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn bus() -> InMemoryMessageBus {
        InMemoryMessageBus::new("Messages")
    }

    #[rstest]
    fn reports_queue_name(bus: InMemoryMessageBus) {
        assert_eq!(bus.queue_name(), "Messages");
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn send_without_subscribers_delivers_nowhere(bus: InMemoryMessageBus) {
        let delivered = bus
            .send(BusMessage::new("noop", json!(null)))
            .await
            .expect("send");
        assert_eq!(delivered, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn fans_out_to_every_subscriber(bus: InMemoryMessageBus) {
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();
        let message = BusMessage::new("ping", json!({"n": 1}));

        let delivered = bus.send(message.clone()).await.expect("send");

        assert_eq!(delivered, 2);
        assert_eq!(first.recv().await.expect("first"), message);
        assert_eq!(second.recv().await.expect("second"), message);
    }

    #[rstest]
    #[tokio::test]
    async fn blank_topics_are_rejected(bus: InMemoryMessageBus) {
        let err = bus
            .send(BusMessage::new("  ", json!({})))
            .await
            .expect_err("blank topic");
        assert_eq!(err, MessageBusError::rejected("topic must not be blank"));
    }
}
