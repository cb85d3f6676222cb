//! Driven port for the in-process message bus.
//!
//! The bus is provisioned at startup under a named queue. No endpoint
//! publishes or consumes messages yet; the port exists so handlers can be
//! wired without touching the transport.

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

/// Queue name the bus is provisioned with.
pub const MESSAGES_QUEUE: &str = "Messages";

define_port_error! {
    /// Errors surfaced by message bus adapters.
    pub enum MessageBusError {
        /// The message was refused before dispatch.
        Rejected { message: String } => "message was rejected: {message}",
    }
}

/// Message envelope carried by the bus.
#[derive(Debug, Clone, PartialEq)]
pub struct BusMessage {
    /// Routing topic; must not be blank.
    pub topic: String,
    /// Arbitrary JSON payload.
    pub payload: Value,
}

impl BusMessage {
    /// Build a message for `topic`.
    pub fn new(topic: impl Into<String>, payload: Value) -> Self {
        Self {
            topic: topic.into(),
            payload,
        }
    }
}

/// Port for publishing onto the bus.
#[async_trait]
pub trait MessageBus: Send + Sync {
    /// Queue this bus delivers to.
    fn queue_name(&self) -> &str;

    /// Publish a message, returning how many subscribers received it.
    ///
    /// Publishing with no subscribers succeeds and delivers to nobody.
    async fn send(&self, message: BusMessage) -> Result<usize, MessageBusError>;
}
