//! Broker channel contract and in-process implementation.

use crate::context::{ContextError, RequestContext};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Broker persistence hint for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Transient = 1,
    Persistent = 2,
}

/// Message properties and body handed to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publishing {
    pub delivery_mode: DeliveryMode,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Failure to hand a message to the broker.
#[derive(Debug)]
pub enum PublishError {
    /// Channel no longer accepts messages.
    ChannelClosed,
    /// Request context was cancelled or expired before publishing.
    Context(ContextError),
    /// Broker client reported a failure.
    Broker(String),
}

impl Display for PublishError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChannelClosed => write!(f, "channel is closed"),
            Self::Context(err) => write!(f, "{err}"),
            Self::Broker(message) => write!(f, "broker error: {message}"),
        }
    }
}

impl Error for PublishError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Context(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContextError> for PublishError {
    fn from(value: ContextError) -> Self {
        Self::Context(value)
    }
}

/// Minimal publish surface of a broker channel.
///
/// Implementations must be safe to share between concurrent requests.
pub trait MessageChannel {
    fn publish(
        &self,
        ctx: &RequestContext,
        exchange: &str,
        routing_key: &str,
        mandatory: bool,
        immediate: bool,
        msg: Publishing,
    ) -> Result<(), PublishError>;
}

impl<C: MessageChannel + ?Sized> MessageChannel for &C {
    fn publish(
        &self,
        ctx: &RequestContext,
        exchange: &str,
        routing_key: &str,
        mandatory: bool,
        immediate: bool,
        msg: Publishing,
    ) -> Result<(), PublishError> {
        (**self).publish(ctx, exchange, routing_key, mandatory, immediate, msg)
    }
}

impl<C: MessageChannel + ?Sized> MessageChannel for Arc<C> {
    fn publish(
        &self,
        ctx: &RequestContext,
        exchange: &str,
        routing_key: &str,
        mandatory: bool,
        immediate: bool,
        msg: Publishing,
    ) -> Result<(), PublishError> {
        (**self).publish(ctx, exchange, routing_key, mandatory, immediate, msg)
    }
}

/// One message accepted by a `MemoryChannel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub exchange: String,
    pub routing_key: String,
    pub publishing: Publishing,
}

/// In-process channel that records accepted messages in publish order.
///
/// Used when no broker is attached and as a test double.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    messages: Mutex<Vec<PublishedMessage>>,
    closed: AtomicBool,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every later publish with `PublishError::ChannelClosed`.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Snapshot of accepted messages, oldest first.
    pub fn messages(&self) -> Vec<PublishedMessage> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl MessageChannel for MemoryChannel {
    fn publish(
        &self,
        ctx: &RequestContext,
        exchange: &str,
        routing_key: &str,
        _mandatory: bool,
        _immediate: bool,
        msg: Publishing,
    ) -> Result<(), PublishError> {
        ctx.check()?;
        if self.closed.load(Ordering::SeqCst) {
            return Err(PublishError::ChannelClosed);
        }

        let message = PublishedMessage {
            exchange: exchange.to_string(),
            routing_key: routing_key.to_string(),
            publishing: msg,
        };
        match self.messages.lock() {
            Ok(mut guard) => guard.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
        Ok(())
    }
}
