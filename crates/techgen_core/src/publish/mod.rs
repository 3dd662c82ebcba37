//! Task notification publishing.
//!
//! # Responsibility
//! - Define the message shape and the channel contract the core publishes on.
//! - Encode task-created events as broker messages.
//!
//! # Invariants
//! - Publishing is fire-and-forget: no acknowledgment is awaited or tracked.
//! - A failed publish is reported, never retried.

mod channel;
mod task_created;

pub use channel::{
    DeliveryMode, MemoryChannel, MessageChannel, PublishError, PublishedMessage, Publishing,
};
pub use task_created::{TaskCreatedPublisher, TaskPublisher, DEFAULT_TASK_QUEUE};
