//! Task-created event publisher.

use crate::context::RequestContext;
use crate::model::task::TaskId;
use crate::publish::channel::{DeliveryMode, MessageChannel, PublishError, Publishing};

/// Queue that task workers consume task-created events from.
pub const DEFAULT_TASK_QUEUE: &str = "task_created";

const CONTENT_TYPE_TEXT_PLAIN: &str = "text/plain";

/// Announces newly inserted tasks to workers.
pub trait TaskCreatedPublisher {
    fn publish_task_created(&self, ctx: &RequestContext, id: TaskId) -> Result<(), PublishError>;
}

impl<P: TaskCreatedPublisher + ?Sized> TaskCreatedPublisher for &P {
    fn publish_task_created(&self, ctx: &RequestContext, id: TaskId) -> Result<(), PublishError> {
        (**self).publish_task_created(ctx, id)
    }
}

/// Publishes task ids direct-to-queue through the default exchange.
///
/// Message contract: persistent delivery, `text/plain`, body is the decimal
/// task id.
pub struct TaskPublisher<C: MessageChannel> {
    channel: C,
    queue: String,
}

impl<C: MessageChannel> TaskPublisher<C> {
    /// Publisher routing to `DEFAULT_TASK_QUEUE`.
    pub fn new(channel: C) -> Self {
        Self::with_queue(channel, DEFAULT_TASK_QUEUE)
    }

    pub fn with_queue(channel: C, queue: impl Into<String>) -> Self {
        Self {
            channel,
            queue: queue.into(),
        }
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }
}

impl<C: MessageChannel> TaskCreatedPublisher for TaskPublisher<C> {
    fn publish_task_created(&self, ctx: &RequestContext, id: TaskId) -> Result<(), PublishError> {
        let msg = Publishing {
            delivery_mode: DeliveryMode::Persistent,
            content_type: CONTENT_TYPE_TEXT_PLAIN.to_string(),
            body: id.to_string().into_bytes(),
        };
        self.channel
            .publish(ctx, "", self.queue.as_str(), false, false, msg)
    }
}
