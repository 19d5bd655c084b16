use crate::core::error::IntakeError;
use crate::core::message::Message;

use async_trait::async_trait;

/// This trait defines the interface for topic-specific processing of a
/// message payload. Handlers receive the raw payload text and own any
/// decoding; they report failures through their result rather than
/// panicking, so the dispatcher can contain them.
#[async_trait]
pub trait TopicHandler: Send + Sync {
    /// Short identifier used in log output when the handler fails.
    fn name(&self) -> &str;

    /// Processes one payload. Parse failures are expected to be handled
    /// (logged) inside the handler; anything returned here is caught and
    /// logged at the dispatch boundary.
    async fn handle(&self, payload: &str) -> Result<(), IntakeError>;
}

struct Route {
    pattern: String,
    handler: Box<dyn TopicHandler>,
}

/// Routes each inbound message to the first handler whose topic pattern
/// matches, by case-sensitive substring test in registration order.
///
/// The dispatcher is the error-containment boundary for the whole intake
/// path: `dispatch` never propagates an error to its caller, so a single
/// malformed message cannot disrupt the subscription or any message that
/// follows it. The routing table is read-only after construction, which
/// makes the dispatcher safe to share across concurrent deliveries
/// without locking.
pub struct Dispatcher {
    routes: Vec<Route>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a handler for any topic containing `pattern`.
    /// Registration order is match order; the first matching route wins.
    pub fn route(mut self, pattern: &str, handler: Box<dyn TopicHandler>) -> Self {
        self.routes.push(Route {
            pattern: pattern.to_string(),
            handler,
        });
        self
    }

    /// Classify the message by topic and invoke the matching handler.
    ///
    /// An empty topic or an unrecognised one logs a single warning and
    /// invokes nothing. A handler error is logged with the handler
    /// identity and suppressed.
    pub async fn dispatch(&self, message: &Message) {
        if message.topic.is_empty() {
            tracing::warn!("Message without a topic dropped");
            return;
        }

        let matched = self
            .routes
            .iter()
            .find(|route| message.topic.contains(&route.pattern));

        let Some(route) = matched else {
            tracing::warn!("Unrecognised topic: {}", message.topic);
            return;
        };

        if let Err(e) = route.handler.handle(&message.payload).await {
            tracing::error!(
                "Handler '{}' failed on topic '{}': {e}",
                route.handler.name(),
                message.topic
            );
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
