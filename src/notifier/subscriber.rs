//! Subscriber trait and closure adapter.

use crate::shared::SubscriberError;

/// Receives events broadcast by a [`Notifier`](crate::notifier::Notifier)
///
/// Subscribers are shared (`Arc`) and called through `&self`; any state they
/// keep lives behind their own lock. The event is borrowed: a subscriber that
/// wants to change its view of the event updates its own copy.
pub trait Subscriber<E>: Send + Sync {
    /// Subscriber name (for logging and failure reports)
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handle one event
    ///
    /// Returning an error does not stop delivery to the other subscribers.
    fn receive(&self, event: &E) -> Result<(), SubscriberError>;
}

/// Subscriber built from a closure
///
/// ```rust
/// use std::sync::Arc;
/// use authflow::notifier::{FnSubscriber, Notifier};
///
/// let notifier = Notifier::<u32>::new();
/// let printer = Arc::new(FnSubscriber::new("printer", |value: &u32| {
///     println!("got {}", value);
///     Ok(())
/// }));
/// notifier.subscribe(&printer);
/// assert_eq!(notifier.publish(7).delivered, 1);
/// ```
pub struct FnSubscriber<F> {
    name: String,
    callback: F,
}

impl<F> FnSubscriber<F> {
    pub fn new<E>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&E) -> Result<(), SubscriberError> + Send + Sync,
    {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<E, F> Subscriber<E> for FnSubscriber<F>
where
    F: Fn(&E) -> Result<(), SubscriberError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, event: &E) -> Result<(), SubscriberError> {
        (self.callback)(event)
    }
}
