//! Message types for the Elm Architecture.
//!
//! Messages are the only way to update a model. Activation events coming from
//! the host runtime are turned into [`ActivateMsg`] before they reach the
//! widget.

use std::any::Any;
use std::fmt;

/// Anything a runtime can hand to [`crate::Model::update`].
///
/// Models pick out the payloads they understand with [`Message::is`] or
/// [`Message::downcast_ref`] and report the rest as unchanged.
///
/// ```rust
/// use launchpad::{ActivateMsg, Message};
///
/// let msg = Message::from(ActivateMsg);
/// assert!(msg.is::<ActivateMsg>());
/// assert!(!msg.is::<u32>());
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Box a payload.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Take the payload back out if it is an `M`.
    #[must_use]
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Borrow the payload if it is an `M`.
    #[must_use]
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Whether the payload is an `M`.
    #[must_use]
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

/// A user-triggered click or press on the counter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivateMsg;

impl From<ActivateMsg> for Message {
    fn from(msg: ActivateMsg) -> Self {
        Self::new(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_comes_back_out() {
        let msg = Message::new(7_u64);
        assert_eq!(msg.downcast_ref::<u64>(), Some(&7));
        assert_eq!(msg.downcast::<u64>(), Some(7));
    }

    #[test]
    fn test_foreign_payload_is_not_activation() {
        let msg = Message::new("hover");
        assert!(!msg.is::<ActivateMsg>());
        assert!(msg.downcast::<ActivateMsg>().is_none());
    }

    #[test]
    fn test_activate_msg_into_message() {
        let msg: Message = ActivateMsg.into();
        assert_eq!(msg.downcast_ref::<ActivateMsg>(), Some(&ActivateMsg));
    }
}
