//! Event system for layout change notification
//!
//! Provides:
//! - Event types for committed layout, selection and history changes
//! - A synchronous dispatcher that delivers events to subscribers in
//!   registration order
//! - Subscription handles for unsubscribing

use std::fmt;

use uuid::Uuid;

use crate::core::listener::LayoutListener;
use crate::data::{Block, BlockId};
use crate::types::Shared;

/// Layout event types
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// Blocks changed after a committed mutation (split, resize, undo, redo, clear)
    CompartmentsChanged(Vec<Block>),
    /// Selected block changed
    SelectionChanged(Option<BlockId>),
    /// History cursor or length changed
    HistoryChanged {
        /// Cursor position
        index: usize,
        /// Number of stored snapshots
        len: usize,
    },
}

impl fmt::Display for LayoutEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutEvent::CompartmentsChanged(blocks) => {
                write!(f, "Compartments changed ({} blocks)", blocks.len())
            }
            LayoutEvent::SelectionChanged(Some(id)) => write!(f, "Selected block {}", id),
            LayoutEvent::SelectionChanged(None) => write!(f, "Selection cleared"),
            LayoutEvent::HistoryChanged { index, len } => {
                write!(f, "History {}/{}", index + 1, len)
            }
        }
    }
}

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

type EventHandler = Box<dyn FnMut(&LayoutEvent)>;

/// Event dispatcher for publishing layout events to subscribers
///
/// Owned by one editor session; handlers run synchronously on the caller's
/// thread, after the state transition they describe is complete.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<(SubscriptionId, EventHandler)>,
}

impl EventDispatcher {
    /// Create a dispatcher with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a closure to every event
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&LayoutEvent) + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.push((id, Box::new(handler)));
        tracing::debug!("Layout subscriber {} registered", id);
        id
    }

    /// Subscribe a shared listener object
    pub fn subscribe_listener<L>(&mut self, listener: Shared<L>) -> SubscriptionId
    where
        L: LayoutListener + 'static,
    {
        self.subscribe(move |event| listener.borrow_mut().dispatch(event))
    }

    /// Remove a subscriber; returns false if the id was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _)| *sub != id);
        before != self.handlers.len()
    }

    /// Publish an event to all subscribers, returning how many received it
    pub fn publish(&mut self, event: LayoutEvent) -> usize {
        tracing::trace!("Publishing {}", event);
        for (_, handler) in self.handlers.iter_mut() {
            handler(&event);
        }
        self.handlers.len()
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
