//! Layout change notification
//!
//! Event types, the synchronous dispatcher and the listener trait through
//! which renderers, pricing and cart serialization observe the layout.

pub mod event;
pub mod listener;
