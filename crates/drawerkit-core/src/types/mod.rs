//! Common type aliases used across DrawerKit crates.

mod aliases;

pub use aliases::*;
