//! Type aliases for commonly used complex types.
//!
//! The editor runs on a single UI thread, so shared state is `Rc<RefCell<T>>`
//! rather than a lock.

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// # Example
/// ```
/// use drawerkit_core::types::{shared, Shared};
///
/// let counter: Shared<u32> = shared(0);
/// *counter.borrow_mut() += 1;
/// assert_eq!(*counter.borrow(), 1);
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a [`Shared`].
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
