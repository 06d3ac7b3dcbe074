//! Shorthand macros for scoped cleanup.
//!
//! - [`macro@crate::defer`] - Binds a [`Defer`](crate::Defer) guard to the enclosing
//!   scope so the given statements run when the scope exits.
//! - [`macro@crate::capture`] - Runs a cleanup expression and merges its error into a
//!   result variable via [`capture`](crate::capture()).
//!
//! # Examples
//!
//! ```
//! use core::cell::Cell;
//! use error_defer::{capture, defer};
//!
//! fn run(closed: &Cell<bool>) -> Result<(), &'static str> {
//!     defer! { closed.set(true); }
//!
//!     let mut result = Ok(());
//!     capture!(result, Err("disk full"));
//!     result
//! }
//!
//! let closed = Cell::new(false);
//! assert_eq!(run(&closed), Err("disk full"));
//! assert!(closed.get());
//! ```

/// Runs the given statements when the enclosing scope exits.
///
/// Expands to a hidden [`Defer`](crate::Defer) binding. Several `defer!`
/// invocations in one scope run in reverse order, as locals drop in reverse
/// declaration order. The statements borrow their captures until the scope
/// ends, so share state through `Cell`/`RefCell` when the body also needs it.
///
/// # Examples
///
/// ```
/// use core::cell::RefCell;
/// use error_defer::defer;
///
/// let log = RefCell::new(Vec::new());
/// {
///     defer! { log.borrow_mut().push("first registered"); }
///     defer! { log.borrow_mut().push("second registered"); }
///     log.borrow_mut().push("body");
/// }
///
/// assert_eq!(*log.borrow(), vec!["body", "second registered", "first registered"]);
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _defer_guard = $crate::Defer::new(|| {
            let _ = { $($body)* };
        });
    };
}

/// Runs a cleanup expression once and merges its error into a slot variable.
///
/// `capture!(slot, expr)` is `capture(&mut slot, || expr)`.
///
/// # Examples
///
/// ```
/// use error_defer::capture;
///
/// let mut result: Result<u32, &str> = Err("not found");
/// capture!(result, Err("disk full"));
/// assert_eq!(result, Err("not found"));
/// ```
#[macro_export]
macro_rules! capture {
    ($slot:expr, $action:expr $(,)?) => {
        $crate::capture(&mut $slot, || $action)
    };
}
