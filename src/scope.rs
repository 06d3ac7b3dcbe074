//! Body-plus-cleanup combinators.
//!
//! These produce the function's result value explicitly, then reconcile it
//! with the cleanup, so the cleanup error lands in the returned `Result`
//! without the caller declaring a mutable slot.
//!
//! # Examples
//!
//! ```
//! use error_defer::{traits::Close, with_resource};
//!
//! struct Closer;
//!
//! impl Close for Closer {
//!     type Error = String;
//!     fn close(self) -> Result<(), String> {
//!         Err("<had problem closing!>".to_string())
//!     }
//! }
//!
//! let result: Result<(), String> = with_resource(Closer, |_closer| {
//!     // do stuff...
//!     Ok(())
//! });
//!
//! assert_eq!(result, Err("<had problem closing!>".to_string()));
//! ```

use crate::traits::Close;
use crate::types::{Closing, DeferStack};

/// Runs `body` with mutable access to `resource`, then closes it exactly once.
///
/// The close error reaches the returned `Result` only if `body` succeeded.
/// `body` may leave early through `?`; the close still happens afterwards. If
/// `body` panics, the resource is closed while unwinding and the close error is
/// discarded.
///
/// # Examples
///
/// ```
/// use error_defer::{traits::Close, with_resource};
///
/// struct Closer;
/// impl Close for Closer {
///     type Error = &'static str;
///     fn close(self) -> Result<(), Self::Error> {
///         Err("disk full")
///     }
/// }
///
/// let result: Result<u32, &str> = with_resource(Closer, |_| Err("not found"));
/// assert_eq!(result, Err("not found"));
/// ```
pub fn with_resource<R, T, E, F>(resource: R, body: F) -> Result<T, E>
where
    R: Close,
    R::Error: Into<E>,
    F: FnOnce(&mut R) -> Result<T, E>,
{
    let mut guard = Closing::new(resource);
    let mut result = body(&mut *guard);
    guard.close_into(&mut result);
    result
}

/// Runs `body` with a [`DeferStack`] and unwinds it once `body` returns.
///
/// Cleanups registered by `body` run newest first and merge into the body's
/// result: the body's own error wins, then the first failing cleanup.
///
/// # Examples
///
/// ```
/// use core::cell::RefCell;
/// use error_defer::scoped;
///
/// let log = RefCell::new(Vec::new());
///
/// let result: Result<&str, &str> = scoped(|defer| {
///     defer.defer(|| {
///         log.borrow_mut().push("release lock");
///         Ok(())
///     });
///     defer.defer(|| {
///         log.borrow_mut().push("remove temp file");
///         Err("permission denied")
///     });
///     Ok("done")
/// });
///
/// assert_eq!(result, Err("permission denied"));
/// assert_eq!(*log.borrow(), vec!["remove temp file", "release lock"]);
/// ```
pub fn scoped<'a, T, E, F>(body: F) -> Result<T, E>
where
    F: FnOnce(&mut DeferStack<'a, E>) -> Result<T, E>,
{
    let mut stack = DeferStack::new();
    let mut result = body(&mut stack);
    stack.run_into(&mut result);
    result
}
