//! Extension trait for reconciling a `Result` with a cleanup action.
//!
//! [`CleanupResultExt::and_cleanup`] is [`capture`](crate::capture) for callers
//! that hold the primary outcome by value rather than in a mutable slot.
//!
//! # Examples
//!
//! ```
//! use error_defer::traits::CleanupResultExt;
//!
//! fn save() -> Result<(), &'static str> {
//!     let written: Result<(), &'static str> = Ok(());
//!     written.and_cleanup(|| Err("<had problem closing!>"))
//! }
//!
//! assert_eq!(save(), Err("<had problem closing!>"));
//! ```

use crate::capture::capture;

/// Adds cleanup reconciliation to `Result`.
pub trait CleanupResultExt<T, E> {
    /// Runs `action` exactly once and merges its outcome into `self`.
    ///
    /// - `self` is `Err`: returned unchanged, the cleanup error (if any) is dropped.
    /// - `self` is `Ok` and `action` fails: the cleanup error is returned.
    /// - `action` succeeds: `self` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::traits::CleanupResultExt;
    ///
    /// let primary: Result<u32, &str> = Err("not found");
    /// assert_eq!(primary.and_cleanup(|| Err("disk full")), Err("not found"));
    ///
    /// let fine: Result<u32, &str> = Ok(1);
    /// assert_eq!(fine.and_cleanup(|| Ok(())), Ok(1));
    /// ```
    fn and_cleanup<F>(self, action: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<(), E>;
}

impl<T, E> CleanupResultExt<T, E> for Result<T, E> {
    #[inline]
    fn and_cleanup<F>(mut self, action: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        capture(&mut self, action);
        self
    }
}
