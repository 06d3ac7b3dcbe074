//! Run-on-scope-exit guard.
//!
//! [`Defer`] runs a closure exactly once when it goes out of scope, whichever
//! way the scope is left: falling off the end, `return`, `?`, or a panic
//! unwinding through it.
//!
//! # Examples
//!
//! ```
//! use core::cell::Cell;
//! use error_defer::Defer;
//!
//! let released = Cell::new(false);
//! {
//!     let _guard = Defer::new(|| released.set(true));
//!     assert!(!released.get());
//! }
//! assert!(released.get());
//! ```

use core::fmt;

/// A guard that runs `F` once when dropped, unless cancelled.
///
/// The closure is held in an `Option` and taken on first use, so no path can
/// run it twice.
#[must_use = "a Defer guard runs its closure as soon as it is dropped; bind it to a variable"]
pub struct Defer<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    /// Arms a guard that runs `action` when dropped.
    #[inline]
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Disarms the guard; the closure is dropped without running.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cell::Cell;
    /// use error_defer::Defer;
    ///
    /// let ran = Cell::new(false);
    /// Defer::new(|| ran.set(true)).cancel();
    /// assert!(!ran.get());
    /// ```
    #[inline]
    pub fn cancel(mut self) {
        self.action = None;
    }

    /// Runs the closure now instead of at scope exit.
    #[inline]
    pub fn run(mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }

    /// Returns `true` while the closure has not yet run or been cancelled.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for Defer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defer")
            .field("armed", &self.is_armed())
            .finish_non_exhaustive()
    }
}
