//! Merging a cleanup action's outcome into an error slot.
//!
//! Dropping a resource, or ignoring the result of its `close`, silently loses
//! errors such as a failed flush to disk. [`capture`] runs the cleanup and
//! surfaces its error through the caller's result, unless an earlier error is
//! already there. The earlier error always wins.
//!
//! # Examples
//!
//! ```
//! use error_defer::capture;
//!
//! fn write_report() -> Result<(), &'static str> {
//!     let mut result = Ok(());
//!     // ... primary work that may set `result` ...
//!     capture(&mut result, || Err("disk full"));
//!     result
//! }
//!
//! assert_eq!(write_report(), Err("disk full"));
//! ```

use crate::traits::ErrorSlot;
use crate::types::Disposition;

/// Runs `action` exactly once and merges its error into `slot`.
///
/// | `action()` | slot before | slot after |
/// |------------|-------------|------------|
/// | `Ok(())` | anything | unchanged |
/// | `Err(c)` | empty | `c` |
/// | `Err(c)` | holds `e` | `e` (`c` is dropped) |
///
/// The helper itself never fails and never logs. Only one error can leave a
/// function through its return value, so a cleanup error that loses to a
/// primary error is discarded; use [`capture_or_else`] to observe it.
///
/// # Examples
///
/// ```
/// use error_defer::capture;
///
/// // Primary failure dominates.
/// let mut slot: Result<(), &str> = Err("not found");
/// capture(&mut slot, || Err("disk full"));
/// assert_eq!(slot, Err("not found"));
///
/// // Cleanup failure surfaces when nothing else went wrong.
/// let mut slot: Option<&str> = None;
/// capture(&mut slot, || Err("disk full"));
/// assert_eq!(slot, Some("disk full"));
/// ```
#[inline]
pub fn capture<S, E, F>(slot: &mut S, action: F)
where
    S: ErrorSlot<E> + ?Sized,
    F: FnOnce() -> Result<(), E>,
{
    capture_or_else(slot, action, drop);
}

/// Like [`capture`], but hands a suppressed cleanup error to `on_suppressed`
/// and reports what the merge did.
///
/// `on_suppressed` is called only when the action failed while `slot` already
/// held an error.
///
/// # Examples
///
/// ```
/// use error_defer::{capture_or_else, Disposition};
///
/// let mut dropped = Vec::new();
/// let mut slot: Result<(), &str> = Err("not found");
///
/// let disposition = capture_or_else(&mut slot, || Err("disk full"), |e| dropped.push(e));
///
/// assert_eq!(disposition, Disposition::Suppressed);
/// assert_eq!(slot, Err("not found"));
/// assert_eq!(dropped, vec!["disk full"]);
/// ```
pub fn capture_or_else<S, E, F, H>(slot: &mut S, action: F, on_suppressed: H) -> Disposition
where
    S: ErrorSlot<E> + ?Sized,
    F: FnOnce() -> Result<(), E>,
    H: FnOnce(E),
{
    match action() {
        Ok(()) => Disposition::Clean,
        Err(error) if slot.is_vacant() => {
            slot.fill(error);
            Disposition::Captured
        }
        Err(error) => {
            on_suppressed(error);
            Disposition::Suppressed
        }
    }
}

/// Like [`capture`], but records a suppressed cleanup error as a `tracing`
/// warning instead of dropping it without a trace.
///
/// # Examples
///
/// ```
/// use error_defer::{capture_traced, Disposition};
///
/// let mut slot: Result<(), String> = Err("not found".to_string());
/// let disposition = capture_traced(&mut slot, || Err("disk full".to_string()));
/// assert_eq!(disposition, Disposition::Suppressed);
/// ```
#[cfg(feature = "tracing")]
pub fn capture_traced<S, E, F>(slot: &mut S, action: F) -> Disposition
where
    S: ErrorSlot<E> + ?Sized,
    E: core::fmt::Display,
    F: FnOnce() -> Result<(), E>,
{
    capture_or_else(slot, action, |error| {
        tracing::warn!(error = %error, "cleanup failed after an earlier error; dropping cleanup error");
    })
}
