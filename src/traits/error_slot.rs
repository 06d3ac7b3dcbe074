//! Abstraction over locations that hold a function's eventual error.
//!
//! An error slot is either empty ("no error") or holds exactly one error value.
//! [`capture`](crate::capture) writes into a slot only while it is empty, which
//! is what lets a primary error take precedence over a later cleanup error.
//!
//! # Examples
//!
//! ```
//! use error_defer::traits::ErrorSlot;
//!
//! let mut slot: Option<&str> = None;
//! assert!(slot.is_vacant());
//!
//! slot.fill("disk full");
//! assert_eq!(slot, Some("disk full"));
//! ```

/// A mutable location holding either "no error" or one error value of type `E`.
///
/// Implemented for the two shapes a Rust function naturally returns its failure in:
///
/// | Slot type | "no error" | holds error |
/// |-----------|------------|-------------|
/// | `Option<E>` | `None` | `Some(e)` |
/// | `Result<T, E>` | `Ok(_)` | `Err(e)` |
///
/// # Examples
///
/// ```
/// use error_defer::traits::ErrorSlot;
///
/// let mut result: Result<u32, &str> = Ok(7);
/// assert!(result.is_vacant());
///
/// result.fill("flush failed");
/// assert_eq!(result, Err("flush failed"));
/// assert!(!result.is_vacant());
/// ```
pub trait ErrorSlot<E> {
    /// Returns `true` when the slot currently holds no error.
    fn is_vacant(&self) -> bool;

    /// Stores `error` into the slot.
    ///
    /// Callers only invoke this on a vacant slot; implementations are free to
    /// overwrite unconditionally.
    fn fill(&mut self, error: E);

    /// Returns `true` when the slot already holds an error.
    #[inline]
    fn is_occupied(&self) -> bool {
        !self.is_vacant()
    }
}

impl<E> ErrorSlot<E> for Option<E> {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn fill(&mut self, error: E) {
        *self = Some(error);
    }
}

/// A `Result` slot is vacant while it is `Ok`.
///
/// Filling it replaces the success value with the error, the same way a
/// function that fails during cleanup no longer returns its computed value.
impl<T, E> ErrorSlot<E> for Result<T, E> {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn fill(&mut self, error: E) {
        *self = Err(error);
    }
}
