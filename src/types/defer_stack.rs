//! Several deferred cleanups sharing one error slot.
//!
//! A function that acquires more than one resource registers a cleanup for
//! each. They run in reverse registration order, newest first. Each one goes
//! through [`capture`], so the primary error wins, and after it the first
//! cleanup to fail.
//!
//! # Examples
//!
//! ```
//! use error_defer::DeferStack;
//!
//! let mut result: Result<(), &str> = Ok(());
//!
//! let mut stack = DeferStack::new();
//! stack.defer(|| Err("closing outer"));
//! stack.defer(|| Err("closing inner"));
//! assert_eq!(stack.len(), 2);
//! stack.run_into(&mut result);
//!
//! assert_eq!(result, Err("closing inner"));
//! ```

use core::fmt;

use smallvec::SmallVec;

use crate::capture::capture;
use crate::traits::ErrorSlot;
use crate::types::alloc_type::Box;

type DeferredAction<'a, E> = Box<dyn FnOnce() -> Result<(), E> + 'a>;

/// LIFO stack of deferred cleanup actions.
///
/// Inline storage covers the common one or two registrations without a
/// separate allocation for the stack itself.
///
/// If the stack is dropped without [`run_into`](DeferStack::run_into), for
/// example while a panic unwinds, the remaining actions still run newest first
/// and their errors are discarded. With the `tracing` feature the number of
/// failed actions is recorded as a warning.
pub struct DeferStack<'a, E> {
    actions: SmallVec<[DeferredAction<'a, E>; 2]>,
}

impl<'a, E> DeferStack<'a, E> {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self {
            actions: SmallVec::new(),
        }
    }

    /// Registers `action` to run when the stack is unwound.
    #[inline]
    pub fn defer<F>(&mut self, action: F)
    where
        F: FnOnce() -> Result<(), E> + 'a,
    {
        self.actions.push(Box::new(action));
    }

    /// Number of actions still pending.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` when no action is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Runs every pending action newest first, merging each outcome into `slot`.
    ///
    /// Each action runs exactly once. An action that panics leaves the ones
    /// below it to the drop path.
    pub fn run_into<S>(mut self, slot: &mut S)
    where
        S: ErrorSlot<E> + ?Sized,
    {
        while let Some(action) = self.actions.pop() {
            capture(slot, action);
        }
    }
}

impl<E> Default for DeferStack<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for DeferStack<'_, E> {
    fn drop(&mut self) {
        let mut failed = 0usize;
        while let Some(action) = self.actions.pop() {
            if action().is_err() {
                failed += 1;
            }
        }

        #[cfg(feature = "tracing")]
        {
            if failed > 0 {
                tracing::warn!(failed, "deferred cleanups failed with no error slot; errors discarded");
            }
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = failed;
        }
    }
}

impl<E> fmt::Debug for DeferStack<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferStack")
            .field("pending", &self.actions.len())
            .finish()
    }
}
