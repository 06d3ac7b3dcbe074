//! Owning guard that closes a resource exactly once.
//!
//! # Examples
//!
//! ```
//! use error_defer::{traits::Close, Closing};
//!
//! struct Handle;
//!
//! impl Close for Handle {
//!     type Error = &'static str;
//!     fn close(self) -> Result<(), Self::Error> {
//!         Err("<had problem closing!>")
//!     }
//! }
//!
//! fn use_handle() -> Result<(), &'static str> {
//!     let mut result = Ok(());
//!     let handle = Closing::new(Handle);
//!     // ... work with `handle` ...
//!     handle.close_into(&mut result);
//!     result
//! }
//!
//! assert_eq!(use_handle(), Err("<had problem closing!>"));
//! ```

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::capture::capture;
use crate::traits::{Close, ErrorSlot};

/// Owns a [`Close`] resource and guarantees it is closed exactly once.
///
/// Close it explicitly with [`close`](Closing::close) or
/// [`close_into`](Closing::close_into) to see the error. If the guard is
/// dropped instead (early return, panic), the resource is still closed, but its
/// error has nowhere to go and is discarded. With the `tracing` feature the
/// discarded failure is recorded as a warning.
#[must_use = "dropping a Closing guard closes the resource immediately and discards the close error"]
pub struct Closing<R: Close> {
    resource: Option<R>,
}

impl<R: Close> Closing<R> {
    /// Takes ownership of `resource`.
    #[inline]
    pub fn new(resource: R) -> Self {
        Self {
            resource: Some(resource),
        }
    }

    /// Closes the resource now and returns the outcome.
    pub fn close(mut self) -> Result<(), R::Error> {
        match self.resource.take() {
            Some(resource) => resource.close(),
            None => Ok(()),
        }
    }

    /// Closes the resource now and merges the outcome into `slot` with
    /// [`capture`]: an error already in `slot` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_defer::{traits::Close, Closing};
    ///
    /// struct Flaky;
    /// impl Close for Flaky {
    ///     type Error = String;
    ///     fn close(self) -> Result<(), String> {
    ///         Err("disk full".into())
    ///     }
    /// }
    ///
    /// let mut result: Result<(), String> = Err("not found".into());
    /// Closing::new(Flaky).close_into(&mut result);
    /// assert_eq!(result, Err("not found".to_string()));
    /// ```
    pub fn close_into<S, E>(self, slot: &mut S)
    where
        S: ErrorSlot<E> + ?Sized,
        R::Error: Into<E>,
    {
        capture(slot, || self.close().map_err(Into::into));
    }

    /// Gives the resource back without closing it.
    pub fn into_inner(mut self) -> R {
        match self.resource.take() {
            Some(resource) => resource,
            None => unreachable!("Closing holds its resource until consumed"),
        }
    }
}

impl<R: Close> Deref for Closing<R> {
    type Target = R;

    fn deref(&self) -> &R {
        match &self.resource {
            Some(resource) => resource,
            None => unreachable!("Closing holds its resource until consumed"),
        }
    }
}

impl<R: Close> DerefMut for Closing<R> {
    fn deref_mut(&mut self) -> &mut R {
        match &mut self.resource {
            Some(resource) => resource,
            None => unreachable!("Closing holds its resource until consumed"),
        }
    }
}

impl<R: Close> Drop for Closing<R> {
    fn drop(&mut self) {
        let Some(resource) = self.resource.take() else {
            return;
        };

        let outcome = resource.close();

        #[cfg(feature = "tracing")]
        {
            if outcome.is_err() {
                tracing::warn!(
                    resource = core::any::type_name::<R>(),
                    "close failed while dropping guard; error discarded"
                );
            }
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = outcome;
        }
    }
}

impl<R: Close + fmt::Debug> fmt::Debug for Closing<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closing")
            .field("resource", &self.resource)
            .finish()
    }
}
