//! Capture errors from deferred cleanup without losing the primary error.
//!
//! Releasing a resource can fail: closing a file may be the moment a buffered
//! write turns out not to fit on disk. Letting the resource drop, or calling its
//! close and ignoring the result, silently loses that error. This crate merges
//! the cleanup's outcome into the function's result by one precedence rule: an
//! error already in flight is never overwritten, and a cleanup error surfaces
//! only when nothing else went wrong.
//!
//! # Examples
//!
//! ## Capturing into a result variable
//!
//! ```
//! use error_defer::capture;
//!
//! struct Closer;
//!
//! impl Closer {
//!     fn close(&self) -> Result<(), String> {
//!         Err("<had problem closing!>".to_string())
//!     }
//! }
//!
//! fn open_thingie() -> Result<Closer, String> {
//!     Ok(Closer)
//! }
//!
//! // Ignoring the close result loses the error.
//! let return1 = (|| -> Result<(), String> {
//!     let thing = open_thingie()?;
//!     let _ = thing.close();
//!     Ok(())
//! })();
//! assert_eq!(return1, Ok(()));
//!
//! // Capturing it surfaces the error.
//! let return2 = (|| -> Result<(), String> {
//!     let thing = open_thingie()?;
//!     let mut result = Ok(());
//!     // do stuff...
//!     capture(&mut result, || thing.close());
//!     result
//! })();
//! assert_eq!(return2, Err("<had problem closing!>".to_string()));
//! ```
//!
//! ## Closing a resource around a body
//!
//! ```
//! use error_defer::{traits::Close, with_resource};
//!
//! struct Journal {
//!     pending: usize,
//! }
//!
//! impl Close for Journal {
//!     type Error = &'static str;
//!     fn close(self) -> Result<(), Self::Error> {
//!         if self.pending > 0 { Err("disk full") } else { Ok(()) }
//!     }
//! }
//!
//! // Primary error wins over the close error.
//! let result: Result<(), &str> = with_resource(Journal { pending: 1 }, |_| Err("not found"));
//! assert_eq!(result, Err("not found"));
//!
//! // With a successful body the close error surfaces.
//! let result: Result<(), &str> = with_resource(Journal { pending: 0 }, |journal| {
//!     journal.pending += 1;
//!     Ok(())
//! });
//! assert_eq!(result, Err("disk full"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Merging a cleanup outcome into an error slot
pub mod capture;
/// Shorthand macros for scoped cleanup
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Body-plus-cleanup combinators
pub mod scope;
/// Error slot, closeable resource and result extension traits
pub mod traits;
/// Scoped-exit guards and merge outcomes
pub mod types;

#[cfg(feature = "tracing")]
pub use capture::capture_traced;
pub use capture::{capture, capture_or_else};
pub use scope::{scoped, with_resource};
pub use traits::{CleanupResultExt, Close, ErrorSlot};
pub use types::{Closing, Defer, DeferStack, Disposition};
