//! Scoped-exit building blocks.
//!
//! - [`Defer`]: runs a closure once when the enclosing scope exits
//! - [`Closing`]: owns a [`Close`](crate::traits::Close) resource and closes it exactly once
//! - [`DeferStack`]: LIFO cleanups merged into one error slot
//! - [`Disposition`]: what a single merge did
//!
//! # Examples
//!
//! ```
//! use error_defer::{DeferStack, Disposition};
//!
//! let mut result: Result<(), &str> = Err("not found");
//! let mut stack = DeferStack::new();
//! stack.defer(|| Err("disk full"));
//! stack.run_into(&mut result);
//!
//! assert_eq!(result, Err("not found"));
//! assert!(Disposition::Suppressed.cleanup_failed());
//! ```
pub mod alloc_type;
pub mod closing;
pub mod defer;
pub mod defer_stack;
pub mod disposition;

pub use closing::Closing;
pub use defer::Defer;
pub use defer_stack::DeferStack;
pub use disposition::Disposition;
