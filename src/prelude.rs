//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_defer::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`capture!`], [`defer!`]
//! - **Functions**: [`capture()`], [`capture_or_else`], [`with_resource`], [`scoped`]
//! - **Types**: [`Closing`], [`Defer`], [`DeferStack`], [`Disposition`]
//! - **Traits**: [`Close`], [`CleanupResultExt`], [`ErrorSlot`]
//!
//! # Examples
//!
//! ```
//! use error_defer::prelude::*;
//!
//! fn flush_all() -> Result<(), &'static str> {
//!     let mut result = Ok(());
//!     capture!(result, Err("disk full"));
//!     result.and_cleanup(|| Err("never surfaces"))
//! }
//!
//! assert_eq!(flush_all(), Err("disk full"));
//! ```

// Macros
pub use crate::{capture, defer};

// Functions
#[cfg(feature = "tracing")]
pub use crate::capture::capture_traced;
pub use crate::capture::capture_or_else;
pub use crate::scope::{scoped, with_resource};

// Core types
pub use crate::types::{Closing, Defer, DeferStack, Disposition};

// Traits
pub use crate::traits::{CleanupResultExt, Close, ErrorSlot};
