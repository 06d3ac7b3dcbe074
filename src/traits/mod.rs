//! Core traits for deferred error capture.
//!
//! - [`ErrorSlot`]: A location holding a function's eventual error
//! - [`Close`]: A resource whose release can fail
//! - [`CleanupResultExt`]: Merges a cleanup outcome into an owned `Result`
//!
//! # Examples
//!
//! ```
//! use error_defer::traits::{CleanupResultExt, ErrorSlot};
//!
//! let mut slot: Option<&str> = Some("not found");
//! assert!(slot.is_occupied());
//!
//! let result: Result<(), &str> = Ok(());
//! assert_eq!(result.and_cleanup(|| Err("disk full")), Err("disk full"));
//! ```

pub mod cleanup_result;
pub mod close;
pub mod error_slot;

pub use cleanup_result::CleanupResultExt;
pub use close::Close;
pub use error_slot::ErrorSlot;
