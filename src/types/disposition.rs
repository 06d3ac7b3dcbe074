use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a cleanup merge did to its error slot.
///
/// Returned by [`capture_or_else`](crate::capture_or_else) and the functions
/// built on it, for callers that want to count or report cleanup failures.
///
/// # Examples
///
/// ```
/// use error_defer::{capture_or_else, Disposition};
///
/// let mut slot: Option<&str> = None;
/// let disposition = capture_or_else(&mut slot, || Err("disk full"), drop);
///
/// assert_eq!(disposition, Disposition::Captured);
/// assert!(disposition.cleanup_failed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Disposition {
    /// The cleanup action succeeded; the slot was not touched.
    Clean,
    /// The cleanup action failed and its error was stored into the empty slot.
    Captured,
    /// The cleanup action failed, but the slot already held an error, so the
    /// cleanup error was discarded.
    Suppressed,
}

impl Disposition {
    /// Returns `true` if the cleanup action reported an error, whether or not
    /// it made it into the slot.
    #[inline]
    pub const fn cleanup_failed(self) -> bool {
        !matches!(self, Disposition::Clean)
    }

    /// Returns `true` if the slot was written by the merge.
    #[inline]
    pub const fn is_captured(self) -> bool {
        matches!(self, Disposition::Captured)
    }

    /// Returns `true` if a cleanup error was lost to an earlier error.
    #[inline]
    pub const fn is_suppressed(self) -> bool {
        matches!(self, Disposition::Suppressed)
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Disposition::Clean => "cleanup succeeded",
            Disposition::Captured => "cleanup error captured",
            Disposition::Suppressed => "cleanup error suppressed",
        };
        f.write_str(text)
    }
}
