//! The "resource with cleanup" contract.
//!
//! A resource only has to expose one fallible, consuming release operation to
//! work with [`Closing`](crate::Closing) and [`with_resource`](crate::with_resource).
//! Taking `self` by value means a resource cannot be used after it was closed,
//! and cannot be closed twice.
//!
//! # Examples
//!
//! ```
//! use error_defer::traits::Close;
//!
//! struct Connection {
//!     healthy: bool,
//! }
//!
//! impl Close for Connection {
//!     type Error = &'static str;
//!
//!     fn close(self) -> Result<(), Self::Error> {
//!         if self.healthy {
//!             Ok(())
//!         } else {
//!             Err("<had problem closing!>")
//!         }
//!     }
//! }
//!
//! assert_eq!(Connection { healthy: false }.close(), Err("<had problem closing!>"));
//! ```

/// A resource whose release can fail.
///
/// Closing consumes the resource. Whatever the close reports is the only
/// outcome the deferral helpers look at; they never inspect the error.
pub trait Close {
    /// Error produced when releasing the resource fails.
    type Error;

    /// Releases the resource, reporting any failure that happened while doing so
    /// (typically an unflushed write).
    fn close(self) -> Result<(), Self::Error>;
}

/// Syncs all written data and metadata to disk before the handle is dropped.
///
/// Dropping a [`std::fs::File`] ignores errors; this surfaces them.
///
/// On Windows `sync_all` fails for handles opened without write access (for
/// example by [`File::open`](std::fs::File::open)), so closing a read-only
/// file there reports an error. Drop read-only handles instead of closing them.
#[cfg(feature = "std")]
impl Close for std::fs::File {
    type Error = std::io::Error;

    fn close(self) -> Result<(), Self::Error> {
        self.sync_all()
    }
}

/// Flushes buffered bytes into the inner writer.
///
/// `BufWriter`'s own `Drop` flushes too, but discards the error.
#[cfg(feature = "std")]
impl<W: std::io::Write> Close for std::io::BufWriter<W> {
    type Error = std::io::Error;

    fn close(self) -> Result<(), Self::Error> {
        let mut inner = self.into_inner().map_err(|e| e.into_error())?;
        inner.flush()
    }
}

/// Shuts down both halves of the connection.
#[cfg(feature = "std")]
impl Close for std::net::TcpStream {
    type Error = std::io::Error;

    fn close(self) -> Result<(), Self::Error> {
        self.shutdown(std::net::Shutdown::Both)
    }
}
