//! Byte-stream capability guards
//!
//! Checks against the capability surface of an open handle: whether it can
//! be read, sought, or written, and whether it holds any data at all. The
//! guards never touch the handle's data; they only consult the
//! [`StreamInfo`] reporting trait, which handle owners implement for their
//! own wrapper types. In-memory cursors come with implementations out of
//! the box.

use std::io::{self, Cursor};

use bitflags::bitflags;

use crate::Result;

bitflags! {
    /// Capability flags reported by a guarded byte stream.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        /// The handle supports reading.
        const READ = 1;
        /// The handle supports seeking.
        const SEEK = 1 << 1;
        /// The handle supports writing.
        const WRITE = 1 << 2;
    }
}

/// Capability and length reporting for byte-stream handles.
///
/// The guards only consult this surface; they never read from or write to
/// the handle. Wrap foreign handle types to declare what they support.
pub trait StreamInfo {
    /// The set of operations the handle supports.
    fn capabilities(&self) -> Capabilities;

    /// Total length of the underlying data in bytes.
    ///
    /// # Errors
    /// Returns the underlying I/O error for handles that cannot report a
    /// length.
    fn len(&self) -> io::Result<u64>;
}

impl StreamInfo for Cursor<Vec<u8>> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::READ | Capabilities::SEEK | Capabilities::WRITE
    }

    fn len(&self) -> io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }
}

impl<'a> StreamInfo for Cursor<&'a [u8]> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::READ | Capabilities::SEEK
    }

    fn len(&self) -> io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }
}

/// Fails when the handle does not report the read capability.
///
/// # Arguments
/// * 'value'     - The handle to be verified
/// * 'parameter' - Diagnostic label for the failing argument
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// [`Capabilities::READ`] is absent
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use guardpost::require::io;
///
/// let buffer = Cursor::new(vec![1u8, 2, 3]);
/// io::is_readable(&buffer, "buffer")?;
/// # Ok::<(), guardpost::Error>(())
/// ```
pub fn is_readable<S>(value: &S, parameter: &str) -> Result<()>
where
    S: StreamInfo,
{
    if !value.capabilities().contains(Capabilities::READ) {
        return Err(invalid_argument!(parameter, "must be readable"));
    }

    Ok(())
}

/// Fails when the handle does not report the seek capability.
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// [`Capabilities::SEEK`] is absent
pub fn is_seekable<S>(value: &S, parameter: &str) -> Result<()>
where
    S: StreamInfo,
{
    if !value.capabilities().contains(Capabilities::SEEK) {
        return Err(invalid_argument!(parameter, "must be seekable"));
    }

    Ok(())
}

/// Fails when the handle does not report the write capability.
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// [`Capabilities::WRITE`] is absent
pub fn is_writable<S>(value: &S, parameter: &str) -> Result<()>
where
    S: StreamInfo,
{
    if !value.capabilities().contains(Capabilities::WRITE) {
        return Err(invalid_argument!(parameter, "must be writable"));
    }

    Ok(())
}

/// Fails when the handle reports a zero length.
///
/// Requires the handle to support length reporting; a failing
/// [`StreamInfo::len`] propagates as [`Error::Io`](crate::Error::Io)
/// rather than being guarded separately.
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// the length is zero, or [`Error::Io`](crate::Error::Io) when it cannot
/// be determined
pub fn not_empty<S>(value: &S, parameter: &str) -> Result<()>
where
    S: StreamInfo,
{
    if value.len()? == 0 {
        return Err(invalid_argument!(parameter, "must not be empty"));
    }

    Ok(())
}
