//! GUID guards
//!
//! Checks against the all-zero identifier, which marks an uninitialized
//! GUID in most wire formats and is never a valid identity.

use uguid::Guid;

use crate::{Error, Result};

/// The all-zero identifier.
const EMPTY: Guid = Guid::from_bytes([0; 16]);

/// Fails when `value` is the all-zero GUID, otherwise passes it through.
///
/// # Arguments
/// * 'value'     - The identifier to be verified
/// * 'parameter' - Diagnostic label for the failing argument
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `value` is all-zero
///
/// # Examples
///
/// ```rust
/// use guardpost::require::guid;
///
/// let id = guid::not_empty(uguid::guid!("7c9e6679-7425-40de-944b-e07fc1f90ae7"), "id")?;
/// # Ok::<(), guardpost::Error>(())
/// ```
pub fn not_empty(value: Guid, parameter: &str) -> Result<Guid> {
    if value == EMPTY {
        return Err(invalid_argument!(parameter, "must not be the all-zero GUID"));
    }

    Ok(value)
}

/// Fails when `value` is absent or all-zero, otherwise unwraps it.
///
/// # Errors
/// Returns [`Error::NullArgument`] when `value` is [`None`], or
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when the
/// unwrapped identifier is all-zero
pub fn not_null_or_empty(value: Option<Guid>, parameter: &str) -> Result<Guid> {
    let Some(value) = value else {
        return Err(Error::null(parameter));
    };

    not_empty(value, parameter)
}
