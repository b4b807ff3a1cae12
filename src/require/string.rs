//! String guards
//!
//! Emptiness and whitespace checks for optional string arguments. The
//! whitespace scan walks the string left to right and stops at the first
//! non-whitespace character, using the host's Unicode classification
//! ([`char::is_whitespace`]).

use crate::{Error, Result};

/// Fails when `value` is absent or has zero length, otherwise passes the
/// string through.
///
/// # Arguments
/// * 'value'     - The string to be verified
/// * 'parameter' - Diagnostic label for the failing argument
///
/// # Errors
/// Returns [`Error::NullArgument`] when `value` is [`None`], or
/// [`Error::InvalidArgument`] when it is empty
///
/// # Examples
///
/// ```rust
/// use guardpost::require::string;
///
/// let name = string::not_null_or_empty(Some("queue-1"), "name")?;
/// assert_eq!(name, "queue-1");
/// # Ok::<(), guardpost::Error>(())
/// ```
pub fn not_null_or_empty<S>(value: Option<S>, parameter: &str) -> Result<S>
where
    S: AsRef<str>,
{
    let Some(value) = value else {
        return Err(Error::null(parameter));
    };

    if value.as_ref().is_empty() {
        return Err(invalid_argument!(parameter, "must not be empty"));
    }

    Ok(value)
}

/// Fails when `value` is absent or contains no non-whitespace character,
/// otherwise passes the string through.
///
/// The empty string has no non-whitespace character and is rejected the
/// same way a blank one is.
///
/// # Errors
/// Returns [`Error::NullArgument`] when `value` is [`None`], or
/// [`Error::InvalidArgument`] when it is empty or whitespace-only
pub fn not_null_or_white_space<S>(value: Option<S>, parameter: &str) -> Result<S>
where
    S: AsRef<str>,
{
    let Some(value) = value else {
        return Err(Error::null(parameter));
    };

    if is_white_space(value.as_ref()) {
        return Err(invalid_argument!(parameter, "must contain a non-whitespace character"));
    }

    Ok(value)
}

/// Short-circuits on the first non-whitespace character.
pub(crate) fn is_white_space(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}
