//! Optional-value guards
//!
//! Checks for values that may be absent ([`Option`]) and for value types
//! that must differ from their [`Default`] state. Every check returns the
//! validated value, so a guard can sit inside an assignment.

use crate::{Error, Result};

/// Fails when `value` is [`None`], otherwise unwraps it.
///
/// # Arguments
/// * 'value'     - The value to be verified
/// * 'parameter' - Diagnostic label for the failing argument
///
/// # Errors
/// Returns [`Error::NullArgument`] when `value` is [`None`]
///
/// # Examples
///
/// ```rust
/// use guardpost::require::value;
///
/// let endpoint = value::not_null(Some("localhost:9000"), "endpoint")?;
/// assert_eq!(endpoint, "localhost:9000");
/// # Ok::<(), guardpost::Error>(())
/// ```
pub fn not_null<T>(value: Option<T>, parameter: &str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(Error::null(parameter)),
    }
}

/// Fails when `value` equals the type's default, otherwise passes it
/// through.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `value == T::default()`
pub fn not_default<T>(value: T, parameter: &str) -> Result<T>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        return Err(invalid_argument!(parameter, "must not equal the default value"));
    }

    Ok(value)
}

/// Composition of [`not_null`] and [`not_default`]: the value must be
/// present and must differ from the default. Presence is checked first.
///
/// # Errors
/// Returns [`Error::NullArgument`] when `value` is [`None`], or
/// [`Error::InvalidArgument`] when the unwrapped value equals the default
pub fn not_null_or_default<T>(value: Option<T>, parameter: &str) -> Result<T>
where
    T: Default + PartialEq,
{
    let value = not_null(value, parameter)?;
    not_default(value, parameter)
}
