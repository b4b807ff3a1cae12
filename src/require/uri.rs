//! URI kind guards
//!
//! Classification checks on parsed [`Uri`] values. A URI is absolute when
//! it carries a scheme; everything else is a relative reference.

use http::Uri;

use crate::Result;

/// Fails when `value` carries no scheme and is therefore a relative
/// reference.
///
/// # Arguments
/// * 'value'     - The URI to be verified
/// * 'parameter' - Diagnostic label for the failing argument
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// the URI is relative
///
/// # Examples
///
/// ```rust
/// use guardpost::require::uri;
///
/// let endpoint: http::Uri = "https://example.org/health".parse().unwrap();
/// uri::is_absolute(&endpoint, "endpoint")?;
/// # Ok::<(), guardpost::Error>(())
/// ```
pub fn is_absolute(value: &Uri, parameter: &str) -> Result<()> {
    if value.scheme().is_none() {
        return Err(invalid_argument!(parameter, "must be an absolute URI"));
    }

    Ok(())
}

/// Fails when `value` carries a scheme and is therefore absolute.
///
/// # Errors
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// the URI is absolute
pub fn is_relative(value: &Uri, parameter: &str) -> Result<()> {
    if value.scheme().is_some() {
        return Err(invalid_argument!(parameter, "must be a relative URI"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn kind_checks_are_complementary() {
        let absolute: Uri = "https://example.org/a?q=1".parse().unwrap();
        let relative: Uri = "/a/b?q=1".parse().unwrap();

        assert!(is_absolute(&absolute, "uri").is_ok());
        assert!(is_relative(&relative, "uri").is_ok());

        let err = is_absolute(&relative, "uri").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));

        let err = is_relative(&absolute, "uri").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
