use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

macro_rules! invalid_argument {
    // Single string version
    ($parameter:expr, $msg:expr) => {
        crate::Error::invalid($parameter, $msg)
    };

    // Format string with arguments version
    ($parameter:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::invalid($parameter, format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all failures the
/// guard checks can report.
///
/// Every check selects its variant by failure cause, never by guarded type:
/// absence is always [`Error::NullArgument`], a present-but-malformed value
/// is [`Error::InvalidArgument`], and a numeric bound violation is
/// [`Error::OutOfRange`]. Absence takes precedence whenever a check tests
/// both.
///
/// # Error Categories
///
/// ## Argument Errors
/// - [`Error::NullArgument`] - A required value (or accessory) was absent
/// - [`Error::InvalidArgument`] - A present value failed a content predicate
/// - [`Error::OutOfRange`] - A value fell outside an allowed bound
///
/// ## Resource and I/O Errors
/// - [`Error::NotFound`] - A file-system entry did not exist at check time
/// - [`Error::Io`] - An underlying handle failed while being probed
///
/// ## Control Flow
/// - [`Error::Canceled`] - A cancellation signal fired during an async probe
///
/// # Examples
///
/// ```rust
/// use guardpost::{require, Error};
///
/// match require::string::not_null_or_empty(Some(""), "name") {
///     Ok(value) => println!("validated: {value}"),
///     Err(Error::NullArgument { parameter }) => eprintln!("{parameter} is missing"),
///     Err(Error::InvalidArgument { parameter, message }) => {
///         eprintln!("{parameter}: {message}");
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A required value was absent.
    ///
    /// Raised when a check receives [`None`] for a value whose presence is
    /// part of the contract. Always reported before any content check on
    /// the same argument.
    #[error("argument '{parameter}' must not be null")]
    NullArgument {
        /// Diagnostic label of the failing argument
        parameter: String,
    },

    /// A present value failed a structural or content predicate.
    ///
    /// Covers empty and whitespace-only strings, empty sequences, failed
    /// casts, wrong URI kinds, all-zero GUIDs, IEEE-754 special values,
    /// non-powers-of-two and failed caller-supplied conditions.
    #[error("argument '{parameter}' is invalid: {message}")]
    InvalidArgument {
        /// Diagnostic label of the failing argument
        parameter: String,
        /// What the value failed to satisfy
        message: String,
    },

    /// A value fell outside an allowed bound or comparison.
    ///
    /// Carries the offending value rendered to a string for diagnostics.
    #[error("argument '{parameter}' is out of range: {value}")]
    OutOfRange {
        /// Diagnostic label of the failing argument
        parameter: String,
        /// The offending value, rendered for display
        value: String,
    },

    /// A file-system entry did not exist when it was checked.
    ///
    /// Distinct from the argument errors: there is no single bad value, the
    /// named resource is missing. Existence is evaluated at call time only.
    #[error("'{}' does not exist", .path.display())]
    NotFound {
        /// The path that was probed
        path: PathBuf,
    },

    /// A cancellation signal fired while an asynchronous probe was
    /// suspended.
    ///
    /// Surfaced instead of a validation result so callers can tell an
    /// aborted check apart from a failed one.
    #[error("validation of '{parameter}' was canceled")]
    Canceled {
        /// Diagnostic label of the argument being validated
        parameter: String,
    },

    /// Handle I/O error.
    ///
    /// Wraps failures of the underlying handle while a check probed it,
    /// such as a stream that cannot report its length.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn null(parameter: &str) -> Self {
        tracing::trace!(parameter, "guard rejected a null argument");
        Error::NullArgument {
            parameter: parameter.to_string(),
        }
    }

    pub(crate) fn invalid(parameter: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::trace!(parameter, %message, "guard rejected an invalid argument");
        Error::InvalidArgument {
            parameter: parameter.to_string(),
            message,
        }
    }

    pub(crate) fn out_of_range(parameter: &str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        tracing::trace!(parameter, %value, "guard rejected an out-of-range argument");
        Error::OutOfRange {
            parameter: parameter.to_string(),
            value,
        }
    }

    pub(crate) fn not_found(path: &Path) -> Self {
        tracing::trace!(path = %path.display(), "guard rejected a missing path");
        Error::NotFound {
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn canceled(parameter: &str) -> Self {
        tracing::trace!(parameter, "guard was canceled before completion");
        Error::Canceled {
            parameter: parameter.to_string(),
        }
    }

    /// Returns the diagnostic label of the failing argument, when the
    /// variant carries one.
    ///
    /// [`Error::NotFound`] and [`Error::Io`] identify a resource rather
    /// than an argument and return [`None`].
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Error::NullArgument { parameter }
            | Error::InvalidArgument { parameter, .. }
            | Error::OutOfRange { parameter, .. }
            | Error::Canceled { parameter } => Some(parameter),
            Error::NotFound { .. } | Error::Io(_) => None,
        }
    }
}
