//! Numeric comparison guards
//!
//! Range and ordering checks implemented once, generically, for every
//! ordered type: all integer widths, both floating-point widths, [`char`],
//! calendar types, and any third-party numeric type that implements
//! [`PartialOrd`] and [`Display`](std::fmt::Display).
//!
//! The boundary test of [`in_between`] is the literal formula
//! `(min <= value) != (value <= max)`. For `min <= max` this is an ordinary
//! inclusive range check. Callers that swap the bounds get the inverted
//! behavior of that formula, which is preserved as-is; the unit tests pin it
//! down.

use std::fmt::Display;

use crate::{Error, Result};

/// Fails unless `min_value <= value <= max_value` (inclusive both ends),
/// otherwise passes the value through.
///
/// The implemented boundary test is `(min_value <= value) != (value <=
/// max_value)`. With `min_value > max_value` the test inverts: interior
/// values pass and exterior values fail.
///
/// # Arguments
/// * 'value'     - The value to be verified
/// * 'min_value' - Lower bound of the comparison
/// * 'max_value' - Upper bound of the comparison
/// * 'parameter' - Diagnostic label for the failing argument
///
/// # Errors
/// Returns [`Error::OutOfRange`] carrying the rendered value
///
/// # Examples
///
/// ```rust
/// use guardpost::require::numeric;
///
/// let port = numeric::in_between(8080u16, 1024, 49151, "port")?;
/// assert_eq!(port, 8080);
/// # Ok::<(), guardpost::Error>(())
/// ```
pub fn in_between<T>(value: T, min_value: T, max_value: T, parameter: &str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if (min_value <= value) != (value <= max_value) {
        return Err(Error::out_of_range(parameter, &value));
    }

    Ok(value)
}

/// Negation of the interior check of [`in_between`]: fails when `value`
/// falls inside the same inclusive interval.
///
/// # Errors
/// Returns [`Error::OutOfRange`] carrying the rendered value
pub fn not_between<T>(value: T, min_value: T, max_value: T, parameter: &str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if (min_value <= value) == (value <= max_value) {
        return Err(Error::out_of_range(parameter, &value));
    }

    Ok(value)
}

/// Fails unless `value > compare_value`.
///
/// # Errors
/// Returns [`Error::OutOfRange`] when `value <= compare_value`
pub fn greater_than<T>(value: T, compare_value: T, parameter: &str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if value <= compare_value {
        return Err(Error::out_of_range(parameter, &value));
    }

    Ok(value)
}

/// Fails unless `value >= compare_value`.
///
/// # Errors
/// Returns [`Error::OutOfRange`] when `value < compare_value`
pub fn greater_than_or_equal<T>(value: T, compare_value: T, parameter: &str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if value < compare_value {
        return Err(Error::out_of_range(parameter, &value));
    }

    Ok(value)
}

/// Fails unless `value < compare_value`.
///
/// # Errors
/// Returns [`Error::OutOfRange`] when `value >= compare_value`
pub fn less_than<T>(value: T, compare_value: T, parameter: &str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if value >= compare_value {
        return Err(Error::out_of_range(parameter, &value));
    }

    Ok(value)
}

/// Fails unless `value <= compare_value`.
///
/// # Errors
/// Returns [`Error::OutOfRange`] when `value > compare_value`
pub fn less_than_or_equal<T>(value: T, compare_value: T, parameter: &str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if value > compare_value {
        return Err(Error::out_of_range(parameter, &value));
    }

    Ok(value)
}

/// Exact power-of-two classification for the primitive integer widths.
///
/// Implemented for every unsigned and signed width, including the
/// pointer-sized types. Signed values qualify only when positive.
pub trait Pow2 {
    /// Returns `true` when the value is an exact power of two.
    fn is_pow2(&self) -> bool;
}

macro_rules! impl_pow2_unsigned {
    ($($ty:ty),+ $(,)?) => {
        $(impl Pow2 for $ty {
            fn is_pow2(&self) -> bool {
                self.is_power_of_two()
            }
        })+
    };
}

macro_rules! impl_pow2_signed {
    ($($ty:ty),+ $(,)?) => {
        $(impl Pow2 for $ty {
            fn is_pow2(&self) -> bool {
                *self > 0 && (*self & (*self - 1)) == 0
            }
        })+
    };
}

impl_pow2_unsigned!(u8, u16, u32, u64, u128, usize);
impl_pow2_signed!(i8, i16, i32, i64, i128, isize);

/// Fails unless `value` is an exact power of two, otherwise passes it
/// through.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `value` has zero or more than
/// one bit set, or is non-positive
///
/// # Examples
///
/// ```rust
/// use guardpost::require::numeric;
///
/// assert!(numeric::not_pow2(64u32, "alignment").is_ok());
/// assert!(numeric::not_pow2(63u32, "alignment").is_err());
/// ```
pub fn not_pow2<T>(value: T, parameter: &str) -> Result<T>
where
    T: Pow2 + Display,
{
    if !value.is_pow2() {
        return Err(invalid_argument!(parameter, "{} is not a power of two", value));
    }

    Ok(value)
}
