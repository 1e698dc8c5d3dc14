//! Precondition checks that map invalid input to domain errors.
//!
//! Every check returns `Option<Error>`: `None` when the input passes, or the
//! matching [`GeneralErrors`] error when it does not. A missing value (`None`)
//! always fails the check.
//!
//! Constructors chain checks in a fixed left-to-right order so the reported
//! error is predictable. Use [`Guard::combine`] for checks that are already
//! evaluated, or the [`combine_guards!`](crate::combine_guards) macro to stop
//! evaluating at the first violation.

use std::fmt::{self, Display};

use uuid::Uuid;

use super::error::Error;
use super::general_errors::GeneralErrors;

mod sealed {
    pub trait Sealed {}
}

/// Scalar kinds accepted by the numeric bound checks.
///
/// The set is closed: integers, floating-point numbers, decimals (with the
/// `decimal` feature), strings and booleans. Other types are rejected at
/// compile time.
///
/// ```compile_fail
/// use domain_kernel::errs::Guard;
///
/// // Vec<i32> is not a Scalar
/// let _ = Guard::against_greater_than(vec![3], vec![2], "lengths");
/// ```
pub trait Scalar: PartialOrd + Display + sealed::Sealed {}

macro_rules! impl_scalar {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $scalar {}
            impl Scalar for $scalar {}
        )*
    };
}

impl_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, String,
);

#[cfg(feature = "decimal")]
impl_scalar!(rust_decimal::Decimal);

impl sealed::Sealed for &str {}
impl Scalar for &str {}

/// Renders a possibly missing value the way error messages expect.
struct Shown<'a, T>(Option<&'a T>);

impl<T: Display> Display for Shown<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = self.0 else {
            return formatter.write_str("None");
        };
        value.fmt(formatter)
    }
}

/// Stateless library of precondition checks.
///
/// # Examples
///
/// ```rust
/// use domain_kernel::errs::Guard;
///
/// assert!(Guard::against_out_of_range(5, 1, 10, "x").is_none());
///
/// let error = Guard::against_out_of_range(11, 1, 10, "x").unwrap();
/// assert_eq!(error.code(), "value.is.out.of.range");
///
/// // A missing value never passes
/// let error = Guard::against_out_of_range(None, 1, 10, "x").unwrap();
/// assert!(error.message().starts_with("Value None for x"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Guard;

impl Guard {
    /// The all-zero UUID, treated as "no identifier".
    pub const EMPTY_UUID: Uuid = Uuid::nil();

    /// Returns the first error in iteration order, or `None` if every check passed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::{Error, Guard};
    ///
    /// let first = Error::new("first", "1");
    /// let second = Error::new("second", "2");
    /// let combined = Guard::combine([None, Some(first.clone()), Some(second)]);
    /// assert_eq!(combined, Some(first));
    /// ```
    #[must_use]
    pub fn combine<I>(errors: I) -> Option<Error>
    where
        I: IntoIterator<Item = Option<Error>>,
    {
        errors.into_iter().flatten().next()
    }

    /// Fails with `value.is.required` when `value` is missing or blank after trimming.
    #[must_use]
    pub fn against_null_or_empty<'a>(
        value: impl Into<Option<&'a str>>,
        name: &str,
    ) -> Option<Error> {
        let blank = value.into().is_none_or(|text| text.trim().is_empty());
        blank.then(|| GeneralErrors::value_is_required(name))
    }

    /// Fails with `value.is.required` when `collection` is missing or has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::Guard;
    ///
    /// let items = vec![1, 2, 3];
    /// assert!(Guard::against_null_or_empty_collection(&items, "items").is_none());
    ///
    /// let empty: Vec<i32> = Vec::new();
    /// assert!(Guard::against_null_or_empty_collection(&empty, "items").is_some());
    /// ```
    #[must_use]
    pub fn against_null_or_empty_collection<'a, C>(
        collection: impl Into<Option<&'a C>>,
        name: &str,
    ) -> Option<Error>
    where
        C: ?Sized + 'a,
        &'a C: IntoIterator,
        <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
    {
        let empty = collection
            .into()
            .is_none_or(|collection| collection.into_iter().len() == 0);
        empty.then(|| GeneralErrors::value_is_required(name))
    }

    /// Fails with `value.is.required` when `value` is missing or the nil UUID.
    #[must_use]
    pub fn against_null_or_empty_uuid(value: impl Into<Option<Uuid>>, name: &str) -> Option<Error> {
        let empty = value.into().is_none_or(|uuid| uuid == Self::EMPTY_UUID);
        empty.then(|| GeneralErrors::value_is_required(name))
    }

    /// Fails with `value.must.be.less.than` when `value > max_value`.
    #[must_use]
    pub fn against_greater_than<T: Scalar>(
        value: impl Into<Option<T>>,
        max_value: T,
        name: &str,
    ) -> Option<Error> {
        let value = value.into();
        let violated = value.as_ref().is_none_or(|value| *value > max_value);
        violated.then(|| {
            GeneralErrors::value_must_be_less_than(name, Shown(value.as_ref()), max_value)
        })
    }

    /// Fails with `value.must.be.less.or.equal` when `value >= max_value`.
    #[must_use]
    pub fn against_greater_or_equal<T: Scalar>(
        value: impl Into<Option<T>>,
        max_value: T,
        name: &str,
    ) -> Option<Error> {
        let value = value.into();
        let violated = value.as_ref().is_none_or(|value| *value >= max_value);
        violated.then(|| {
            GeneralErrors::value_must_be_less_or_equal(name, Shown(value.as_ref()), max_value)
        })
    }

    /// Fails with `value.must.be.greater.or.equal` when `value < min_value`.
    #[must_use]
    pub fn against_less_than<T: Scalar>(
        value: impl Into<Option<T>>,
        min_value: T,
        name: &str,
    ) -> Option<Error> {
        let value = value.into();
        let violated = value.as_ref().is_none_or(|value| *value < min_value);
        violated.then(|| {
            GeneralErrors::value_must_be_greater_or_equal(name, Shown(value.as_ref()), min_value)
        })
    }

    /// Fails when `value <= min_value`.
    ///
    /// The violation is reported as `value.must.be.greater.or.equal`, the same
    /// code [`Guard::against_less_than`] uses, even though the bound here is
    /// exclusive. Existing clients match on this code.
    #[must_use]
    pub fn against_less_or_equal<T: Scalar>(
        value: impl Into<Option<T>>,
        min_value: T,
        name: &str,
    ) -> Option<Error> {
        let value = value.into();
        let violated = value.as_ref().is_none_or(|value| *value <= min_value);
        violated.then(|| {
            GeneralErrors::value_must_be_greater_or_equal(name, Shown(value.as_ref()), min_value)
        })
    }

    /// Fails with `value.is.out.of.range` when `value` lies outside `[min_value, max_value]`.
    #[must_use]
    pub fn against_out_of_range<T: Scalar>(
        value: impl Into<Option<T>>,
        min_value: T,
        max_value: T,
        name: &str,
    ) -> Option<Error> {
        let value = value.into();
        let violated = value
            .as_ref()
            .is_none_or(|value| *value < min_value || *value > max_value);
        violated.then(|| {
            GeneralErrors::value_is_out_of_range(
                name,
                Shown(value.as_ref()),
                min_value,
                max_value,
            )
        })
    }
}

/// Runs guard checks left to right and stops at the first violation.
///
/// Unlike [`Guard::combine`], later checks are not evaluated once one has
/// failed. Evaluates to `Option<Error>`.
///
/// # Examples
///
/// ```rust
/// use domain_kernel::combine_guards;
/// use domain_kernel::errs::Guard;
///
/// let mut evaluated = Vec::new();
/// let violation = combine_guards!(
///     { evaluated.push("name"); Guard::against_null_or_empty("", "name") },
///     { evaluated.push("volume"); Guard::against_less_than(0, 1, "volume") },
/// );
///
/// assert_eq!(violation.unwrap().code(), "value.is.required");
/// assert_eq!(evaluated, vec!["name"]);
/// ```
#[macro_export]
macro_rules! combine_guards {
    ($($check:expr),+ $(,)?) => {{
        let mut violation = ::core::option::Option::None;
        $(
            if violation.is_none() {
                violation = $check;
            }
        )+
        violation
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("backpack"), false)]
    #[case(Some(""), true)]
    #[case(Some("  \t"), true)]
    #[case(None, true)]
    fn test_against_null_or_empty(#[case] value: Option<&str>, #[case] fails: bool) {
        let result = Guard::against_null_or_empty(value, "name");
        assert_eq!(result.is_some(), fails);
        if let Some(error) = result {
            assert_eq!(error.code(), "value.is.required");
        }
    }

    #[rstest]
    fn test_against_null_or_empty_collection() {
        let missing: Option<&Vec<u8>> = None;
        assert!(Guard::against_null_or_empty_collection(missing, "items").is_some());
        assert!(Guard::against_null_or_empty_collection(&Vec::<u8>::new(), "items").is_some());
        assert!(Guard::against_null_or_empty_collection(&[1_u8][..], "items").is_none());
    }

    #[rstest]
    fn test_against_null_or_empty_uuid() {
        assert!(Guard::against_null_or_empty_uuid(Guard::EMPTY_UUID, "order_id").is_some());
        assert!(Guard::against_null_or_empty_uuid(None, "order_id").is_some());
        assert!(Guard::against_null_or_empty_uuid(Uuid::new_v4(), "order_id").is_none());
    }

    #[rstest]
    #[case(4, None)]
    #[case(5, None)]
    #[case(6, Some("value.must.be.less.than"))]
    fn test_against_greater_than(#[case] value: i32, #[case] expected: Option<&str>) {
        let result = Guard::against_greater_than(value, 5, "value");
        assert_eq!(result.as_ref().map(Error::code), expected);
    }

    #[rstest]
    #[case(4, None)]
    #[case(5, Some("value.must.be.less.or.equal"))]
    fn test_against_greater_or_equal(#[case] value: i32, #[case] expected: Option<&str>) {
        let result = Guard::against_greater_or_equal(value, 5, "value");
        assert_eq!(result.as_ref().map(Error::code), expected);
    }

    #[rstest]
    #[case(5, None)]
    #[case(4, Some("value.must.be.greater.or.equal"))]
    fn test_against_less_than(#[case] value: i32, #[case] expected: Option<&str>) {
        let result = Guard::against_less_than(value, 5, "value");
        assert_eq!(result.as_ref().map(Error::code), expected);
    }

    #[rstest]
    #[case(6, None)]
    #[case(5, Some("value.must.be.greater.or.equal"))]
    fn test_against_less_or_equal_reports_greater_or_equal(
        #[case] value: i32,
        #[case] expected: Option<&str>,
    ) {
        let result = Guard::against_less_or_equal(value, 5, "value");
        assert_eq!(result.as_ref().map(Error::code), expected);
    }

    #[rstest]
    fn test_against_out_of_range_message() {
        let error = Guard::against_out_of_range(11, 1, 10, "y").unwrap();
        assert_eq!(
            error.message(),
            "Value 11 for y is out of range. Min value is 1, max value is 10."
        );
    }

    #[rstest]
    fn test_missing_value_always_fails() {
        let error = Guard::against_greater_than(None, 5_u8, "value").unwrap();
        assert_eq!(error.message(), "The value of value (None) must be less than 5.");
    }

    #[rstest]
    fn test_scalar_kinds() {
        assert!(Guard::against_out_of_range(1.5_f64, 1.0, 2.0, "ratio").is_none());
        assert!(Guard::against_less_than("b", "a", "letter").is_none());
        assert!(Guard::against_greater_than(true, false, "flag").is_some());
        assert!(
            Guard::against_greater_or_equal(String::from("abc"), String::from("abd"), "text")
                .is_none()
        );
    }

    #[cfg(feature = "decimal")]
    #[rstest]
    fn test_decimal_scalar() {
        use rust_decimal::Decimal;

        let error =
            Guard::against_less_than(Decimal::new(99, 2), Decimal::ONE, "price").unwrap();
        assert_eq!(
            error.message(),
            "The value of price (0.99) must be greater than or equal to 1."
        );
    }

    #[rstest]
    fn test_combine_first_error_wins() {
        let first = Error::new("e1", "first");
        let second = Error::new("e2", "second");
        let combined = Guard::combine([None, Some(first.clone()), Some(second)]);
        assert_eq!(combined, Some(first));
    }

    #[rstest]
    fn test_combine_all_pass() {
        assert_eq!(Guard::combine([None, None]), None);
        assert_eq!(Guard::combine(std::iter::empty()), None);
    }

    #[rstest]
    fn test_combine_guards_short_circuits() {
        let mut calls = 0;
        let violation = combine_guards!(
            Guard::against_out_of_range(0, 1, 10, "x"),
            {
                calls += 1;
                Guard::against_out_of_range(0, 1, 10, "y")
            },
        );
        assert_eq!(calls, 0);
        assert!(violation.unwrap().message().contains("for x"));
    }

    #[rstest]
    fn test_combine_guards_all_pass() {
        let violation = combine_guards!(
            Guard::against_null_or_empty("a", "name"),
            Guard::against_less_than(3, 1, "volume"),
        );
        assert!(violation.is_none());
    }
}
