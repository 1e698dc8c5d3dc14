//! Factories for the standard violation shapes.

use std::fmt::Display;

use super::error::Error;

/// Catalogue of standardized domain errors.
///
/// Every factory takes the name of the offending field and produces an
/// [`Error`] with a stable code. The name is part of the message, so an empty
/// or blank name is guard misuse and panics instead of producing a domain
/// error.
///
/// # Examples
///
/// ```rust
/// use domain_kernel::errs::GeneralErrors;
///
/// let error = GeneralErrors::value_is_out_of_range("x", 0, 1, 10);
/// assert_eq!(error.code(), "value.is.out.of.range");
/// assert_eq!(
///     error.message(),
///     "Value 0 for x is out of range. Min value is 1, max value is 10."
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GeneralErrors;

impl GeneralErrors {
    /// `record.not.found`: no record with `id` exists.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn not_found(name: &str, id: impl Display) -> Error {
        require_name(name);
        Error::new(
            "record.not.found",
            format!("Record not found. Name: {name}, id: {id}"),
        )
    }

    /// `value.is.invalid`: `value` is not acceptable for `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn value_is_invalid(name: &str, value: impl Display) -> Error {
        require_name(name);
        Error::new(
            "value.is.invalid",
            format!("Value '{value}' is invalid for {name}"),
        )
    }

    /// `value.is.required`: `name` is missing or empty.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn value_is_required(name: &str) -> Error {
        require_name(name);
        Error::new("value.is.required", format!("Value is required for {name}"))
    }

    /// `invalid.string.length`: the text in `name` has an unacceptable length.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn invalid_length(name: &str) -> Error {
        require_name(name);
        Error::new("invalid.string.length", format!("Invalid {name} length"))
    }

    /// `collection.is.too.small`: the collection holds fewer than `min_size` items.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn collection_is_too_small(name: &str, min_size: usize, current_size: usize) -> Error {
        require_name(name);
        Error::new(
            "collection.is.too.small",
            format!(
                "The collection {name} must contain {min_size} items or more. \
                 It contains {current_size} items."
            ),
        )
    }

    /// `collection.is.too.large`: the collection holds more than `max_size` items.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn collection_is_too_large(name: &str, max_size: usize, current_size: usize) -> Error {
        require_name(name);
        Error::new(
            "collection.is.too.large",
            format!(
                "The collection {name} must contain {max_size} items or fewer. \
                 It contains {current_size} items."
            ),
        )
    }

    /// `value.is.out.of.range`: `value` lies outside `[min_value, max_value]`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn value_is_out_of_range(
        name: &str,
        value: impl Display,
        min_value: impl Display,
        max_value: impl Display,
    ) -> Error {
        require_name(name);
        Error::new(
            "value.is.out.of.range",
            format!(
                "Value {value} for {name} is out of range. \
                 Min value is {min_value}, max value is {max_value}."
            ),
        )
    }

    /// `value.must.be.greater.than`: `value` must exceed `min_value`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn value_must_be_greater_than(
        name: &str,
        value: impl Display,
        min_value: impl Display,
    ) -> Error {
        require_name(name);
        Error::new(
            "value.must.be.greater.than",
            format!("The value of {name} ({value}) must be greater than {min_value}."),
        )
    }

    /// `value.must.be.greater.or.equal`: `value` must be at least `min_value`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn value_must_be_greater_or_equal(
        name: &str,
        value: impl Display,
        min_value: impl Display,
    ) -> Error {
        require_name(name);
        Error::new(
            "value.must.be.greater.or.equal",
            format!("The value of {name} ({value}) must be greater than or equal to {min_value}."),
        )
    }

    /// `value.must.be.less.than`: `value` must stay below `max_value`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn value_must_be_less_than(
        name: &str,
        value: impl Display,
        max_value: impl Display,
    ) -> Error {
        require_name(name);
        Error::new(
            "value.must.be.less.than",
            format!("The value of {name} ({value}) must be less than {max_value}."),
        )
    }

    /// `value.must.be.less.or.equal`: `value` must be at most `max_value`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    #[must_use]
    pub fn value_must_be_less_or_equal(
        name: &str,
        value: impl Display,
        max_value: impl Display,
    ) -> Error {
        require_name(name);
        Error::new(
            "value.must.be.less.or.equal",
            format!("The value of {name} ({value}) must be less than or equal to {max_value}."),
        )
    }
}

fn require_name(name: &str) {
    assert!(!name.trim().is_empty(), "Name must not be null or empty");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_not_found() {
        let error = GeneralErrors::not_found("order", 42);
        assert_eq!(error.code(), "record.not.found");
        assert_eq!(error.message(), "Record not found. Name: order, id: 42");
    }

    #[rstest]
    fn test_value_is_invalid() {
        let error = GeneralErrors::value_is_invalid("zip", "abc");
        assert_eq!(error.code(), "value.is.invalid");
        assert_eq!(error.message(), "Value 'abc' is invalid for zip");
    }

    #[rstest]
    fn test_invalid_length() {
        let error = GeneralErrors::invalid_length("street");
        assert_eq!(error.code(), "invalid.string.length");
        assert_eq!(error.message(), "Invalid street length");
    }

    #[rstest]
    fn test_collection_bounds() {
        let small = GeneralErrors::collection_is_too_small("items", 2, 1);
        assert_eq!(small.code(), "collection.is.too.small");
        assert_eq!(
            small.message(),
            "The collection items must contain 2 items or more. It contains 1 items."
        );

        let large = GeneralErrors::collection_is_too_large("items", 3, 5);
        assert_eq!(large.code(), "collection.is.too.large");
        assert_eq!(
            large.message(),
            "The collection items must contain 3 items or fewer. It contains 5 items."
        );
    }

    #[rstest]
    fn test_comparison_messages() {
        assert_eq!(
            GeneralErrors::value_must_be_greater_than("age", 3, 5).message(),
            "The value of age (3) must be greater than 5."
        );
        assert_eq!(
            GeneralErrors::value_must_be_greater_or_equal("age", 3, 5).message(),
            "The value of age (3) must be greater than or equal to 5."
        );
        assert_eq!(
            GeneralErrors::value_must_be_less_than("age", 9, 5).message(),
            "The value of age (9) must be less than 5."
        );
        assert_eq!(
            GeneralErrors::value_must_be_less_or_equal("age", 9, 5).message(),
            "The value of age (9) must be less than or equal to 5."
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[should_panic(expected = "Name must not be null or empty")]
    fn test_blank_name_panics(#[case] name: &str) {
        let _ = GeneralErrors::value_is_required(name);
    }
}
