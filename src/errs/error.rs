//! The domain `Error` value and its wire format.
//!
//! An [`Error`] is an immutable pair of a machine-readable `code` and a
//! human-readable `message`. It travels inside [`Result`](super::Result) and
//! [`UnitResult`](super::UnitResult) and crosses process boundaries in the
//! `code||message` string form.
//!
//! # Examples
//!
//! ```rust
//! use domain_kernel::errs::Error;
//!
//! let error = Error::new("order.id.does.not.match", "Wrong order");
//! let wire = error.serialize();
//! assert_eq!(wire, "order.id.does.not.match||Wrong order");
//!
//! let restored = Error::deserialize(&wire).unwrap();
//! assert_eq!(restored, error);
//! ```

use std::str::FromStr;

use super::domain_error::DomainError;
use super::general_errors::GeneralErrors;
use super::invariant::DomainInvariantError;

/// Legacy transport message that older clients send instead of a serialized error.
const LEGACY_REQUIRED_BODY_MESSAGE: &str = "A non-empty request body is required.";

/// A structured domain error: a stable code plus a descriptive message.
///
/// Equality and hashing are structural over both fields.
///
/// # Examples
///
/// ```rust
/// use domain_kernel::errs::Error;
///
/// let error = Error::new("value.is.invalid", "Value 'abc' is invalid for zip");
/// assert_eq!(error.code(), "value.is.invalid");
/// assert_eq!(
///     error.to_string(),
///     "Error{code='value.is.invalid', message='Value 'abc' is invalid for zip'}"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Error{{code='{code}', message='{message}'}}")]
pub struct Error {
    code: String,
    message: String,
}

impl Error {
    /// Separator between code and message in the wire form.
    pub const SEPARATOR: &'static str = "||";

    /// Creates an error from a code and a message.
    ///
    /// Prefer the [`GeneralErrors`] factories for the common violation shapes.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns the machine-readable code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the error as `code||message`.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.wire_form()
    }

    /// Parses the `code||message` form.
    ///
    /// The code is everything before the first separator and the message is
    /// everything after it, so a message may itself contain `||`.
    ///
    /// The literal `A non-empty request body is required.` is accepted for
    /// backward compatibility with older clients and maps to
    /// [`GeneralErrors::value_is_required`] for the `serialized` field.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorFormatError`] when the input contains no separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::Error;
    ///
    /// let error = Error::deserialize("rule.violated||left||right").unwrap();
    /// assert_eq!(error.code(), "rule.violated");
    /// assert_eq!(error.message(), "left||right");
    ///
    /// assert!(Error::deserialize("no separator here").is_err());
    /// ```
    pub fn deserialize(serialized: &str) -> std::result::Result<Self, ErrorFormatError> {
        Self::parse_wire(serialized)
    }

    /// Escalates `error` into a [`DomainInvariantError`] fault when present.
    ///
    /// Intended for trust boundaries where validation is known to have
    /// happened already.
    ///
    /// # Panics
    ///
    /// Panics with `Domain invariant violated: ...` when `error` is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_kernel::errs::{Error, Guard};
    ///
    /// Error::throw_if(Guard::against_null_or_empty("backpack", "name"));
    /// ```
    pub fn throw_if(error: Option<Self>) {
        if let Some(error) = error {
            DomainInvariantError::new(error).raise();
        }
    }

    fn wire_form(&self) -> String {
        format!("{}{}{}", self.code, Self::SEPARATOR, self.message)
    }

    fn parse_wire(serialized: &str) -> std::result::Result<Self, ErrorFormatError> {
        if serialized == LEGACY_REQUIRED_BODY_MESSAGE {
            return Ok(GeneralErrors::value_is_required("serialized"));
        }

        serialized
            .split_once(Self::SEPARATOR)
            .map(|(code, message)| Self::new(code, message))
            .ok_or_else(|| ErrorFormatError {
                input: serialized.to_string(),
            })
    }
}

impl DomainError for Error {
    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl FromStr for Error {
    type Err = ErrorFormatError;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse_wire(string)
    }
}

/// The input was not a `code||message` string.
///
/// This is a format error, not a domain error: it signals a broken peer or a
/// corrupted payload rather than a business-rule violation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid error serialization: '{input}'")]
pub struct ErrorFormatError {
    input: String,
}

impl ErrorFormatError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.wire_form())
    }
}

#[cfg(feature = "serde")]
struct ErrorVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for ErrorVisitor {
    type Value = Error;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string of the form `code||message`")
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Error::parse_wire(value).map_err(E::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Error {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(ErrorVisitor)
    }
}
