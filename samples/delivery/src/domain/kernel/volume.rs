//! Volume value object.

use std::fmt;

use domain_kernel::errs::{Guard, Result};

/// A positive amount of space, in abstract units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Volume {
    value: i32,
}

impl Volume {
    /// Smallest valid volume.
    pub const MIN_TOTAL_VOLUME: i32 = 1;

    /// Creates a volume.
    ///
    /// # Errors
    ///
    /// Fails with `value.must.be.greater.or.equal` when `value` is below
    /// [`MIN_TOTAL_VOLUME`](Self::MIN_TOTAL_VOLUME).
    pub fn create(value: i32) -> Result<Self> {
        match Guard::against_less_than(value, Self::MIN_TOTAL_VOLUME, "value") {
            Some(error) => Result::failure(error),
            None => Result::success(Self { value }),
        }
    }

    /// The raw amount.
    pub const fn value(&self) -> i32 {
        self.value
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.value)
    }
}
