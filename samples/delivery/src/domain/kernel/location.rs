//! Location value object.
//!
//! A cell on the 10x10 delivery grid. Both coordinates are in `[1, 10]`.

use std::fmt;

use domain_kernel::ddd::ValueObject;
use domain_kernel::errs::{Guard, Result};
use domain_kernel::{combine_guards, impl_value_object};

/// A validated position on the delivery grid.
///
/// Two locations with the same coordinates are the same location.
///
/// # Examples
///
/// ```rust
/// use delivery::domain::Location;
///
/// let depot = Location::create(1, 1).get_value_or_throw();
/// let customer = Location::create(4, 5).get_value_or_throw();
/// assert_eq!(depot.distance_to(&customer), 7);
///
/// let outside = Location::create(0, 1);
/// assert_eq!(outside.error().code(), "value.is.out.of.range");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Location {
    x: i32,
    y: i32,
}

impl Location {
    /// Smallest valid coordinate.
    pub const MIN_VALUE: i32 = 1;
    /// Largest valid coordinate.
    pub const MAX_VALUE: i32 = 10;

    /// Creates a location, checking `x` before `y`.
    ///
    /// # Errors
    ///
    /// Fails with `value.is.out.of.range` for the first coordinate outside
    /// `[MIN_VALUE, MAX_VALUE]`.
    pub fn create(x: i32, y: i32) -> Result<Self> {
        let violation = combine_guards!(
            Guard::against_out_of_range(x, Self::MIN_VALUE, Self::MAX_VALUE, "x"),
            Guard::against_out_of_range(y, Self::MIN_VALUE, Self::MAX_VALUE, "y"),
        );
        violation.map_or_else(|| Result::success(Self { x, y }), Result::failure)
    }

    /// Horizontal coordinate.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate.
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Number of grid steps between the two locations (Manhattan distance).
    pub const fn distance_to(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl ValueObject for Location {
    type Components = (i32, i32);

    fn equality_components(&self) -> Self::Components {
        (self.x, self.y)
    }
}

impl_value_object!(Location);

impl fmt::Display for Location {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Location(x={}, y={})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(10, 10)]
    #[case(3, 7)]
    fn create_accepts_grid_cells(#[case] x: i32, #[case] y: i32) {
        let location = Location::create(x, y).get_value_or_throw();
        assert_eq!((location.x(), location.y()), (x, y));
    }

    #[rstest]
    fn create_rejects_x_below_range() {
        let result = Location::create(0, 1);
        assert_eq!(result.error().code(), "value.is.out.of.range");
        assert_eq!(
            result.error().message(),
            "Value 0 for x is out of range. Min value is 1, max value is 10."
        );
    }

    #[rstest]
    fn create_checks_x_before_y() {
        let result = Location::create(11, 0);
        assert!(result.error().message().contains(" for x "));
    }

    #[rstest]
    fn create_rejects_y_above_range() {
        let result = Location::create(5, 11);
        assert_eq!(
            result.error().message(),
            "Value 11 for y is out of range. Min value is 1, max value is 10."
        );
    }

    #[rstest]
    #[case((1, 1), (1, 1), 0)]
    #[case((1, 1), (10, 10), 18)]
    #[case((2, 6), (4, 9), 5)]
    fn distance_is_manhattan(#[case] from: (i32, i32), #[case] to: (i32, i32), #[case] expected: u32) {
        let from = Location::create(from.0, from.1).get_value_or_throw();
        let to = Location::create(to.0, to.1).get_value_or_throw();
        assert_eq!(from.distance_to(&to), expected);
        assert_eq!(to.distance_to(&from), expected);
    }

    #[rstest]
    fn equality_follows_coordinates() {
        let left = Location::create(2, 3).get_value_or_throw();
        assert_eq!(left, Location::create(2, 3).get_value_or_throw());
        assert_ne!(left, Location::create(3, 2).get_value_or_throw());
        assert!(left < Location::create(3, 1).get_value_or_throw());
    }

    #[rstest]
    fn display_shows_coordinates() {
        let location = Location::create(2, 3).get_value_or_throw();
        assert_eq!(location.to_string(), "Location(x=2, y=3)");
    }
}
