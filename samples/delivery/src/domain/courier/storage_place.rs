//! Storage place entity.
//!
//! A compartment of a courier's transport (a bag, a trunk) that holds at most
//! one order at a time.

use domain_kernel::ddd::Entity;
use domain_kernel::errs::{Error, Guard, Result, UnitResult};
use domain_kernel::{combine_guards, impl_entity_identity};
use uuid::Uuid;

/// A single-order compartment with a fixed capacity.
///
/// Identity is a random UUID assigned at creation; two storage places with the
/// same name and volume are still different places.
///
/// # Examples
///
/// ```rust
/// use delivery::domain::StoragePlace;
/// use uuid::Uuid;
///
/// let mut backpack = StoragePlace::create("backpack", 20).get_value_or_throw();
/// let order_id = Uuid::new_v4();
///
/// assert!(backpack.store(order_id, 10).is_success());
/// assert!(backpack.is_occupied());
///
/// assert!(backpack.clear(order_id).is_success());
/// assert!(!backpack.is_occupied());
/// ```
#[derive(Debug, Clone)]
pub struct StoragePlace {
    id: Uuid,
    name: String,
    total_volume: i32,
    order_id: Option<Uuid>,
}

impl StoragePlace {
    /// Smallest capacity a storage place may have.
    pub const MIN_TOTAL_VOLUME: i32 = 1;

    /// Creates an empty storage place with a fresh id.
    ///
    /// # Errors
    ///
    /// Fails with `value.is.required` for a blank name, then with
    /// `value.must.be.greater.or.equal` when `total_volume` is below
    /// [`MIN_TOTAL_VOLUME`](Self::MIN_TOTAL_VOLUME).
    pub fn create(name: &str, total_volume: i32) -> Result<Self> {
        let violation = combine_guards!(
            Guard::against_null_or_empty(name, "name"),
            Guard::against_less_than(total_volume, Self::MIN_TOTAL_VOLUME, "total_volume"),
        );
        violation.map_or_else(
            || {
                Result::success(Self {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    total_volume,
                    order_id: None,
                })
            },
            Result::failure,
        )
    }

    /// The storage place's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capacity of the storage place.
    pub const fn total_volume(&self) -> i32 {
        self.total_volume
    }

    /// Id of the stored order, if any.
    pub const fn order_id(&self) -> Option<Uuid> {
        self.order_id
    }

    /// Returns `true` while an order is stored.
    pub const fn is_occupied(&self) -> bool {
        self.order_id.is_some()
    }

    /// Returns `true` if the place is empty and `volume` fits.
    pub const fn can_store(&self, volume: i32) -> bool {
        self.order_id.is_none() && volume <= self.total_volume
    }

    /// Puts an order of `volume` into the place.
    ///
    /// # Errors
    ///
    /// Checked in order:
    ///
    /// - `already.contains.another.order` when the place is occupied
    /// - `value.is.required` when `order_id` is the nil UUID
    /// - `value.is.out.of.range` when `volume` is outside `[1, total_volume]`
    pub fn store(&mut self, order_id: Uuid, volume: i32) -> UnitResult {
        if self.is_occupied() {
            return UnitResult::failure(Error::new(
                "already.contains.another.order",
                "The storage location already contains another order",
            ));
        }
        let violation = combine_guards!(
            Guard::against_null_or_empty_uuid(order_id, "order_id"),
            Guard::against_out_of_range(volume, Self::MIN_TOTAL_VOLUME, self.total_volume, "volume"),
        );
        if let Some(error) = violation {
            return UnitResult::failure(error);
        }

        self.order_id = Some(order_id);
        UnitResult::success()
    }

    /// Takes the order with `order_id` out of the place.
    ///
    /// # Errors
    ///
    /// Fails with `value.is.required` when `order_id` is the nil UUID, and with
    /// `order.id.does.not.match` when the place is empty or holds another order.
    pub fn clear(&mut self, order_id: Uuid) -> UnitResult {
        if let Some(error) = Guard::against_null_or_empty_uuid(order_id, "order_id") {
            return UnitResult::failure(error);
        }
        if self.order_id != Some(order_id) {
            return UnitResult::failure(Error::new(
                "order.id.does.not.match",
                "The order ID does not match the one stored in the storage place",
            ));
        }

        self.order_id = None;
        UnitResult::success()
    }
}

impl Entity for StoragePlace {
    type Id = Uuid;

    fn id(&self) -> Option<&Uuid> {
        Some(&self.id)
    }

    fn is_transient(&self) -> bool {
        self.id == Guard::EMPTY_UUID
    }
}

impl_entity_identity!(StoragePlace);
