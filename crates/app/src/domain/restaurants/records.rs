//! Restaurant Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Restaurant UUID
pub type RestaurantUuid = TypedUuid<RestaurantRecord>;

/// Restaurant Record
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRecord {
    pub uuid: RestaurantUuid,
    pub name: String,
    pub is_open: bool,
    pub opening_hours: String,
    pub created_at: Timestamp,
}
