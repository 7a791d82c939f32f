//! Restaurant Models

use crate::domain::restaurants::records::{RestaurantRecord, RestaurantUuid};

/// Restaurant Model
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub uuid: RestaurantUuid,
    pub name: String,
    pub is_open: bool,

    /// Free-form opening hours, shown to customers when the restaurant is closed.
    pub opening_hours: String,
}

impl From<RestaurantRecord> for Restaurant {
    fn from(record: RestaurantRecord) -> Self {
        Self {
            uuid: record.uuid,
            name: record.name,
            is_open: record.is_open,
            opening_hours: record.opening_hours,
        }
    }
}
