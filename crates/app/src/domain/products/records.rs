//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::restaurants::records::RestaurantUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub name: String,
    pub price: Decimal,
    pub created_at: Timestamp,
}
