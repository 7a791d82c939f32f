//! Product Models

use rust_decimal::Decimal;

use crate::domain::{
    products::records::{ProductRecord, ProductUuid},
    restaurants::records::RestaurantUuid,
};

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub name: String,
    pub price: Decimal,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            uuid: record.uuid,
            restaurant_uuid: record.restaurant_uuid,
            name: record.name,
            price: record.price,
        }
    }
}
