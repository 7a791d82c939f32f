//! Order Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{
    customers::records::CustomerUuid,
    orders::records::{OrderRecord, OrderStatus, OrderUuid},
    restaurants::records::RestaurantUuid,
};

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub customer_uuid: CustomerUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub delivery_address: String,
    pub postal_code: String,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Self {
            uuid: record.uuid,
            customer_uuid: record.customer_uuid,
            restaurant_uuid: record.restaurant_uuid,
            delivery_address: record.delivery_address,
            postal_code: record.postal_code,
            total_amount: record.total_amount,
            status: record.status,
            created_at: record.created_at,
        }
    }
}
