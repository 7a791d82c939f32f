//! Order Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{
    customers::records::CustomerUuid,
    orders::records::{OrderStatus, OrderUuid},
    restaurants::records::RestaurantUuid,
};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub customer_uuid: CustomerUuid,
    pub restaurant_uuid: RestaurantUuid,

    /// Copied from the customer's profile at checkout time.
    pub delivery_address: String,

    /// Copied from the customer's profile at checkout time.
    pub postal_code: String,

    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}
