//! Cart Data

use jiff::Timestamp;

use crate::domain::{
    carts::records::{CartLineUuid, CartUuid},
    products::records::ProductUuid,
};

/// New Cart Line Data
///
/// Used when the product is not in the cart yet. When it is, the existing line is
/// incremented and `uuid`/`created_at` are discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub uuid: CartLineUuid,
    pub cart_uuid: CartUuid,
    pub product_uuid: ProductUuid,
    pub created_at: Timestamp,
}
