//! Cart Records

use jiff::Timestamp;

use crate::{domain::products::records::ProductRecord, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub created_at: Timestamp,
}

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLineRecord>;

/// Cart Line Record, joined with the product it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineRecord {
    pub uuid: CartLineUuid,
    pub cart_uuid: CartUuid,
    pub product: ProductRecord,

    /// Always at least one.
    pub quantity: u32,

    pub created_at: Timestamp,
}
