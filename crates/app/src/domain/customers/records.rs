//! Customer Records

use jiff::Timestamp;

use crate::{domain::carts::records::CartUuid, uuids::TypedUuid};

/// Customer UUID
pub type CustomerUuid = TypedUuid<CustomerRecord>;

/// Customer Record
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub uuid: CustomerUuid,

    /// The single cart owned by this customer.
    pub cart_uuid: CartUuid,

    pub address: String,
    pub postal_code: String,
    pub created_at: Timestamp,
}
