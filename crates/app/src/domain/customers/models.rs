//! Customer Models

use crate::domain::{
    carts::models::Cart,
    customers::records::{CustomerRecord, CustomerUuid},
};

/// Customer Model, together with the current contents of their cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub uuid: CustomerUuid,
    pub address: String,
    pub postal_code: String,
    pub cart: Cart,
}

impl Customer {
    /// Assemble a customer from its record and an already loaded cart.
    #[must_use]
    pub fn from_record(record: CustomerRecord, cart: Cart) -> Self {
        Self {
            uuid: record.uuid,
            address: record.address,
            postal_code: record.postal_code,
            cart,
        }
    }
}
