//! Cart Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{
    carts::records::{CartLineRecord, CartLineUuid, CartRecord, CartUuid},
    products::models::Product,
};

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn from_records(record: CartRecord, lines: Vec<CartLineRecord>) -> Self {
        Self::with_lines(record.uuid, lines)
    }

    #[must_use]
    pub fn with_lines(uuid: CartUuid, lines: Vec<CartLineRecord>) -> Self {
        Self {
            uuid,
            lines: lines.into_iter().map(CartLine::from).collect(),
        }
    }

    /// Sum of `price × quantity` over every line; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of line quantities; zero for an empty cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart Line Model
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub uuid: CartLineUuid,
    pub product: Product,
    pub quantity: u32,
    pub created_at: Timestamp,
}

impl CartLine {
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

impl From<CartLineRecord> for CartLine {
    fn from(record: CartLineRecord) -> Self {
        Self {
            uuid: record.uuid,
            product: record.product.into(),
            quantity: record.quantity,
            created_at: record.created_at,
        }
    }
}
