//! Checkout rules.

use crate::{
    domain::{
        carts::models::Cart,
        checkout::errors::{CheckoutConflict, OrdersServiceError},
        restaurants::{models::Restaurant, records::RestaurantUuid},
    },
    uuids::TypedUuid,
};

/// Reject identifiers that were never supplied.
pub(crate) fn require<T>(
    uuid: TypedUuid<T>,
    name: &'static str,
) -> Result<TypedUuid<T>, OrdersServiceError> {
    if uuid.is_nil() {
        return Err(OrdersServiceError::InvalidInput(name));
    }

    Ok(uuid)
}

/// The one restaurant every line of the cart is ordered from.
pub(crate) fn single_restaurant(cart: &Cart) -> Result<RestaurantUuid, CheckoutConflict> {
    let mut restaurant = None;

    for line in &cart.lines {
        match restaurant {
            None => restaurant = Some(line.product.restaurant_uuid),
            Some(uuid) if uuid != line.product.restaurant_uuid => {
                return Err(CheckoutConflict::MultipleRestaurants);
            }
            Some(_) => {}
        }
    }

    restaurant.ok_or(CheckoutConflict::EmptyCart)
}

pub(crate) fn ensure_open(restaurant: &Restaurant) -> Result<(), CheckoutConflict> {
    if restaurant.is_open {
        return Ok(());
    }

    Err(CheckoutConflict::RestaurantClosed {
        name: restaurant.name.clone(),
        opening_hours: restaurant.opening_hours.clone(),
    })
}
