//! The cart transition function.

use crate::cart::{CartState, Intent, LineItem};
use crate::types::{ProductId, Quantity};

/// Apply an intent to a cart, returning the next state.
///
/// Pure and total: the input is never modified, nothing is logged or stored,
/// and intents aimed at a product that is not in the cart return an equal
/// state.
#[must_use]
pub fn reduce(state: &CartState, intent: Intent) -> CartState {
    match intent {
        Intent::AddItem { product, quantity } => {
            let quantity = Quantity::or_one(quantity);
            if state.contains(product.id) {
                // Existing lines keep their original title, price, and image.
                update_quantity(state, product.id, |current| {
                    Some(current.saturating_add(quantity))
                })
            } else {
                let mut items = state.items().to_vec();
                items.push(LineItem::from_snapshot(product, quantity));
                CartState::from_items(items)
            }
        }
        Intent::RemoveItem(id) => CartState::from_items(
            state
                .items()
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
        ),
        Intent::Increment(id) => update_quantity(state, id, |current| Some(current.incremented())),
        // Floors at one; only RemoveItem takes a line out of the cart.
        Intent::Decrement(id) => update_quantity(state, id, Quantity::decremented),
        Intent::ClearCart => CartState::new(),
        Intent::LoadCart(items) => CartState::from_items(items),
    }
}

/// Rebuild the state with one line's quantity changed in place.
///
/// A `None` from `change` leaves the line as it was.
fn update_quantity(
    state: &CartState,
    id: ProductId,
    change: impl Fn(Quantity) -> Option<Quantity>,
) -> CartState {
    CartState::from_items(
        state
            .items()
            .iter()
            .map(|item| {
                if item.id != id {
                    return item.clone();
                }
                change(item.quantity).map_or_else(
                    || item.clone(),
                    |quantity| LineItem {
                        quantity,
                        ..item.clone()
                    },
                )
            })
            .collect(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{Price, ProductSnapshot};

    fn snapshot(id: i32) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(1000),
            image: format!("{id}.png"),
        }
    }

    fn add(state: &CartState, id: i32, quantity: Option<u32>) -> CartState {
        reduce(
            state,
            Intent::AddItem {
                product: snapshot(id),
                quantity,
            },
        )
    }

    fn quantities(state: &CartState) -> Vec<(i32, u32)> {
        state
            .items()
            .iter()
            .map(|item| (item.id.get(), item.quantity.get()))
            .collect()
    }

    #[test]
    fn test_add_new_item_appends() {
        let state = add(&add(&CartState::new(), 1, Some(2)), 2, None);
        assert_eq!(quantities(&state), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_add_zero_quantity_counts_as_one() {
        let state = add(&CartState::new(), 1, Some(0));
        assert_eq!(quantities(&state), vec![(1, 1)]);
    }

    #[test]
    fn test_add_existing_item_merges_without_refreshing_snapshot() {
        let state = add(&CartState::new(), 1, Some(2));
        let repriced = ProductSnapshot {
            title: "Renamed".to_string(),
            price: Price::new(Decimal::from_str("99.99").unwrap()).unwrap(),
            image: "new.png".to_string(),
            ..snapshot(1)
        };
        let state = reduce(
            &state,
            Intent::AddItem {
                product: repriced,
                quantity: None,
            },
        );

        let item = state.get(ProductId::new(1)).unwrap();
        assert_eq!(item.quantity.get(), 3);
        assert_eq!(item.title, "Product 1");
        assert_eq!(item.price, Price::from_cents(1000));
        assert_eq!(item.image, "1.png");
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order_of_remaining_items() {
        let state = add(&add(&add(&CartState::new(), 1, None), 2, None), 3, None);
        let state = reduce(&state, Intent::RemoveItem(ProductId::new(2)));
        assert_eq!(quantities(&state), vec![(1, 1), (3, 1)]);
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let state = add(&CartState::new(), 1, None);
        assert_eq!(reduce(&state, Intent::RemoveItem(ProductId::new(9))), state);
    }

    #[test]
    fn test_increment_updates_in_place() {
        let state = add(&add(&CartState::new(), 1, None), 2, None);
        let state = reduce(&state, Intent::Increment(ProductId::new(1)));
        assert_eq!(quantities(&state), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let state = add(&CartState::new(), 1, Some(2));
        let state = reduce(&state, Intent::Decrement(ProductId::new(1)));
        assert_eq!(quantities(&state), vec![(1, 1)]);

        let again = reduce(&state, Intent::Decrement(ProductId::new(1)));
        assert_eq!(again, state);
    }

    #[test]
    fn test_quantity_changes_on_missing_item_are_noops() {
        let state = add(&CartState::new(), 1, None);
        assert_eq!(reduce(&state, Intent::Increment(ProductId::new(5))), state);
        assert_eq!(reduce(&state, Intent::Decrement(ProductId::new(5))), state);
    }

    #[test]
    fn test_clear_cart_empties_items() {
        let state = add(&add(&CartState::new(), 1, Some(4)), 2, None);
        let state = reduce(&state, Intent::ClearCart);
        assert!(state.is_empty());
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_load_cart_replaces_items() {
        let existing = add(&CartState::new(), 1, None);
        let loaded = add(&add(&CartState::new(), 7, Some(3)), 8, None);
        let state = reduce(&existing, Intent::LoadCart(loaded.items().to_vec()));
        assert_eq!(state, loaded);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let before = add(&CartState::new(), 1, None);
        let snapshot = before.clone();
        let _after = reduce(&before, Intent::Increment(ProductId::new(1)));
        assert_eq!(before, snapshot);
    }
}
