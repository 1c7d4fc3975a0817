//! Cart persistence: the blob format and the load/save protocol.
//!
//! The cart's items are stored as a JSON array under [`CART_STORAGE_KEY`]:
//!
//! ```json
//! [{"id": 1, "title": "Wireless Earbuds", "price": "79.99", "image": "/img/earbuds.jpg", "quantity": 2}]
//! ```
//!
//! Prices are written as decimal strings and read back from either strings
//! or JSON numbers.

use std::collections::HashSet;

use mini_boutique_core::{LineItem, Price, ProductId};
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

/// The storage key holding the cart.
pub const CART_STORAGE_KEY: &str = "mini-boutique-cart";

/// Errors decoding a stored cart blob.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not JSON, or not an array of well-formed line items.
    #[error("malformed cart data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two lines share a product id.
    #[error("duplicate line item for product {0}")]
    DuplicateItem(ProductId),

    /// A line total or the subtotal does not fit in a price.
    #[error("cart totals overflow at product {0}")]
    Overflow(ProductId),
}

/// Errors reading the stored cart.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors writing the cart.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What happened when the store tried to restore a saved cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing was stored; the cart starts empty.
    Absent,
    /// A saved cart with this many lines was restored.
    Restored { lines: usize },
    /// Stored data could not be used; the cart starts empty.
    Discarded { reason: String },
}

/// Result of the most recent save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommitOutcome {
    /// Nothing has been dispatched yet.
    #[default]
    NotAttempted,
    Saved,
    /// The write failed; storage may be behind the in-memory cart until the
    /// next successful save.
    Failed { reason: String },
}

/// Encode items into the stored blob format.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn encode_items(items: &[LineItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Decode a stored blob into line items.
///
/// Zero quantities and negative prices are rejected by the item types;
/// duplicate ids and items whose totals overflow are rejected here.
///
/// # Errors
///
/// Returns `DecodeError` if the blob is not a valid, duplicate-free item list
/// with a representable subtotal.
pub fn decode_items(raw: &str) -> Result<Vec<LineItem>, DecodeError> {
    let items: Vec<LineItem> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(items.len());
    let mut subtotal = Price::ZERO;
    for item in &items {
        if !seen.insert(item.id) {
            return Err(DecodeError::DuplicateItem(item.id));
        }
        subtotal = item
            .price
            .checked_mul(item.quantity)
            .and_then(|line| subtotal.checked_add(line))
            .ok_or(DecodeError::Overflow(item.id))?;
    }
    Ok(items)
}

/// Reads and writes the cart blob through a [`KeyValueStore`].
#[derive(Debug)]
pub struct CartPersistence<S> {
    storage: S,
}

impl<S: KeyValueStore> CartPersistence<S> {
    /// Persist through `storage`.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the saved items, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if storage fails or the blob does not decode.
    pub fn load(&self) -> Result<Option<Vec<LineItem>>, LoadError> {
        match self.storage.get(CART_STORAGE_KEY)? {
            Some(raw) => Ok(Some(decode_items(&raw)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the saved items.
    ///
    /// # Errors
    ///
    /// Returns `SaveError` if encoding or the storage write fails.
    pub fn save(&mut self, items: &[LineItem]) -> Result<(), SaveError> {
        let blob = encode_items(items)?;
        self.storage.set(CART_STORAGE_KEY, &blob)?;
        Ok(())
    }

    /// Borrow the underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutably borrow the underlying storage.
    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Give back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mini_boutique_core::{Price, Quantity};

    use super::*;
    use crate::storage::MemoryStore;

    fn item(id: i32, quantity: u32) -> LineItem {
        LineItem {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(1250),
            image: format!("/img/{id}.jpg"),
            quantity: Quantity::new(quantity).unwrap(),
        }
    }

    #[test]
    fn test_encode_writes_price_as_string() {
        let blob = encode_items(&[item(1, 2)]).unwrap();
        assert_eq!(
            blob,
            r#"[{"id":1,"title":"Product 1","price":"12.50","image":"/img/1.jpg","quantity":2}]"#
        );
    }

    #[test]
    fn test_decode_accepts_numeric_prices() {
        let items =
            decode_items(r#"[{"id":1,"title":"X","price":10.5,"image":"x.png","quantity":3}]"#)
                .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, Price::from_cents(1050));
        assert_eq!(items[0].quantity.get(), 3);
    }

    #[test]
    fn test_decode_rejects_invalid_text() {
        assert!(matches!(
            decode_items("{not json"),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(decode_items(r#"{"items":[]}"#).is_err());
        assert!(decode_items(r#"[{"id":1}]"#).is_err());
    }

    #[test]
    fn test_decode_rejects_zero_quantity_and_negative_price() {
        assert!(
            decode_items(r#"[{"id":1,"title":"X","price":1,"image":"x","quantity":0}]"#).is_err()
        );
        assert!(
            decode_items(r#"[{"id":1,"title":"X","price":-1,"image":"x","quantity":1}]"#).is_err()
        );
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let blob = encode_items(&[item(1, 1), item(1, 2)]).unwrap();
        assert!(matches!(
            decode_items(&blob),
            Err(DecodeError::DuplicateItem(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_decode_rejects_overflowing_totals() {
        let line = decode_items(
            r#"[{"id":1,"title":"X","price":"79228162514264337593543950335","image":"x","quantity":2}]"#,
        );
        assert!(matches!(line, Err(DecodeError::Overflow(id)) if id == ProductId::new(1)));

        let sum = decode_items(
            r#"[{"id":1,"title":"X","price":"50000000000000000000000000000","image":"x","quantity":1},
                {"id":2,"title":"Y","price":"50000000000000000000000000000","image":"y","quantity":1}]"#,
        );
        assert!(matches!(sum, Err(DecodeError::Overflow(id)) if id == ProductId::new(2)));
    }

    #[test]
    fn test_load_absent_key() {
        let persistence = CartPersistence::new(MemoryStore::new());
        assert!(persistence.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut persistence = CartPersistence::new(MemoryStore::new());
        let items = vec![item(2, 1), item(1, 4)];
        persistence.save(&items).unwrap();
        assert_eq!(persistence.load().unwrap(), Some(items));
    }

    #[test]
    fn test_save_surfaces_quota_errors() {
        let mut persistence = CartPersistence::new(MemoryStore::with_quota(4));
        let err = persistence.save(&[item(1, 1)]).unwrap_err();
        assert!(matches!(
            err,
            SaveError::Storage(StorageError::QuotaExceeded { .. })
        ));
    }
}
