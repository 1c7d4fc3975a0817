//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! boutique cart add 1 --quantity 2
//! boutique cart increment 1
//! boutique cart decrement 1
//! boutique cart remove 1
//! boutique cart clear
//! boutique cart show
//! ```
//!
//! Every mutation is saved to `BOUTIQUE_STORAGE_PATH`, so the cart carries
//! over between invocations.

use std::fmt::Write;

use mini_boutique_storefront::{CartStore, KeyValueStore};

/// Render the cart with per-line and overall totals.
pub fn show<S: KeyValueStore>(store: &CartStore<S>) -> String {
    let mut out = String::new();

    if store.items().is_empty() {
        let _ = writeln!(out, "Your cart is empty");
        let _ = writeln!(out, "Add some products to get started!");
        return out;
    }

    let _ = writeln!(out, "Shopping Cart");
    for item in store.items() {
        let _ = writeln!(
            out,
            "  {:>3} x {:<24} (#{}) {:>9} each {:>10}",
            item.quantity.get(),
            item.title,
            item.id,
            item.price.display(),
            item.line_total().display()
        );
    }

    let totals = store.totals();
    let tax_label = format!("Tax ({}):", store.tax_rate());
    let _ = writeln!(out);
    let _ = writeln!(out, "  {:<12} {:>10}", "Subtotal:", totals.subtotal.display());
    let _ = writeln!(out, "  {:<12} {:>10}", tax_label, totals.tax.display());
    let _ = writeln!(out, "  {:<12} {:>10}", "Total:", totals.total.display());
    let _ = writeln!(
        out,
        "  {} {}",
        totals.count,
        if totals.count == 1 { "item" } else { "items" }
    );
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mini_boutique_core::{Price, ProductId, ProductSnapshot, TaxRate};
    use mini_boutique_storefront::MemoryStore;

    use super::*;

    #[test]
    fn test_show_empty_cart() {
        let store = CartStore::open(MemoryStore::new(), TaxRate::DEFAULT);
        assert_eq!(
            show(&store),
            "Your cart is empty\nAdd some products to get started!\n"
        );
    }

    #[test]
    fn test_show_cart_totals() {
        let mut store = CartStore::open(MemoryStore::new(), TaxRate::DEFAULT);
        store.add_item(
            ProductSnapshot {
                id: ProductId::new(1),
                title: "X".to_string(),
                price: Price::from_cents(1000),
                image: "x.png".to_string(),
            },
            Some(2),
        );

        let out = show(&store);
        assert!(out.starts_with("Shopping Cart\n"));
        assert!(out.contains("$20.00"));
        assert!(out.contains("Tax (8%):"));
        assert!(out.contains("$1.60"));
        assert!(out.contains("$21.60"));
        assert!(out.contains("2 items"));
    }
}
