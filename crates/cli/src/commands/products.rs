//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! # Everything, in catalog order
//! boutique products
//!
//! # Search title and description, narrow to a category, sort by price
//! boutique products --search wireless --category audio --sort price-asc
//!
//! # One product
//! boutique product 3
//! ```

use std::fmt::Write;

use mini_boutique_core::Product;
use mini_boutique_storefront::{Catalog, ProductQuery};

/// Render a filtered product listing.
pub fn list(catalog: &Catalog, query: &ProductQuery) -> String {
    let products = catalog.query(query);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Showing {} of {} products",
        products.len(),
        catalog.len()
    );
    if products.is_empty() {
        let _ = writeln!(out, "No products found matching your criteria.");
        return out;
    }
    for product in products {
        let _ = writeln!(
            out,
            "  #{:<3} {:<24} {:>9}  [{}]",
            product.id.get(),
            product.title,
            product.price.display(),
            product.category
        );
    }
    if query.is_filtered() {
        let _ = writeln!(out, "(filters active: run without --search/--category to see all)");
    }
    out
}

/// Render a single product's details.
pub fn show(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", product.title, product.id);
    let _ = writeln!(out, "{} | {}", product.price.display(), product.category);
    let _ = writeln!(out, "{}", product.description);
    let _ = writeln!(out, "Image: {}", product.image);
    out
}

/// Render the category list.
pub fn categories(catalog: &Catalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        let _ = writeln!(out, "{category}");
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mini_boutique_core::ProductId;
    use mini_boutique_storefront::{CategoryFilter, SortOrder};

    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
            {"id": 1, "title": "Wireless Earbuds", "price": 79.99, "image": "e.jpg",
             "description": "In-ear audio", "category": "audio"},
            {"id": 2, "title": "USB-C Hub", "price": 39.99, "image": "h.jpg",
             "description": "Seven ports", "category": "accessories"}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_list_reports_counts_and_rows() {
        let out = list(&catalog(), &ProductQuery::default());
        assert!(out.starts_with("Showing 2 of 2 products\n"));
        assert!(out.contains("Wireless Earbuds"));
        assert!(out.contains("$39.99"));
        assert!(!out.contains("filters active"));
    }

    #[test]
    fn test_list_with_filters() {
        let query = ProductQuery {
            search: String::new(),
            category: CategoryFilter::Only("accessories".to_string()),
            sort: SortOrder::Default,
        };
        let out = list(&catalog(), &query);
        assert!(out.starts_with("Showing 1 of 2 products\n"));
        assert!(!out.contains("Wireless Earbuds"));
        assert!(out.contains("filters active"));
    }

    #[test]
    fn test_list_without_matches() {
        let query = ProductQuery {
            search: "keyboard".to_string(),
            ..ProductQuery::default()
        };
        let out = list(&catalog(), &query);
        assert!(out.contains("No products found matching your criteria."));
    }

    #[test]
    fn test_show_product() {
        let catalog = catalog();
        let out = show(catalog.get(ProductId::new(2)).unwrap());
        assert!(out.starts_with("USB-C Hub (#2)\n"));
        assert!(out.contains("$39.99 | accessories"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(categories(&catalog()), "audio\naccessories\n");
    }
}
