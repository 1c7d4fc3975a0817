//! Search, category filter, and sort over the catalog.

use std::str::FromStr;

use mini_boutique_core::Product;
use thiserror::Error;

/// Which categories a listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `None` and `"all"` mean every category.
    #[must_use]
    pub fn from_option(category: Option<&str>) -> Self {
        match category.map(str::trim) {
            None | Some("" | "all") => Self::All,
            Some(category) => Self::Only(category.to_owned()),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    /// Title, ignoring case.
    Name,
}

impl SortOrder {
    /// Sort in place. The sort is stable, so ties keep catalog order.
    pub fn apply(self, products: &mut [&Product]) {
        match self {
            Self::Default => {}
            Self::PriceAsc => products.sort_by_key(|product| product.price),
            Self::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Name => products.sort_by_cached_key(|product| product.title.to_lowercase()),
        }
    }
}

/// Error parsing a [`SortOrder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order '{0}' (expected default, price-asc, price-desc, or name)")]
pub struct ParseSortError(String);

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "name" => Ok(Self::Name),
            other => Err(ParseSortError(other.to_owned())),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Name => "name",
        })
    }
}

/// A catalog listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    /// Case-insensitive text matched against title or description.
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

impl ProductQuery {
    /// Whether search or category narrow the listing.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }

    pub(super) fn matches(&self, product: &Product) -> bool {
        self.category.matches(product) && self.matches_search(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || product.title.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
            {"id": 1, "title": "wireless Earbuds", "price": 79.99, "image": "a",
             "description": "Noise cancelling audio", "category": "audio"},
            {"id": 2, "title": "USB-C Hub", "price": 34.5, "image": "b",
             "description": "Seven ports", "category": "accessories"},
            {"id": 3, "title": "Bluetooth Speaker", "price": 49, "image": "c",
             "description": "Portable audio", "category": "audio"},
            {"id": 4, "title": "Laptop Stand", "price": 34.5, "image": "d",
             "description": "Aluminium", "category": "accessories"}
        ]"#,
        )
        .unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_default_query_lists_everything_in_order() {
        let catalog = catalog();
        let query = ProductQuery::default();
        assert_eq!(ids(&catalog.query(&query)), vec![1, 2, 3, 4]);
        assert!(!query.is_filtered());
    }

    #[test]
    fn test_search_matches_title_or_description_ignoring_case() {
        let catalog = catalog();
        let query = ProductQuery {
            search: "AUDIO".to_string(),
            ..ProductQuery::default()
        };
        assert_eq!(ids(&catalog.query(&query)), vec![1, 3]);

        let query = ProductQuery {
            search: "hub".to_string(),
            ..ProductQuery::default()
        };
        assert_eq!(ids(&catalog.query(&query)), vec![2]);
        assert!(query.is_filtered());
    }

    #[test]
    fn test_search_text_is_matched_verbatim() {
        let catalog = catalog();
        let query = ProductQuery {
            search: "  ".to_string(),
            ..ProductQuery::default()
        };
        assert!(query.is_filtered());
        assert!(catalog.query(&query).is_empty());

        let query = ProductQuery {
            search: "usb-c hub".to_string(),
            ..ProductQuery::default()
        };
        assert_eq!(ids(&catalog.query(&query)), vec![2]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog();
        let query = ProductQuery {
            category: CategoryFilter::from_option(Some("accessories")),
            ..ProductQuery::default()
        };
        assert_eq!(ids(&catalog.query(&query)), vec![2, 4]);
        assert_eq!(CategoryFilter::from_option(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_option(None), CategoryFilter::All);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let catalog = catalog();
        let asc = ProductQuery {
            sort: SortOrder::PriceAsc,
            ..ProductQuery::default()
        };
        assert_eq!(ids(&catalog.query(&asc)), vec![2, 4, 3, 1]);

        let desc = ProductQuery {
            sort: SortOrder::PriceDesc,
            ..ProductQuery::default()
        };
        assert_eq!(ids(&catalog.query(&desc)), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let catalog = catalog();
        let query = ProductQuery {
            sort: SortOrder::Name,
            ..ProductQuery::default()
        };
        assert_eq!(ids(&catalog.query(&query)), vec![3, 4, 2, 1]);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("price-desc".parse::<SortOrder>().unwrap(), SortOrder::PriceDesc);
        assert!("cheapest".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::PriceAsc.to_string(), "price-asc");
    }
}
