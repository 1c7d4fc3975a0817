//! Application state: configuration, catalog, and the cart store.

use mini_boutique_core::{Product, ProductId};

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::storage::FileStore;

/// Everything a storefront front end needs, built once at startup and
/// passed by reference to whatever renders or handles input.
#[derive(Debug)]
pub struct AppState {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore<FileStore>,
}

impl AppState {
    /// Load the catalog and open the cart store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Catalog` if the catalog cannot be loaded.
    /// A missing or unreadable saved cart is not an error.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::bundled()?,
        };
        let cart = CartStore::open(FileStore::new(&config.storage_path), config.tax_rate);

        Ok(Self {
            config,
            catalog,
            cart,
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<FileStore> {
        &self.cart
    }

    /// Get a mutable reference to the cart store.
    pub const fn cart_mut(&mut self) -> &mut CartStore<FileStore> {
        &mut self.cart
    }

    /// Look up a catalog product.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` for unknown ids.
    pub fn product(&self, id: ProductId) -> Result<&Product> {
        self.catalog
            .get(id)
            .ok_or(StorefrontError::ProductNotFound(id))
    }

    /// Add a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` for unknown ids; the cart is
    /// left unchanged.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: Option<u32>) -> Result<()> {
        let snapshot = self.product(id)?.snapshot();
        self.cart.add_item(snapshot, quantity);
        Ok(())
    }
}
