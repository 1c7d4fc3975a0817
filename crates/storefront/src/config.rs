//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BOUTIQUE_TAX_RATE` - Sales tax multiplier applied to the subtotal (default: 0.08)
//! - `BOUTIQUE_STORAGE_PATH` - File holding the saved cart (default: .mini-boutique/storage.json)
//! - `BOUTIQUE_CATALOG_PATH` - Product catalog JSON file (default: bundled catalog)

use std::path::PathBuf;

use mini_boutique_core::TaxRate;
use thiserror::Error;

const DEFAULT_STORAGE_PATH: &str = ".mini-boutique/storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Tax rate applied to the cart subtotal
    pub tax_rate: TaxRate,
    /// Where the cart is persisted
    pub storage_path: PathBuf,
    /// Catalog file to load instead of the bundled one
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            tax_rate: TaxRate::DEFAULT,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let tax_rate = match non_empty(lookup("BOUTIQUE_TAX_RATE")) {
            Some(raw) => raw.parse::<TaxRate>().map_err(|e| {
                ConfigError::InvalidEnvVar("BOUTIQUE_TAX_RATE".to_string(), e.to_string())
            })?,
            None => TaxRate::DEFAULT,
        };
        let storage_path = non_empty(lookup("BOUTIQUE_STORAGE_PATH"))
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from);
        let catalog_path = non_empty(lookup("BOUTIQUE_CATALOG_PATH")).map(PathBuf::from);

        Ok(Self {
            tax_rate,
            storage_path,
            catalog_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat blank values the same as unset ones.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
