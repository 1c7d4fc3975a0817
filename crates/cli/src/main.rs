//! Mini Boutique CLI - Browse the catalog and manage the cart.
//!
//! # Usage
//!
//! ```bash
//! # Browse products
//! boutique products --search earbuds --sort price-asc
//! boutique product 1
//! boutique categories
//!
//! # Manage the cart
//! boutique cart add 1 --quantity 2
//! boutique cart show
//! boutique cart clear
//! ```
//!
//! # Environment Variables
//!
//! - `BOUTIQUE_TAX_RATE` - Tax multiplier (default: 0.08)
//! - `BOUTIQUE_STORAGE_PATH` - Saved cart location (default: .mini-boutique/storage.json)
//! - `BOUTIQUE_CATALOG_PATH` - Catalog JSON file (default: bundled catalog)
//! - `RUST_LOG` - Log filter (logs go to stderr)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use mini_boutique_core::ProductId;
use mini_boutique_storefront::{AppState, CategoryFilter, ProductQuery, SortOrder, StorefrontConfig};

mod commands;

#[derive(Parser)]
#[command(name = "boutique")]
#[command(author, version, about = "Mini Boutique storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Match against product title or description
        #[arg(short, long)]
        search: Option<String>,

        /// Only show this category (`all` for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order (`default`, `price-asc`, `price-desc`, `name`)
        #[arg(long, default_value_t = SortOrder::Default)]
        sort: SortOrder,
    },
    /// Show one product
    Product {
        /// Product id
        id: ProductId,
    },
    /// List product categories
    Categories,
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        id: ProductId,

        /// Units to add (default: 1)
        #[arg(short, long)]
        quantity: Option<u32>,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: ProductId,
    },
    /// Add one unit of a product already in the cart
    Increment {
        /// Product id
        id: ProductId,
    },
    /// Take away one unit (a line never drops below one)
    Decrement {
        /// Product id
        id: ProductId,
    },
    /// Remove everything from the cart
    Clear,
}

fn main() {
    // Logs go to stderr so command output on stdout stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mini_boutique_storefront=warn,boutique=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut state = AppState::new(config)?;

    let output = match cli.command {
        Commands::Products {
            search,
            category,
            sort,
        } => {
            let query = ProductQuery {
                search: search.unwrap_or_default(),
                category: CategoryFilter::from_option(category.as_deref()),
                sort,
            };
            commands::products::list(state.catalog(), &query)
        }
        Commands::Product { id } => commands::products::show(state.product(id)?),
        Commands::Categories => commands::products::categories(state.catalog()),
        Commands::Cart { action } => {
            match action {
                CartAction::Show => {}
                CartAction::Add { id, quantity } => state.add_to_cart(id, quantity)?,
                CartAction::Remove { id } => state.cart_mut().remove_item(id),
                CartAction::Increment { id } => state.cart_mut().increment_item(id),
                CartAction::Decrement { id } => state.cart_mut().decrement_item(id),
                CartAction::Clear => state.cart_mut().clear_cart(),
            }
            commands::cart::show(state.cart())
        }
    };

    #[allow(clippy::print_stdout)]
    {
        print!("{output}");
    }
    Ok(())
}
