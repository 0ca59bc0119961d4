//! Copper Kettle Cart CLI - Drive a file-backed cart from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! ck-cart show
//!
//! # Add two of a product
//! ck-cart add -i prod-whisk -t "Balloon Whisk" -p 12.50 -q 2
//!
//! # Replace a quantity
//! ck-cart update -i prod-whisk -q 5
//!
//! # Remove a product
//! ck-cart remove -i prod-whisk
//!
//! # Empty the cart
//! ck-cart clear
//! ```
//!
//! # Commands
//!
//! - `show` - Print the current cart snapshot as JSON
//! - `add` - Add a product to the cart
//! - `remove` - Remove a product from the cart
//! - `update` - Replace a product's quantity verbatim
//! - `clear` - Remove every line item

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::rc::Rc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use copper_kettle_cart::{AnonymousAuth, AuthContext, CartStore, FileStorage, StaticAuth};

mod commands;
mod config;

use config::CartConfig;

#[derive(Parser)]
#[command(name = "ck-cart")]
#[command(author, version, about = "Copper Kettle cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current cart snapshot as JSON
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        #[arg(short, long)]
        id: String,

        /// Product title
        #[arg(short, long)]
        title: String,

        /// Unit price (e.g., 12.50)
        #[arg(short, long)]
        price: Decimal,

        /// Featured image URL
        #[arg(long, default_value = "")]
        image_url: String,

        /// Stock level at add time
        #[arg(long, default_value_t = 0)]
        stock: i64,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        #[arg(short, long)]
        id: String,
    },
    /// Replace a product's quantity verbatim
    Update {
        /// Product ID
        #[arg(short, long)]
        id: String,

        /// New quantity
        #[arg(short, long)]
        quantity: i64,
    },
    /// Remove every line item
    Clear,
}

fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "copper_kettle_cart=info,copper_kettle_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env();

    let auth: Rc<dyn AuthContext> = match config.customer_id {
        Some(customer) => Rc::new(StaticAuth::new(customer)),
        None => Rc::new(AnonymousAuth),
    };
    let storage = FileStorage::new(config.storage_path);
    let mut store = CartStore::open(Box::new(storage), auth);

    match cli.command {
        Commands::Show => commands::show(&store)?,
        Commands::Add {
            id,
            title,
            price,
            image_url,
            stock,
            quantity,
        } => commands::add(&mut store, &id, &title, price, &image_url, stock, quantity)?,
        Commands::Remove { id } => commands::remove(&mut store, &id)?,
        Commands::Update { id, quantity } => commands::update(&mut store, &id, quantity)?,
        Commands::Clear => commands::clear(&mut store)?,
    }
    Ok(())
}
