//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_PATH` - Path of the cart store file (default: `cart-store.json`)
//! - `CART_CUSTOMER_ID` - Customer identity for the session (default: anonymous)

use std::path::PathBuf;

use copper_kettle_core::CustomerId;

/// Default cart store file, relative to the working directory.
const DEFAULT_STORAGE_PATH: &str = "cart-store.json";

/// Cart CLI configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the cart store file.
    pub storage_path: PathBuf,
    /// Customer identity for this session, if any.
    pub customer_id: Option<CustomerId>,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so loading cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            storage_path: PathBuf::from(get_env_or_default(
                "CART_STORAGE_PATH",
                DEFAULT_STORAGE_PATH,
            )),
            customer_id: get_optional_env("CART_CUSTOMER_ID").map(CustomerId::new),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
