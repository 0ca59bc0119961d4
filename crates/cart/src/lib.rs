//! Copper Kettle Cart - Client-side cart state holder.
//!
//! This crate owns the in-memory cart list, mirrors it to a durable
//! key-value storage collaborator, and exposes mutations plus derived
//! totals to the rest of the application.
//!
//! # Architecture
//!
//! - [`CartStore`] - The state holder: restore/persist lifecycle, the four
//!   cart mutations, derived totals, and change notifications
//! - [`CartStorage`] - Durable key-value collaborator contract, with
//!   [`MemoryStorage`] and [`FileStorage`] backends
//! - [`AuthContext`] - Read-only identity collaborator (reserved for
//!   per-customer cart keying)
//!
//! Everything is single-threaded and synchronous: mutations run on the
//! caller's thread, storage reads and writes are local, and consumers pull
//! [`CartSnapshot`] views through the subscription mechanism.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod error;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod subscription;

pub use auth::{AnonymousAuth, AuthContext, StaticAuth};
pub use error::StorageError;
pub use snapshot::CartSnapshot;
pub use storage::{CART_STORAGE_KEY, CartStorage, FileStorage, MemoryStorage};
pub use store::{CartStore, Lifecycle};
pub use subscription::SubscriptionId;
