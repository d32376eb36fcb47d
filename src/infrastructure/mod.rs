//! Adapters for the user store and the payment provider.

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
pub mod store;
pub mod stripe;
