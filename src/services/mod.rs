//! State and derived-data services

pub mod export;
pub mod search;
pub mod stats;
pub mod store;

pub use store::{EntityStore, StoreSnapshot};
