//! Configuration and local persistence for the Coop storefront
//!
//! This crate provides:
//! - File path utilities for config and snapshot files
//! - Application configuration (`AppConfig`, TOML)
//! - Snapshot persistence for the cart and the auth token behind the
//!   [`SnapshotStore`] trait, so stores stay testable with an in-memory fake

pub mod app_config;
pub mod paths;
pub mod snapshot;

pub use app_config::AppConfig;
pub use snapshot::{JsonFileStore, MemoryStore, SnapshotStore};
