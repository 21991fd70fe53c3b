//! Sweet Stack Core - Shared types library.
//!
//! This crate provides common types used across all Sweet Stack components:
//! - `storefront` - Catalog, state stores, checkout, and delivery tracking
//! - `admin` - Mock administration surface
//! - `cli` - Terminal front end driving the stores
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! timers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   the delivery status machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
