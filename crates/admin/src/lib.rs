//! Sweet Stack Admin - Mock administration surface.
//!
//! The admin dashboard is a demo: login is a hardcoded credential check,
//! the product table edits a throwaway in-memory copy of the catalog, and
//! the orders and customers tabs show fabricated fixtures. Nothing here
//! mutates the storefront's stores or survives a restart, and that is by
//! contract - the catalog itself is immutable.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod dashboard;
pub mod products;
