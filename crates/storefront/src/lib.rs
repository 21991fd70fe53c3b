//! Sweet Stack Storefront - Catalog and client state core.
//!
//! This crate owns everything that carries state across the storefront's
//! pages: the immutable product catalog, the cart / wishlist / compare /
//! settings / delivery stores, checkout, and the mock payment gateway.
//! Page rendering lives with the consumers (the `cli` crate here); they
//! read from and dispatch actions into [`state::AppState`], which is the
//! only place cross-page state exists.
//!
//! # Architecture
//!
//! - Every store serializes its whole state as one JSON blob under a
//!   namespaced key via [`persistence::StateStorage`], and rehydrates from
//!   it on startup. Writes are fire-and-forget: a failed write is logged
//!   and the in-memory state stays authoritative.
//! - Mutations are synchronous and single-threaded; stores expose a
//!   `tokio::sync::watch` revision channel so views can react to changes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod payment;
pub mod persistence;
pub mod state;
pub mod stores;
