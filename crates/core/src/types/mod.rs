//! Core types for Sweet Stack.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod money;
pub mod status;

pub use category::Category;
pub use email::{Email, EmailError};
pub use id::*;
pub use money::{CurrencyCode, Price, format_amount};
pub use status::*;
