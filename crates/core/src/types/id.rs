//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog, order, and
//! delivery identifiers are opaque strings (`"3"`, `"ORD-4F2A91C0"`), so the
//! wrappers hold a `String` rather than a numeric key.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use sweetstack_core::define_id;
/// define_id!(ProductId);
/// define_id!(OrderId);
///
/// let product_id = ProductId::new("3");
/// let order_id = OrderId::new("ORD-4F2A91C0");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(OrderId);
define_id!(DeliveryId);
define_id!(CourierId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let id = ProductId::new("3");
        assert_eq!(id.as_str(), "3");
    }

    #[test]
    fn test_display() {
        let id = OrderId::new("ORD-4F2A91C0");
        assert_eq!(format!("{id}"), "ORD-4F2A91C0");
    }

    #[test]
    fn test_equality() {
        assert_eq!(ProductId::new("1"), ProductId::from("1"));
        assert_ne!(ProductId::new("1"), ProductId::new("2"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = DeliveryId::new("DEL-00000001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"DEL-00000001\"");

        let parsed: DeliveryId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
