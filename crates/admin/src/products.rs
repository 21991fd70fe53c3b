//! The admin product table.
//!
//! Edits and deletes here touch a working copy taken from the catalog at
//! construction time. The catalog itself is immutable, so nothing done in
//! the admin surface persists across a reload.

use tracing::info;

use sweetstack_core::{Category, Price, ProductId};
use sweetstack_storefront::catalog::{Catalog, Product};

/// A partial product edit. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub category: Option<Category>,
    pub featured: Option<bool>,
}

/// The mutable working copy of the product list.
#[derive(Debug, Clone)]
pub struct ProductManager {
    products: Vec<Product>,
}

impl ProductManager {
    /// Snapshot the catalog into a working copy.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            products: catalog.all().to_vec(),
        }
    }

    /// The current working copy, in catalog order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Remove a product from the working copy.
    ///
    /// Returns whether a product was removed.
    pub fn delete(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        let removed = self.products.len() != before;
        if removed {
            info!(%id, "product removed from admin working copy");
        }
        removed
    }

    /// Apply a partial edit to a product in the working copy.
    ///
    /// Returns whether a product with that id existed.
    pub fn update(&mut self, id: &ProductId, patch: ProductPatch) -> bool {
        let Some(product) = self.products.iter_mut().find(|p| &p.id == id) else {
            return false;
        };
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(featured) = patch.featured {
            product.featured = featured;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_only_touches_the_working_copy() {
        let catalog = Catalog::new();
        let mut manager = ProductManager::from_catalog(&catalog);
        let id = ProductId::new("1");

        assert!(manager.delete(&id));
        assert!(!manager.delete(&id));
        assert!(manager.list().iter().all(|p| p.id != id));

        // The catalog is untouched.
        assert!(catalog.get(&id).is_some());
    }

    #[test]
    fn test_update_merges_fields() {
        let catalog = Catalog::new();
        let mut manager = ProductManager::from_catalog(&catalog);
        let id = ProductId::new("2");

        assert!(manager.update(
            &id,
            ProductPatch {
                price: Some(Price::new(6200)),
                featured: Some(false),
                ..ProductPatch::default()
            }
        ));

        let product = manager.list().iter().find(|p| p.id == id);
        assert_eq!(product.map(|p| p.price), Some(Price::new(6200)));
        assert_eq!(product.map(|p| p.featured), Some(false));
        // Unset fields keep their values.
        assert_eq!(product.map(|p| p.name.as_str()), Some("Vanilla Bean Cake"));
    }

    #[test]
    fn test_update_unknown_id_is_reported() {
        let catalog = Catalog::new();
        let mut manager = ProductManager::from_catalog(&catalog);
        assert!(!manager.update(&ProductId::new("999"), ProductPatch::default()));
    }
}
