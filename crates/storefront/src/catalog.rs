//! The product catalog.
//!
//! The catalog is built once at startup from the built-in product data and
//! never changes afterwards. Lookups are pure; an unknown id simply returns
//! `None` and an empty category returns an empty list.

use serde::{Deserialize, Serialize};
use sweetstack_core::{Category, Price, ProductId};

/// A catalog product.
///
/// Products are immutable: the cart, wishlist, and compare stores keep
/// their own snapshots, so a `Product` never changes under a consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Image URL for product cards.
    pub image: String,
    pub category: Category,
    pub featured: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
}

/// Immutable product catalog with lookup accessors.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog from the built-in product data.
    #[must_use]
    pub fn new() -> Self {
        Self { products: seed() }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products in a category.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// The products flagged for the featured shelf.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    image: &str,
    category: Category,
    featured: bool,
    ingredients: &[&str],
    allergens: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::new(price),
        image: image.to_owned(),
        category,
        featured,
        ingredients: ingredients.iter().map(|&s| s.to_owned()).collect(),
        allergens: allergens.iter().map(|&s| s.to_owned()).collect(),
    }
}

/// The bakery's product line.
fn seed() -> Vec<Product> {
    vec![
        product(
            "1",
            "Classic Chocolate Cake",
            "Rich and moist chocolate cake with silky chocolate frosting, perfect for any celebration.",
            6500,
            "https://images.unsplash.com/photo-1578985545062-69928b1d9587?q=80&w=1089&auto=format&fit=crop",
            Category::Chocolate,
            true,
            &["Cocoa powder", "Flour", "Sugar", "Butter", "Eggs", "Vanilla extract"],
            &["Gluten", "Dairy", "Eggs"],
        ),
        product(
            "2",
            "Vanilla Bean Cake",
            "Light and fluffy vanilla cake with vanilla bean frosting, elegant and delicious.",
            6000,
            "https://images.unsplash.com/photo-1557925923-cd4648e211a0?q=80&w=1169&auto=format&fit=crop",
            Category::Vanilla,
            true,
            &["Vanilla beans", "Flour", "Sugar", "Butter", "Eggs", "Milk"],
            &["Gluten", "Dairy", "Eggs"],
        ),
        product(
            "3",
            "Red Velvet Cake",
            "Luxurious red velvet cake with cream cheese frosting, a southern classic that's always a hit.",
            7000,
            "https://images.unsplash.com/photo-1586788680434-30d324b2d46f?q=80&w=951&auto=format&fit=crop",
            Category::Specialty,
            true,
            &["Cocoa powder", "Red food coloring", "Flour", "Sugar", "Butter", "Buttermilk", "Cream cheese"],
            &["Gluten", "Dairy", "Eggs"],
        ),
        product(
            "4",
            "Strawberry Shortcake",
            "Light sponge cake layered with fresh strawberries and whipped cream, a summer favorite.",
            6500,
            "https://images.unsplash.com/photo-1488477181946-6428a0291777?q=80&w=987&auto=format&fit=crop",
            Category::Fruit,
            false,
            &["Flour", "Sugar", "Strawberries", "Heavy cream", "Eggs", "Vanilla extract"],
            &["Gluten", "Dairy", "Eggs"],
        ),
        product(
            "5",
            "Carrot Cake",
            "Spiced carrot cake with cream cheese frosting and chopped walnuts, a cozy classic.",
            6000,
            "https://images.unsplash.com/photo-1621303837174-89787a7d4729?q=80&w=936&auto=format&fit=crop",
            Category::Specialty,
            false,
            &["Carrots", "Walnuts", "Flour", "Sugar", "Eggs", "Cinnamon", "Cream cheese"],
            &["Gluten", "Dairy", "Eggs", "Tree Nuts"],
        ),
        product(
            "6",
            "Lemon Drizzle Cake",
            "Tangy lemon cake with a sweet-tart lemon drizzle, bright and refreshing.",
            5500,
            "https://images.unsplash.com/photo-1515037893149-de7f840978e2?q=80&w=1092&auto=format&fit=crop",
            Category::Fruit,
            true,
            &["Lemons", "Flour", "Sugar", "Butter", "Eggs", "Yogurt"],
            &["Gluten", "Dairy", "Eggs"],
        ),
        product(
            "7",
            "Black Forest Gateau",
            "Chocolate sponge cake with layers of cherries and whipped cream, a German classic.",
            7500,
            "https://images.unsplash.com/photo-1611293388250-580b08c4a145?q=80&w=1015&auto=format&fit=crop",
            Category::Chocolate,
            false,
            &["Chocolate", "Cherries", "Heavy cream", "Flour", "Sugar", "Eggs", "Kirsch"],
            &["Gluten", "Dairy", "Eggs"],
        ),
        product(
            "8",
            "Coffee Walnut Cake",
            "Rich coffee-flavored cake with walnuts and coffee buttercream, a coffee lover's dream.",
            6500,
            "https://images.unsplash.com/photo-1563729784474-d77dbb933a9e?q=80&w=987&auto=format&fit=crop",
            Category::Specialty,
            false,
            &["Coffee", "Walnuts", "Flour", "Sugar", "Butter", "Eggs"],
            &["Gluten", "Dairy", "Eggs", "Tree Nuts"],
        ),
    ]
}
