//! In-memory product catalog store.
//!
//! The store owns the product collection behind a [`tokio::sync::RwLock`];
//! every operation takes the lock for the duration of a single read or
//! mutation and never holds it across an await point. Ids come from a
//! monotonic counter kept under the same lock, so deleting a record and
//! creating a new one can never reissue an id.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store.
    #[schema(example = 1)]
    pub id: i64,
    /// Display name.
    #[schema(example = "Laptop Dell XPS 13")]
    pub name: String,
    /// Unit price.
    #[schema(example = 1299.99)]
    pub price: f64,
    /// Category slug, matched case-sensitively on listing.
    #[schema(example = "laptops")]
    pub category: String,
    /// Units in stock.
    #[schema(example = 15)]
    pub stock: i64,
}

/// Request body for `POST /api/products`.
///
/// All fields are optional at the wire level so that validation can report
/// the service's own 400 instead of a deserialization failure. Presence is
/// what counts: `price: 0` and `stock: 0` are valid inputs.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductInput {
    #[schema(example = "MacBook Pro M3")]
    pub name: Option<String>,
    #[schema(example = 2499.99)]
    pub price: Option<f64>,
    #[schema(example = "laptops")]
    pub category: Option<String>,
    #[schema(example = 10)]
    pub stock: Option<i64>,
}

/// A fully validated create request.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
}

impl ProductInput {
    /// Check all required fields for presence.
    ///
    /// Returns `None` if any of name, price, category, stock is absent from
    /// the input. Present-but-zero values pass.
    pub fn validate(self) -> Option<NewProduct> {
        Some(NewProduct {
            name: self.name?,
            price: self.price?,
            category: self.category?,
            stock: self.stock?,
        })
    }
}

/// Request body for `PUT /api/products/:id`.
///
/// Absent fields are left untouched by the merge; present fields are applied
/// even when zero.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductPatch {
    #[schema(example = "Laptop Dell XPS 13")]
    pub name: Option<String>,
    #[schema(example = 1399.99)]
    pub price: Option<f64>,
    #[schema(example = "laptops")]
    pub category: Option<String>,
    #[schema(example = 20)]
    pub stock: Option<i64>,
}

struct StoreInner {
    products: Vec<Product>,
    next_id: i64,
}

/// The in-memory product collection plus its CRUD operations.
pub struct ProductStore {
    inner: RwLock<StoreInner>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store seeded with the fixed demo catalog.
    pub fn with_seed() -> Self {
        let products = vec![
            Product {
                id: 1,
                name: "Laptop Dell XPS 13".to_string(),
                price: 1299.99,
                category: "laptops".to_string(),
                stock: 15,
            },
            Product {
                id: 2,
                name: "iPhone 15 Pro".to_string(),
                price: 999.99,
                category: "smartphones".to_string(),
                stock: 30,
            },
            Product {
                id: 3,
                name: "Samsung Galaxy S24".to_string(),
                price: 899.99,
                category: "smartphones".to_string(),
                stock: 25,
            },
            Product {
                id: 4,
                name: "Sony WH-1000XM5".to_string(),
                price: 349.99,
                category: "audio".to_string(),
                stock: 50,
            },
        ];
        let next_id = products.len() as i64 + 1;
        Self {
            inner: RwLock::new(StoreInner { products, next_id }),
        }
    }

    /// List all products, optionally filtered by exact category match.
    ///
    /// A filter matching nothing yields an empty vec, not an error.
    pub async fn list(&self, category: Option<&str>) -> Vec<Product> {
        let inner = self.inner.read().await;
        match category {
            Some(cat) => inner
                .products
                .iter()
                .filter(|p| p.category == cat)
                .cloned()
                .collect(),
            None => inner.products.clone(),
        }
    }

    /// Fetch a product by id.
    pub async fn get(&self, id: i64) -> Option<Product> {
        let inner = self.inner.read().await;
        inner.products.iter().find(|p| p.id == id).cloned()
    }

    /// Insert a new product and return it with its assigned id.
    pub async fn create(&self, new: NewProduct) -> Product {
        let mut inner = self.inner.write().await;
        let product = Product {
            id: inner.next_id,
            name: new.name,
            price: new.price,
            category: new.category,
            stock: new.stock,
        };
        inner.next_id += 1;
        inner.products.push(product.clone());
        product
    }

    /// Merge the patch into an existing product, field by field.
    ///
    /// Returns `None` when no product matches the id.
    pub async fn update(&self, id: i64, patch: ProductPatch) -> Option<Product> {
        let mut inner = self.inner.write().await;
        let product = inner.products.iter_mut().find(|p| p.id == id)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }

        Some(product.clone())
    }

    /// Remove a product by id. Returns `false` when no product matches.
    pub async fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        inner.products.len() != before
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
