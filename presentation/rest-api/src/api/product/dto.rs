use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description (cannot be empty)
    pub description: String,
    /// Absolute URL of the product image
    pub image_url: String,
    /// Unit price, zero or greater
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description (cannot be empty)
    pub description: String,
    /// Absolute URL of the product image
    pub image_url: String,
    /// Unit price, zero or greater
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Product image URL
    pub image_url: String,
    /// Unit price
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            image_url: product.image_url,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
