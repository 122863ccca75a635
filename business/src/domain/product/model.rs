use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::validation::validate_details;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_details(&props.name, &props.description, &props.image_url, props.price)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name.trim().to_string(),
            description: props.description.trim().to_string(),
            image_url: props.image_url.trim().to_string(),
            price: props.price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        image_url: String,
        price: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            image_url,
            price,
            created_at,
            updated_at,
        }
    }

    /// Case-insensitive substring match on name or description.
    /// A blank query matches every product.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
