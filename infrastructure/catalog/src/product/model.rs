use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::product::model::Product;

/// Wire and cache representation of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductModel {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductModel {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }

    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.image_url,
            self.price,
            self.created_at,
            self.updated_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let now = Utc::now();
        let model = ProductModel {
            id: Uuid::new_v4(),
            name: "Backpack".to_string(),
            description: "20L daypack".to_string(),
            image_url: "https://images.example.com/backpack.png".to_string(),
            price: 49.5,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json["imageUrl"], "https://images.example.com/backpack.png");
        assert_eq!(json["price"], 49.5);
        assert!(json.get("image_url").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn should_parse_payload_from_remote() {
        let payload = r#"{
            "id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
            "name": "Water Bottle",
            "description": "Insulated steel bottle",
            "imageUrl": "https://images.example.com/bottle.png",
            "price": 25,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#;

        let product = serde_json::from_str::<ProductModel>(payload)
            .unwrap()
            .into_domain();

        assert_eq!(product.name, "Water Bottle");
        assert_eq!(product.price, 25.0);
        assert!(product.updated_at > product.created_at);
    }
}
