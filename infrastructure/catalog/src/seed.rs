use chrono::Utc;
use uuid::Uuid;

use crate::product::model::ProductModel;

/// A small demo catalog so a fresh process has something to show.
pub fn demo_catalog() -> Vec<ProductModel> {
    let now = Utc::now();
    [
        (
            "Wireless Earbuds",
            "Bluetooth 5.3 earbuds with charging case",
            "https://picsum.photos/seed/earbuds/400",
            59.99,
        ),
        (
            "Smart Watch",
            "Fitness tracking, heart rate and sleep monitoring",
            "https://picsum.photos/seed/watch/400",
            149.0,
        ),
        (
            "Leather Wallet",
            "Slim bifold wallet in full-grain leather",
            "https://picsum.photos/seed/wallet/400",
            35.5,
        ),
        (
            "Ceramic Mug",
            "350ml stoneware mug, dishwasher safe",
            "https://picsum.photos/seed/mug/400",
            12.0,
        ),
    ]
    .into_iter()
    .map(|(name, description, image_url, price)| ProductModel {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        price,
        created_at: now,
        updated_at: now,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::validation::validate_details;

    #[test]
    fn should_only_contain_valid_products() {
        for product in demo_catalog() {
            assert!(
                validate_details(
                    &product.name,
                    &product.description,
                    &product.image_url,
                    product.price
                )
                .is_ok(),
                "invalid seed product: {}",
                product.name
            );
        }
    }
}
