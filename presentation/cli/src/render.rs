use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;

use crate::shell::Outcome;

pub fn render_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// One line per product, numbered from 1 the way the menu refers to them.
pub fn render_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }
    products
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>3}. {} - {}", i + 1, p.name, render_price(p.price)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_detail(product: &Product) -> String {
    format!(
        "{}\n  {}\n  Price: {}\n  Image: {}\n  Id:    {}",
        product.name,
        product.description,
        render_price(product.price),
        product.image_url,
        product.id
    )
}

pub fn render_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Listed(products) => Some(render_list(products)),
        Outcome::Shown(product) => Some(render_detail(product)),
        Outcome::Added(product) => Some(format!("Added {}.", product.name)),
        Outcome::Updated(product) => Some(format!("Updated {}.", product.name)),
        Outcome::Deleted(id) => Some(format!("Deleted product {}.", id)),
        Outcome::Exit => None,
    }
}

/// Human readable message for a failed action.
pub fn render_error(error: &ProductError) -> String {
    match error {
        ProductError::NameEmpty => "Name cannot be empty.".to_string(),
        ProductError::DescriptionEmpty => "Description cannot be empty.".to_string(),
        ProductError::InvalidImageUrl => {
            "Image must be an absolute URL, e.g. https://example.com/item.png.".to_string()
        }
        ProductError::InvalidPrice => "Price must be a number of zero or more.".to_string(),
        ProductError::NotFound => "Product not found.".to_string(),
        ProductError::Repository(RepositoryError::Server) => {
            "The catalog server failed. Try again.".to_string()
        }
        ProductError::Repository(RepositoryError::Cache) => {
            "Offline and nothing is cached yet.".to_string()
        }
        ProductError::Repository(RepositoryError::Offline) => {
            "Changes need a connection to the catalog server.".to_string()
        }
        ProductError::Repository(other) => format!("Unexpected catalog error ({}).", other),
    }
}
