use url::Url;

use super::errors::ProductError;

/// Checks the user-editable fields of a product.
///
/// Shared by creation and update so both paths reject the same input.
pub fn validate_details(
    name: &str,
    description: &str,
    image_url: &str,
    price: f64,
) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }

    if description.trim().is_empty() {
        return Err(ProductError::DescriptionEmpty);
    }

    if Url::parse(image_url.trim()).is_err() {
        return Err(ProductError::InvalidImageUrl);
    }

    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "https://images.example.com/mug.png";

    #[test]
    fn should_accept_valid_details() {
        assert!(validate_details("Mug", "Ceramic mug", IMAGE, 9.5).is_ok());
    }

    #[test]
    fn should_accept_free_product() {
        assert!(validate_details("Sticker", "Free sticker", IMAGE, 0.0).is_ok());
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = validate_details("   ", "Ceramic mug", IMAGE, 9.5);
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_when_description_empty() {
        let result = validate_details("Mug", "", IMAGE, 9.5);
        assert!(matches!(result.unwrap_err(), ProductError::DescriptionEmpty));
    }

    #[test]
    fn should_reject_when_image_url_is_relative() {
        let result = validate_details("Mug", "Ceramic mug", "images/mug.png", 9.5);
        assert!(matches!(result.unwrap_err(), ProductError::InvalidImageUrl));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = validate_details("Mug", "Ceramic mug", IMAGE, -0.01);
        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[test]
    fn should_reject_nan_price() {
        let result = validate_details("Mug", "Ceramic mug", IMAGE, f64::NAN);
        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }
}
