use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validation::validate_details;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        validate_details(
            &params.name,
            &params.description,
            &params.image_url,
            params.price,
        )?;

        // Verify product exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let updated_product = Product::from_repository(
            existing.id,
            params.name.trim().to_string(),
            params.description.trim().to_string(),
            params.image_url.trim().to_string(),
            params.price,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository
            .save(&updated_product)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(id: Uuid, name: &str) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: name.to_string(),
            description: "Mechanical keyboard, brown switches".to_string(),
            image_url: "https://images.example.com/keyboard.png".to_string(),
            price: 129.0,
        }
    }

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let product_id = Uuid::new_v4();
        let created = Utc::now() - Duration::days(3);
        let mut mock_repo = MockProductRepo::new();

        mock_repo.expect_get_by_id().returning(move |_| {
            Ok(Product::from_repository(
                product_id,
                "Old Keyboard".to_string(),
                "Membrane keyboard".to_string(),
                "https://images.example.com/old.png".to_string(),
                20.0,
                created,
                created,
            ))
        });
        mock_repo
            .expect_save()
            .withf(move |p| p.id == product_id && p.name == "Keyboard")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(product_id, "Keyboard")).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.price, 129.0);
        assert_eq!(product.created_at, created);
        assert!(product.updated_at > created);
    }

    #[tokio::test]
    async fn should_reject_update_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), "")).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_update_when_image_url_invalid() {
        let mock_repo = MockProductRepo::new();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut bad = params(Uuid::new_v4(), "Keyboard");
        bad.image_url = "not a url".to_string();
        let result = use_case.execute(bad).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidImageUrl));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), "Keyboard")).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
