use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Searching products for: {:?}", params.query));

        let products: Vec<Product> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter(|p| p.matches(&params.query))
            .collect();

        self.logger
            .debug(&format!("Search matched {} products", products.len()));
        Ok(products)
    }
}
