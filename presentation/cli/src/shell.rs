//! Menu actions and their execution against the product use cases.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use catalog::network::SimulatedNetworkInfo;
use catalog::product::local_data_source::InMemoryLocalDataSource;
use catalog::product::remote_data_source::SimulatedRemoteDataSource;
use catalog::product::repository::ProductRepositoryImpl;
use catalog::seed::demo_catalog;
use catalog::simulation::SimulationConfig;
use logger::TracingLogger;

use crate::cli::Cli;

/// Editable fields collected by the add and update prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: product.price,
        }
    }
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    View,
    Add,
    Update,
    Delete,
    Search,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::List,
        MenuChoice::View,
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::List => "List products",
            MenuChoice::View => "View product",
            MenuChoice::Add => "Add product",
            MenuChoice::Update => "Update product",
            MenuChoice::Delete => "Delete product",
            MenuChoice::Search => "Search products",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Whether the user has to pick an existing product first.
    pub fn needs_target(self) -> bool {
        matches!(
            self,
            MenuChoice::View | MenuChoice::Update | MenuChoice::Delete
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    List,
    Show(Uuid),
    Add(ProductDraft),
    Update(Uuid, ProductDraft),
    Delete(Uuid),
    Search(String),
    Exit,
}

#[derive(Debug)]
pub enum Outcome {
    Listed(Vec<Product>),
    Shown(Product),
    Added(Product),
    Updated(Product),
    Deleted(Uuid),
    Exit,
}

pub struct Shell {
    create: Arc<dyn CreateProductUseCase>,
    get_all: Arc<dyn GetAllProductsUseCase>,
    get_by_id: Arc<dyn GetProductByIdUseCase>,
    update: Arc<dyn UpdateProductUseCase>,
    delete: Arc<dyn DeleteProductUseCase>,
    search: Arc<dyn SearchProductsUseCase>,
}

impl Shell {
    pub fn new(repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        Self {
            create: Arc::new(CreateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            get_all: Arc::new(GetAllProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            get_by_id: Arc::new(GetProductByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            update: Arc::new(UpdateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            delete: Arc::new(DeleteProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            search: Arc::new(SearchProductsUseCaseImpl { repository, logger }),
        }
    }

    /// Wires the simulated catalog described by the command line flags.
    pub fn from_cli(cli: &Cli) -> Self {
        let config = SimulationConfig::new(Duration::from_millis(cli.latency_ms), cli.failure_rate);
        let seed = if cli.empty { Vec::new() } else { demo_catalog() };
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let repository = Arc::new(ProductRepositoryImpl::new(
            Arc::new(SimulatedRemoteDataSource::with_products(config, seed)),
            Arc::new(InMemoryLocalDataSource::new()),
            Arc::new(SimulatedNetworkInfo::default()),
            logger.clone(),
        ));
        Self::new(repository, logger)
    }

    /// Products offered by the pickers of targeted menu entries.
    pub async fn targets(&self) -> Result<Vec<Product>, ProductError> {
        self.get_all.execute().await
    }

    pub async fn execute(&self, action: Action) -> Result<Outcome, ProductError> {
        match action {
            Action::List => Ok(Outcome::Listed(self.get_all.execute().await?)),
            Action::Show(id) => {
                let product = self.get_by_id.execute(GetProductByIdParams { id }).await?;
                Ok(Outcome::Shown(product))
            }
            Action::Add(draft) => {
                let product = self
                    .create
                    .execute(CreateProductParams {
                        name: draft.name,
                        description: draft.description,
                        image_url: draft.image_url,
                        price: draft.price,
                    })
                    .await?;
                Ok(Outcome::Added(product))
            }
            Action::Update(id, draft) => {
                let product = self
                    .update
                    .execute(UpdateProductParams {
                        id,
                        name: draft.name,
                        description: draft.description,
                        image_url: draft.image_url,
                        price: draft.price,
                    })
                    .await?;
                Ok(Outcome::Updated(product))
            }
            Action::Delete(id) => {
                self.delete.execute(DeleteProductParams { id }).await?;
                Ok(Outcome::Deleted(id))
            }
            Action::Search(query) => {
                let products = self.search.execute(SearchProductsParams { query }).await?;
                Ok(Outcome::Listed(products))
            }
            Action::Exit => Ok(Outcome::Exit),
        }
    }
}
