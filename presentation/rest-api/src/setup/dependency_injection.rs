use std::sync::Arc;

use catalog::network::SimulatedNetworkInfo;
use catalog::product::local_data_source::InMemoryLocalDataSource;
use catalog::product::remote_data_source::SimulatedRemoteDataSource;
use catalog::product::repository::ProductRepositoryImpl;
use catalog::seed::demo_catalog;
use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub simulation_api: crate::api::simulation::routes::SimulationApi,
    pub network: Arc<SimulatedNetworkInfo>,
}

impl DependencyContainer {
    pub fn new(config: &CatalogConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let seed = if config.seed {
            demo_catalog()
        } else {
            Vec::new()
        };
        let remote = Arc::new(SimulatedRemoteDataSource::with_products(
            config.simulation.clone(),
            seed,
        ));
        let local = Arc::new(InMemoryLocalDataSource::new());
        let network = Arc::new(SimulatedNetworkInfo::new(!config.start_offline));
        let product_repository = Arc::new(ProductRepositoryImpl::new(
            remote,
            local,
            network.clone(),
            logger.clone(),
        ));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            search_use_case,
        );
        let health_api = crate::api::health::routes::Api::new(network.clone());
        let simulation_api = crate::api::simulation::routes::SimulationApi::new(network.clone());

        Self {
            health_api,
            product_api,
            simulation_api,
            network,
        }
    }
}
