pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

// Shared state для всего приложения: конфигурация, клиент каталога и
// контейнеры состояния. Один поток управления, поэтому без Arc/блокировок -
// контейнеры передаются по ссылке туда, где они нужны.
pub struct AppState {
    pub config: config::Config,
    pub catalog: catalog::CatalogClient,
    pub auth: store::AuthStore,
    pub bookings: store::BookingStore,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Self, error::StorageError> {
        let storage = storage::LocalStorage::new(&config.storage.data_dir)?;
        let catalog = catalog::CatalogClient::from_config(&config.catalog);
        let auth = store::AuthStore::load(storage.clone());
        let bookings = store::BookingStore::load(storage);

        Ok(Self {
            config,
            catalog,
            auth,
            bookings,
        })
    }
}
