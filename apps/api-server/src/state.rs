//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::ports::{
    CategoryRepository, EditLogRepository, LoginLogRepository, NotificationRepository,
    ObjectStore, PersonRepository, PublicationRepository, ReviewActionRepository,
    StatusHistoryRepository, UserRepository, VenueRepository,
};
use folio_infra::database::{
    PostgresCategoryRepository, PostgresEditLogRepository, PostgresLoginLogRepository,
    PostgresNotificationRepository, PostgresPersonRepository, PostgresPublicationRepository,
    PostgresReviewActionRepository, PostgresStatusHistoryRepository, PostgresUserRepository,
    PostgresVenueRepository,
};
use folio_infra::{HttpObjectStore, InMemoryObjectStore, StorageConfig, connect};

use crate::config::AppConfig;

/// Shared application state: one repository handle per table plus the
/// object store.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub publications: Arc<dyn PublicationRepository>,
    pub persons: Arc<dyn PersonRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub venues: Arc<dyn VenueRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub login_logs: Arc<dyn LoginLogRepository>,
    pub edit_logs: Arc<dyn EditLogRepository>,
    pub status_history: Arc<dyn StatusHistoryRepository>,
    pub review_actions: Arc<dyn ReviewActionRepository>,
    pub storage: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Build the application state against the hosted database.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db = connect(&config.database).await?;

        let storage: Arc<dyn ObjectStore> = match StorageConfig::from_env() {
            Some(storage_config) => Arc::new(HttpObjectStore::new(storage_config)),
            None => {
                tracing::warn!(
                    "STORAGE_URL not set. Avatar uploads will use the in-memory store."
                );
                Arc::new(InMemoryObjectStore::new())
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            publications: Arc::new(PostgresPublicationRepository::new(db.clone())),
            persons: Arc::new(PostgresPersonRepository::new(db.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
            venues: Arc::new(PostgresVenueRepository::new(db.clone())),
            notifications: Arc::new(PostgresNotificationRepository::new(db.clone())),
            login_logs: Arc::new(PostgresLoginLogRepository::new(db.clone())),
            edit_logs: Arc::new(PostgresEditLogRepository::new(db.clone())),
            status_history: Arc::new(PostgresStatusHistoryRepository::new(db.clone())),
            review_actions: Arc::new(PostgresReviewActionRepository::new(db)),
            storage,
        })
    }
}
