use crate::{
    application::{
        accounts::use_case::AccountUseCase, recommendations::use_case::RecommendationUseCase,
        swipes::use_case::SwipeUseCase,
    },
    config::{Config, StorageBackend},
    domain::{
        account::repository::AccountRepository, catalogue::store::Catalogue,
        preference::repository::PreferenceRepository,
    },
    infrastructure::{
        catalogue,
        database::pool::{create_pool, run_migrations},
        repositories::{
            in_memory_account_repository::InMemoryAccountRepository,
            in_memory_preference_repository::InMemoryPreferenceRepository,
            sqlx_account_repository::SqlxAccountRepository,
            sqlx_preference_repository::SqlxPreferenceRepository,
        },
        security::password_hasher::{Argon2PasswordHasher, PasswordHasher},
    },
};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Present only for the SQLite backend.
    pub db: Option<SqlitePool>,
    pub config: Config,
    pub catalogue: Arc<Catalogue>,
    pub accounts: Arc<AccountUseCase>,
    pub swipes: Arc<SwipeUseCase>,
    pub recommendations: Arc<RecommendationUseCase>,
}

impl AppState {
    pub fn new(
        config: Config,
        db: Option<SqlitePool>,
        catalogue: Arc<Catalogue>,
        account_repo: Arc<dyn AccountRepository>,
        preference_repo: Arc<dyn PreferenceRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            db,
            config,
            accounts: Arc::new(AccountUseCase::new(
                account_repo.clone(),
                catalogue.clone(),
                hasher,
            )),
            swipes: Arc::new(SwipeUseCase::new(
                account_repo,
                preference_repo.clone(),
                catalogue.clone(),
            )),
            recommendations: Arc::new(RecommendationUseCase::new(
                preference_repo,
                catalogue.clone(),
            )),
            catalogue,
        }
    }

    /// Loads the catalogue, opens the configured storage and wires the use cases.
    pub async fn from_config(config: Config) -> anyhow::Result<Self> {
        let catalogue = Arc::new(catalogue::load(config.catalogue_dir.as_deref())?);
        let hasher = Arc::new(Argon2PasswordHasher::new(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
        )?);

        let state = match config.storage_backend {
            StorageBackend::Sqlite => {
                let db = create_pool(&config.database_url, config.database_max_connections).await?;
                run_migrations(&db, config.ignore_missing_migrations).await?;
                Self::new(
                    config,
                    Some(db.clone()),
                    catalogue,
                    Arc::new(SqlxAccountRepository::new(db.clone())),
                    Arc::new(SqlxPreferenceRepository::new(db)),
                    hasher,
                )
            }
            StorageBackend::Memory => Self::new(
                config,
                None,
                catalogue,
                Arc::new(InMemoryAccountRepository::new()),
                Arc::new(InMemoryPreferenceRepository::new()),
                hasher,
            ),
        };

        tracing::info!(
            backend = %state.config.storage_backend,
            cities = state.catalogue.cities().len(),
            places = state.catalogue.place_count(),
            "Application state ready"
        );
        Ok(state)
    }
}
