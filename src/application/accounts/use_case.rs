use super::dto::{LoginRequest, RegisterAccountRequest};
use crate::domain::{
    account::{
        entity::{Account, NewAccount},
        repository::AccountRepository,
        value_objects::{Email, NewPassword},
    },
    catalogue::store::Catalogue,
    shared::{errors::DomainError, ids::AccountId},
};
use crate::infrastructure::security::password_hasher::PasswordHasher;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub struct AccountUseCase {
    repository: Arc<dyn AccountRepository>,
    catalogue: Arc<Catalogue>,
    hasher: Arc<dyn PasswordHasher>,
    // Verified against when the email is unknown so both failure paths cost a hash.
    decoy_hash: OnceCell<String>,
}

impl AccountUseCase {
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        catalogue: Arc<Catalogue>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            repository,
            catalogue,
            hasher,
            decoy_hash: OnceCell::new(),
        }
    }

    /// Creates an account after validating email, password and city, in that order.
    pub async fn register(&self, request: RegisterAccountRequest) -> Result<Account, DomainError> {
        let email = Email::parse(&request.email)?;
        let password = NewPassword::new(&request.password)?;
        let city_id = request.city_id.trim();
        if city_id.is_empty() {
            return Err(DomainError::ValidationError("City is required".into()));
        }
        if self.catalogue.city(city_id).is_none() {
            return Err(DomainError::UnknownCity(city_id.to_string()));
        }

        let hasher = self.hasher.clone();
        let raw = password.expose().to_string();
        let password_hash = run_blocking(move || hasher.hash(&raw)).await?;

        let account = self
            .repository
            .insert(&NewAccount {
                id: AccountId::new(),
                email,
                password_hash,
                city_id: city_id.to_string(),
                first_name: optional_name(request.first_name.as_deref()),
                last_name: optional_name(request.last_name.as_deref()),
                created_at: Utc::now(),
            })
            .await?;
        tracing::info!(account_id = %account.id, city_id = %account.city_id, "Account registered");
        Ok(account)
    }

    /// Checks credentials. Unknown email and wrong password are indistinguishable.
    pub async fn authenticate(&self, request: LoginRequest) -> Result<Account, DomainError> {
        let email = Email::normalized(&request.email);
        if email.as_str().is_empty() || request.password.is_empty() {
            return Err(DomainError::ValidationError(
                "Email and password are required".into(),
            ));
        }

        let stored = self.repository.find_by_email(&email).await?;
        let (hash, account) = match stored {
            Some(stored) => (stored.password_hash, Some(stored.account)),
            None => (self.decoy_hash().await?, None),
        };

        let hasher = self.hasher.clone();
        let raw = request.password;
        let valid = run_blocking(move || hasher.verify(&raw, &hash)).await?;

        match account {
            Some(account) if valid => Ok(account),
            _ => {
                tracing::debug!("Authentication failed");
                Err(DomainError::InvalidCredentials)
            }
        }
    }

    /// Resolves the account behind an authenticated identity.
    pub async fn current_account(&self, id: AccountId) -> Result<Account, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::Unauthorized)
    }

    async fn decoy_hash(&self) -> Result<String, DomainError> {
        let hash = self
            .decoy_hash
            .get_or_try_init(|| {
                let hasher = self.hasher.clone();
                run_blocking(move || hasher.hash(&AccountId::new().to_string()))
            })
            .await?;
        Ok(hash.clone())
    }
}

/// Trimmed display name; blank counts as absent.
fn optional_name(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

async fn run_blocking<T, F>(task: F) -> Result<T, DomainError>
where
    F: FnOnce() -> Result<T, DomainError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| DomainError::InfrastructureError(format!("Password task failed: {}", e)))?
}
