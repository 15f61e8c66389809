use crate::domain::{
    account::{
        entity::{Account, NewAccount, StoredAccount},
        repository::AccountRepository,
        value_objects::Email,
    },
    shared::{errors::DomainError, ids::AccountId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    password_hash: String,
    city_id: String,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for StoredAccount {
    fn from(r: AccountRow) -> Self {
        StoredAccount {
            account: Account {
                id: AccountId::from(r.id),
                email: r.email,
                city_id: r.city_id,
                first_name: r.first_name,
                last_name: r.last_name,
                created_at: r.created_at,
            },
            password_hash: r.password_hash,
        }
    }
}

pub struct SqlxAccountRepository {
    pub pool: SqlitePool,
}

impl SqlxAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        info!("Initializing SqlxAccountRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for SqlxAccountRepository {
    #[instrument(skip(self, account), fields(account_id = %account.id, city_id = %account.city_id))]
    async fn insert(&self, account: &NewAccount) -> Result<Account, DomainError> {
        // The unique index on email makes check-then-insert a single statement.
        let result = sqlx::query(
            "INSERT INTO accounts (id, email, password_hash, city_id, first_name, last_name, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(account.id.as_uuid())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(&account.city_id)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!("Account stored");
                Ok(account.to_account())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                warn!("Registration rejected: email already registered");
                Err(DomainError::DuplicateEmail)
            }
            Err(e) => Err(DomainError::InfrastructureError(e.to_string())),
        }
    }

    #[instrument(skip(self, email))]
    async fn find_by_email(&self, email: &Email) -> Result<Option<StoredAccount>, DomainError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, email, password_hash, city_id, first_name, last_name, created_at FROM accounts WHERE email = ?",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row.map(StoredAccount::from))
    }

    #[instrument(skip(self), fields(account_id = %id))]
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, email, password_hash, city_id, first_name, last_name, created_at FROM accounts WHERE id = ?",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row.map(|r| StoredAccount::from(r).account))
    }
}
