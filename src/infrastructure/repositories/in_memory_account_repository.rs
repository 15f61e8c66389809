use crate::domain::{
    account::{
        entity::{Account, NewAccount, StoredAccount},
        repository::AccountRepository,
        value_objects::Email,
    },
    shared::{errors::DomainError, ids::AccountId},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument};

/// Accounts kept in process memory, keyed by normalized email.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<String, StoredAccount>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, StoredAccount>>, DomainError> {
        self.accounts
            .lock()
            .map_err(|_| DomainError::InfrastructureError("account store lock poisoned".into()))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    #[instrument(skip(self, account), fields(account_id = %account.id))]
    async fn insert(&self, account: &NewAccount) -> Result<Account, DomainError> {
        let mut accounts = self.lock()?;
        if accounts.contains_key(account.email.as_str()) {
            return Err(DomainError::DuplicateEmail);
        }
        let created = account.to_account();
        accounts.insert(
            account.email.as_str().to_string(),
            StoredAccount {
                account: created.clone(),
                password_hash: account.password_hash.clone(),
            },
        );
        debug!(accounts = accounts.len(), "Account stored");
        Ok(created)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<StoredAccount>, DomainError> {
        Ok(self.lock()?.get(email.as_str()).cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        Ok(self
            .lock()?
            .values()
            .find(|stored| stored.account.id == id)
            .map(|stored| stored.account.clone()))
    }
}
