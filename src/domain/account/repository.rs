use super::entity::{Account, NewAccount, StoredAccount};
use super::value_objects::Email;
use crate::domain::shared::{errors::DomainError, ids::AccountId};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts the account unless its email is taken.
    ///
    /// The uniqueness check and the insert are one atomic step; a lost race
    /// surfaces as [`DomainError::DuplicateEmail`].
    async fn insert(&self, account: &NewAccount) -> Result<Account, DomainError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<StoredAccount>, DomainError>;
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, DomainError>;
}
