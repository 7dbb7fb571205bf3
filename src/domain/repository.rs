use super::account_models::{Account, AccountUpdate, NewAccount};
use anyhow::Result;
use std::sync::Arc;

/// Abstraction for account persistence.
#[async_trait::async_trait]
pub trait AccountRepository: Send + Sync {
    // ---
    /// Insert a new account. Fails if the email is already taken.
    async fn create(&self, account: NewAccount) -> Result<Account>;

    /// Get an account by email.
    async fn get(&self, email: &str) -> Result<Option<Account>>;

    /// List accounts, newest first, optionally restricted to one status.
    async fn list(&self, status: Option<&str>) -> Result<Vec<Account>>;

    /// Apply a partial update. Returns `None` when the account does not exist.
    async fn update(&self, email: &str, changes: AccountUpdate) -> Result<Option<Account>>;

    /// Delete an account. Returns whether a row was removed.
    async fn delete(&self, email: &str) -> Result<bool>;

    /// Number of stored accounts.
    async fn count(&self) -> Result<i64>;
}

/// Type alias for any backend that implements AccountRepository.
pub type RepositoryPtr = Arc<dyn AccountRepository>;
