use anyhow::Result;
use std::sync::Arc;

use super::accounts;
use super::lifecycle::Database;
use crate::domain::{Account, AccountRepository, AccountUpdate, NewAccount, RepositoryPtr};

/// Repository over the process-wide database installed at startup.
pub fn create_postgres_repository() -> Result<RepositoryPtr> {
    // ---
    let db = super::lifecycle::database()?;
    Ok(Arc::new(PostgresRepository::new(db)))
}

/// Each call runs in its own scoped session; writes commit before returning.
///
/// Session closures must own what they capture, hence the `to_owned` calls.
pub struct PostgresRepository {
    // ---
    db: Database,
}

impl PostgresRepository {
    // ---
    pub fn new(db: Database) -> Self {
        // ---
        Self { db }
    }
}

#[async_trait::async_trait]
impl AccountRepository for PostgresRepository {
    // ---
    async fn create(&self, account: NewAccount) -> Result<Account> {
        // ---
        self.db
            .with_session(|session| {
                Box::pin(async move {
                    let account = accounts::insert(session, account).await?;
                    session.commit().await?;
                    Ok::<_, anyhow::Error>(account)
                })
            })
            .await
    }

    async fn get(&self, email: &str) -> Result<Option<Account>> {
        // ---
        let email = email.to_owned();
        self.db
            .with_session(|session| {
                Box::pin(async move { accounts::find_by_email(session, &email).await })
            })
            .await
    }

    async fn list(&self, status: Option<&str>) -> Result<Vec<Account>> {
        // ---
        let status = status.map(str::to_owned);
        self.db
            .with_session(|session| {
                Box::pin(async move { accounts::list(session, status.as_deref()).await })
            })
            .await
    }

    async fn update(&self, email: &str, changes: AccountUpdate) -> Result<Option<Account>> {
        // ---
        let email = email.to_owned();
        self.db
            .with_session(|session| {
                Box::pin(async move {
                    let updated = accounts::update(session, &email, changes).await?;
                    session.commit().await?;
                    Ok::<_, anyhow::Error>(updated)
                })
            })
            .await
    }

    async fn delete(&self, email: &str) -> Result<bool> {
        // ---
        let email = email.to_owned();
        self.db
            .with_session(|session| {
                Box::pin(async move {
                    let removed = accounts::delete(session, &email).await?;
                    session.commit().await?;
                    Ok::<_, anyhow::Error>(removed)
                })
            })
            .await
    }

    async fn count(&self) -> Result<i64> {
        // ---
        self.db
            .with_session(|session| Box::pin(accounts::count(session)))
            .await
    }
}
