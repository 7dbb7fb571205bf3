//! Queries against the `accounts` table, run inside a caller's [`Session`].
//!
//! None of these commit; the caller decides when the unit of work is done.

use super::session::Session;
use crate::domain::{Account, AccountUpdate, NewAccount};
use anyhow::Result;

const COLUMNS: &str = r#"email, "user", password, token, usage_limit, created_at, status, id"#;

#[derive(sqlx::FromRow)]
struct AccountRow {
    email: String,
    user: String,
    password: Option<String>,
    token: String,
    usage_limit: Option<String>,
    created_at: Option<String>,
    status: String,
    id: i64,
}

impl From<AccountRow> for Account {
    fn from(r: AccountRow) -> Self {
        Account {
            email: r.email,
            user: r.user,
            password: r.password,
            token: r.token,
            usage_limit: r.usage_limit,
            created_at: r.created_at,
            status: r.status,
            id: r.id,
        }
    }
}

pub async fn insert(session: &mut Session, account: NewAccount) -> Result<Account> {
    // ---
    let account = account.into_account();

    sqlx::query(
        r#"INSERT INTO accounts (email, "user", password, token, usage_limit, created_at, status, id)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
    )
    .bind(&account.email)
    .bind(&account.user)
    .bind(&account.password)
    .bind(&account.token)
    .bind(&account.usage_limit)
    .bind(&account.created_at)
    .bind(&account.status)
    .bind(account.id)
    .execute(session.connection().await?)
    .await?;

    Ok(account)
}

pub async fn find_by_email(session: &mut Session, email: &str) -> Result<Option<Account>> {
    // ---
    let row = sqlx::query_as::<_, AccountRow>(&format!(
        "SELECT {COLUMNS} FROM accounts WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(session.connection().await?)
    .await?;

    Ok(row.map(Account::from))
}

/// Newest first (by the millisecond `id`).
pub async fn list(session: &mut Session, status: Option<&str>) -> Result<Vec<Account>> {
    // ---
    let rows = match status {
        Some(status) => {
            sqlx::query_as::<_, AccountRow>(&format!(
                "SELECT {COLUMNS} FROM accounts WHERE status = $1 ORDER BY id DESC"
            ))
            .bind(status)
            .fetch_all(session.connection().await?)
            .await?
        }
        None => {
            sqlx::query_as::<_, AccountRow>(&format!(
                "SELECT {COLUMNS} FROM accounts ORDER BY id DESC"
            ))
            .fetch_all(session.connection().await?)
            .await?
        }
    };

    Ok(rows.into_iter().map(Account::from).collect())
}

/// Locks the row, merges `changes` and writes it back.
pub async fn update(
    session: &mut Session,
    email: &str,
    changes: AccountUpdate,
) -> Result<Option<Account>> {
    // ---
    let row = sqlx::query_as::<_, AccountRow>(&format!(
        "SELECT {COLUMNS} FROM accounts WHERE email = $1 FOR UPDATE"
    ))
    .bind(email)
    .fetch_optional(session.connection().await?)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut account = Account::from(row);
    if changes.is_empty() {
        return Ok(Some(account));
    }
    changes.apply(&mut account);

    sqlx::query(
        r#"UPDATE accounts
           SET "user" = $1, password = $2, token = $3, usage_limit = $4, status = $5
           WHERE email = $6"#,
    )
    .bind(&account.user)
    .bind(&account.password)
    .bind(&account.token)
    .bind(&account.usage_limit)
    .bind(&account.status)
    .bind(&account.email)
    .execute(session.connection().await?)
    .await?;

    Ok(Some(account))
}

pub async fn delete(session: &mut Session, email: &str) -> Result<bool> {
    // ---
    let result = sqlx::query("DELETE FROM accounts WHERE email = $1")
        .bind(email)
        .execute(session.connection().await?)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count(session: &mut Session) -> Result<i64> {
    // ---
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
        .fetch_one(session.connection().await?)
        .await?;

    Ok(n)
}
