//! DDL for the tables this crate owns.

use super::engine::Engine;
use anyhow::Result;

/// Executed in order, inside one transaction. Every statement is idempotent.
pub const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS accounts (
        email       VARCHAR(255) PRIMARY KEY,
        "user"      VARCHAR(255) NOT NULL,
        password    VARCHAR(255),
        token       VARCHAR(255) NOT NULL,
        usage_limit TEXT,
        created_at  TEXT,
        status      VARCHAR(50)  NOT NULL DEFAULT 'active',
        id          BIGINT       NOT NULL
    )"#,
    "CREATE INDEX IF NOT EXISTS ix_accounts_id ON accounts (id)",
];

/// Advisory lock key serializing concurrent `create_all` calls.
const SCHEMA_LOCK_KEY: i64 = 0x6163_636f_756e_7473; // "accounts"

/// Creates every table and index that does not exist yet.
///
/// `IF NOT EXISTS` alone can still race in PostgreSQL, so the DDL runs under
/// a transaction-scoped advisory lock.
pub async fn create_all(engine: &Engine) -> Result<()> {
    // ---
    let mut tx = engine.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn schema_matches_accounts_layout() {
        // ---
        let table = SCHEMA[0];
        for column in [
            "email",
            "\"user\"",
            "password",
            "token",
            "usage_limit",
            "created_at",
            "status",
            "id",
        ] {
            assert!(table.contains(column), "missing column {column}");
        }
        assert!(table.contains("DEFAULT 'active'"));
        assert!(SCHEMA.iter().all(|s| s.contains("IF NOT EXISTS")));
    }
}
