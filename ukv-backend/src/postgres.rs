//! # Relational-Store Adapter
//!
//! Purpose: back the capability contract with a PostgreSQL table of
//! `(key, value)` text pairs.
//!
//! Connection parameters come from the process environment — `PG_HOST`,
//! `PG_USER`, `PG_PASS` — with no defaults; a missing variable surfaces
//! as an error when the handle is created. `init` provisions the
//! container with a single idempotent `CREATE TABLE IF NOT EXISTS` and
//! never touches prior contents.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use crate::backend::Backend;
use crate::error::{StoreError, StoreResult};

const ENV_HOST: &str = "PG_HOST";
const ENV_USER: &str = "PG_USER";
const ENV_PASS: &str = "PG_PASS";

/// Container used when no `init` has named one on this handle.
const DEFAULT_CONTAINER: &str = "storage";

/// Relational store handle: a connection pool plus the container the
/// handle currently addresses.
pub struct PostgresStore {
    pool: PgPool,
    table: String,
}

impl PostgresStore {
    /// Connects using the `PG_HOST`/`PG_USER`/`PG_PASS` environment.
    pub async fn connect_from_env() -> StoreResult<Self> {
        let host = require_env(ENV_HOST)?;
        let user = require_env(ENV_USER)?;
        let pass = require_env(ENV_PASS)?;

        let options = PgConnectOptions::new()
            .host(&host)
            .username(&user)
            .password(&pass);

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(PostgresStore {
            pool,
            table: DEFAULT_CONTAINER.to_string(),
        })
    }
}

fn require_env(name: &'static str) -> StoreResult<String> {
    std::env::var(name).map_err(|_| StoreError::MissingEnv(name))
}

/// Checks that `id` is a plain identifier safe to splice into DDL.
///
/// Letters, digits, and underscores only, not starting with a digit.
fn container_ident(id: &str) -> StoreResult<&str> {
    let mut chars = id.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(id)
    } else {
        Err(StoreError::InvalidContainerId(id.to_string()))
    }
}

fn create_table_sql(table: &str) -> String {
    format!("CREATE TABLE IF NOT EXISTS \"{table}\" (key TEXT PRIMARY KEY, value TEXT NOT NULL)")
}

fn select_sql(table: &str) -> String {
    format!("SELECT value FROM \"{table}\" WHERE key = $1")
}

fn upsert_sql(table: &str) -> String {
    format!(
        "INSERT INTO \"{table}\" (key, value) VALUES ($1, $2) \
         ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value"
    )
}

fn delete_sql(table: &str) -> String {
    format!("DELETE FROM \"{table}\" WHERE key = $1")
}

#[async_trait]
impl Backend for PostgresStore {
    async fn init(&mut self, id: &str) -> StoreResult<()> {
        let table = container_ident(id)?;
        sqlx::query(&create_table_sql(table))
            .execute(&self.pool)
            .await?;
        info!(container = table, "relational container ensured");
        self.table = table.to_string();
        Ok(())
    }

    async fn get(&mut self, key: &str) -> StoreResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar(&select_sql(&self.table))
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        sqlx::query(&upsert_sql(&self.table))
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&mut self, key: &str) -> StoreResult<bool> {
        let result = sqlx::query(&delete_sql(&self.table))
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert_eq!(container_ident("storage").unwrap(), "storage");
        assert_eq!(container_ident("user_values_2").unwrap(), "user_values_2");
        assert_eq!(container_ident("_private").unwrap(), "_private");
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(matches!(
            container_ident(""),
            Err(StoreError::InvalidContainerId(_))
        ));
    }

    #[test]
    fn rejects_quoting_and_spaces() {
        for id in ["a\"b", "a b", "a;drop", "1table", "tab-le"] {
            assert!(
                matches!(container_ident(id), Err(StoreError::InvalidContainerId(_))),
                "accepted {id:?}"
            );
        }
    }

    #[test]
    fn builds_idempotent_create() {
        assert_eq!(
            create_table_sql("storage"),
            "CREATE TABLE IF NOT EXISTS \"storage\" (key TEXT PRIMARY KEY, value TEXT NOT NULL)"
        );
    }

    #[test]
    fn builds_keyed_statements() {
        assert_eq!(
            select_sql("storage"),
            "SELECT value FROM \"storage\" WHERE key = $1"
        );
        assert_eq!(
            delete_sql("storage"),
            "DELETE FROM \"storage\" WHERE key = $1"
        );
        assert!(upsert_sql("storage").contains("ON CONFLICT (key) DO UPDATE"));
    }
}
