//! The movie catalog store.
//!
//! This module is the only owner of persisted state. It is responsible for:
//! 1.  Creating the `movie` and `director` tables idempotently at startup.
//! 2.  Executing parameterized statements handed to it by the HTTP handlers,
//!     through a small set of generic query primitives.

use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::SqlitePool;

/// A positional bind value for a parameterized statement.
///
/// Path parameters are bound as `Text` and coerced by SQLite column affinity,
/// so a non-numeric id simply matches no row instead of failing.
#[derive(Debug, Clone)]
pub enum BindValue {
    Integer(i64),
    Text(String),
    Null,
}

impl From<Option<String>> for BindValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => BindValue::Text(s),
            None => BindValue::Null,
        }
    }
}

/// The main store that manages the SQLite connection pool and the two-table schema.
pub struct MovieStore {
    pool: SqlitePool,
}

impl MovieStore {
    /// Connects to the database and runs the idempotent schema init.
    pub async fn connect(database_url: &str) -> Result<Self, anyhow::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        // Create the movie table (safe to run on every process start).
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS movie (
                movie_id INTEGER PRIMARY KEY AUTOINCREMENT,
                director_id INTEGER,
                movie_name TEXT,
                lead_actor TEXT
            )",
        )
        .execute(&pool)
        .await?;

        // The director table is read-only for this service; rows are seeded externally.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS director (
                director_id INTEGER PRIMARY KEY AUTOINCREMENT,
                director_name TEXT
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs a statement with no result (INSERT/UPDATE/DELETE).
    pub async fn execute(&self, sql: &str, binds: &[BindValue]) -> anyhow::Result<()> {
        bind_values(sqlx::query(sql), binds)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Fetches zero or one row.
    pub async fn fetch_optional(
        &self,
        sql: &str,
        binds: &[BindValue],
    ) -> anyhow::Result<Option<SqliteRow>> {
        let row = bind_values(sqlx::query(sql), binds)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Fetches all matching rows, in store-returned order.
    pub async fn fetch_all(&self, sql: &str, binds: &[BindValue]) -> anyhow::Result<Vec<SqliteRow>> {
        let rows = bind_values(sqlx::query(sql), binds)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

fn bind_values<'q>(
    mut query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    binds: &'q [BindValue],
) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    for bind in binds {
        query = match bind {
            BindValue::Integer(v) => query.bind(v),
            BindValue::Text(v) => query.bind(v.as_str()),
            BindValue::Null => query.bind(Option::<String>::None),
        };
    }
    query
}
