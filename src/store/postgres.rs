//! PostgreSQL store. The `contacts` table lives in the schema named by `CONTACTS_SCHEMA`.

use super::{seed_contacts, ContactStore};
use crate::error::{AppError, ConfigError};
use crate::model::{Contact, ContactMutation};
use crate::search::filter_and_sort;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const COLUMNS: &str = "id, first, last, twitter, avatar, notes, favorite, created_at";

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: String,
    first: String,
    last: String,
    twitter: String,
    avatar: String,
    notes: String,
    favorite: bool,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(r: ContactRow) -> Self {
        Contact {
            id: r.id,
            first: r.first,
            last: r.last,
            twitter: r.twitter,
            avatar: r.avatar,
            notes: r.notes,
            favorite: r.favorite,
            created_at: r.created_at,
        }
    }
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    schema: String,
    table: String,
}

impl PgStore {
    /// Wrap an existing pool. Call [`PgStore::ensure_schema`] before first use.
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgStore {
            pool,
            schema: schema.to_string(),
            table: format!("{}.contacts", quote_ident(schema)),
        }
    }

    /// Create the schema and table if they do not exist.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(&self.schema)))
            .execute(&self.pool)
            .await?;
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY,
                first TEXT NOT NULL DEFAULT '',
                last TEXT NOT NULL DEFAULT '',
                twitter TEXT NOT NULL DEFAULT '',
                avatar TEXT NOT NULL DEFAULT '',
                notes TEXT NOT NULL DEFAULT '',
                favorite BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            self.table
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert the demo contacts when the table is empty. Returns the number inserted.
    pub async fn seed_if_empty(&self) -> Result<usize, AppError> {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", self.table))
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(0);
        }
        let contacts = seed_contacts();
        let mut tx = self.pool.begin().await?;
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            self.table, COLUMNS
        );
        for c in &contacts {
            sqlx::query(&sql)
                .bind(&c.id)
                .bind(&c.first)
                .bind(&c.last)
                .bind(&c.twitter)
                .bind(&c.avatar)
                .bind(&c.notes)
                .bind(c.favorite)
                .bind(c.created_at)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(contacts.len())
    }
}

#[async_trait]
impl ContactStore for PgStore {
    fn kind(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, AppError> {
        let sql = format!("SELECT {} FROM {}", COLUMNS, self.table);
        let rows: Vec<ContactRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(filter_and_sort(rows.into_iter().map(Contact::from), query))
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, self.table);
        let row: Option<ContactRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(Contact::from))
    }

    async fn create(&self, mutation: &ContactMutation) -> Result<Contact, AppError> {
        let mut contact = Contact::new_empty();
        contact.apply(mutation);
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            self.table, COLUMNS, COLUMNS
        );
        let row: ContactRow = sqlx::query_as(&sql)
            .bind(&contact.id)
            .bind(&contact.first)
            .bind(&contact.last)
            .bind(&contact.twitter)
            .bind(&contact.avatar)
            .bind(&contact.notes)
            .bind(contact.favorite)
            .bind(contact.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update(&self, id: &str, mutation: &ContactMutation) -> Result<Option<Contact>, AppError> {
        let sql = format!(
            r#"
            UPDATE {} SET
                first = COALESCE($2, first),
                last = COALESCE($3, last),
                twitter = COALESCE($4, twitter),
                avatar = COALESCE($5, avatar),
                notes = COALESCE($6, notes),
                favorite = COALESCE($7, favorite)
            WHERE id = $1
            RETURNING {}
            "#,
            self.table, COLUMNS
        );
        let row: Option<ContactRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(mutation.first.as_deref())
            .bind(mutation.last.as_deref())
            .bind(mutation.twitter.as_deref())
            .bind(mutation.avatar.as_deref())
            .bind(mutation.notes.as_deref())
            .bind(mutation.favorite)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Contact::from))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the database named in `database_url` if it does not exist yet, by connecting to the
/// `postgres` maintenance database on the same server.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| invalid_database_url(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| invalid_database_url("no database name in path".into()))?;
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.to_string()))
}

fn invalid_database_url(message: String) -> AppError {
    AppError::Config(ConfigError::InvalidValue {
        key: "DATABASE_URL",
        message,
    })
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_name() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/contacts").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "contacts");
    }

    #[test]
    fn keeps_query_parameters_on_admin_url() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost/contacts?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "contacts");
    }

    #[test]
    fn missing_path_is_a_config_error() {
        let err = parse_db_name_from_url("postgres://localhost").unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidValue { key: "DATABASE_URL", .. })
        ));
    }

    #[tokio::test]
    async fn unparsable_url_is_a_config_error() {
        let err = ensure_database_exists("postgres://localhost:notaport/contacts")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidValue { key: "DATABASE_URL", .. })
        ));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("contacts"), "\"contacts\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }
}
