use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::models::{NewSchool, School};
use crate::services::store::{SchoolStore, StoreError};

const CREATE_SCHOOLS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS schools (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        address VARCHAR(255) NOT NULL,
        latitude DOUBLE PRECISION NOT NULL,
        longitude DOUBLE PRECISION NOT NULL
    )
"#;

/// PostgreSQL-backed school store
///
/// Wraps a connection pool shared by every worker. The pool owns sizing,
/// reuse and acquire timeouts.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect using the database section of the settings
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        tracing::info!(
            "Connecting to PostgreSQL at {}:{}/{} as {}",
            settings.host,
            settings.port,
            settings.name,
            settings.user
        );

        let options = PgConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.name);

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(settings.idle_timeout_secs))
            .test_before_acquire(true)
            .connect_with(options)
            .await?;

        let client = Self::new(pool);

        if settings.init_schema {
            client.ensure_schema().await?;
        }

        Ok(client)
    }

    /// Create the schools table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_SCHOOLS_TABLE).execute(&self.pool).await?;
        tracing::debug!("schools table is present");
        Ok(())
    }
}

fn school_from_row(row: &PgRow) -> Result<School, sqlx::Error> {
    Ok(School {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
    })
}

#[async_trait]
impl SchoolStore for PostgresClient {
    async fn insert_school(&self, school: &NewSchool) -> Result<i64, StoreError> {
        let query = r#"
            INSERT INTO schools (name, address, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(school.name())
            .bind(school.address())
            .bind(school.latitude())
            .bind(school.longitude())
            .fetch_one(&self.pool)
            .await?;

        let id: i64 = row.try_get("id")?;

        tracing::debug!("Inserted school {} ({})", id, school.name());

        Ok(id)
    }

    async fn list_schools(&self) -> Result<Vec<School>, StoreError> {
        // Ordered by id so schools at equal distance rank in insertion order
        let query = r#"
            SELECT id, name, address, latitude, longitude
            FROM schools
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let schools = rows
            .iter()
            .map(school_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Fetched {} schools", schools.len());

        Ok(schools)
    }
}
