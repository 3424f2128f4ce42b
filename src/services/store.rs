use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewSchool, School};

/// Errors raised by a school store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),
}

/// Persistence for schools
///
/// Handlers only see this trait, so the Postgres client can be swapped for
/// an in-memory fake in tests. Each call is a single statement; nothing is
/// retried.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Insert one school and return the identifier the store assigned
    async fn insert_school(&self, school: &NewSchool) -> Result<i64, StoreError>;

    /// Fetch every stored school
    async fn list_schools(&self) -> Result<Vec<School>, StoreError>;
}
