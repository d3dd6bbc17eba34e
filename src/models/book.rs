//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Catalog book record matching the `books` table.
///
/// The identifier is assigned by the database on insert; clients never
/// supply it, and a freshly decoded record carries `id = 0` until created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Database-assigned identifier
    #[serde(default)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    /// Owning author; referential integrity is enforced by the schema
    pub author_id: i32,
    pub price: f64,
}
