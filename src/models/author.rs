//! Author model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author record matching the `authors` table.
///
/// Authors are immutable once registered: the service exposes create and
/// lookup only, no update or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    /// Database-assigned identifier
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub birthdate: DateTime<Utc>,
}
