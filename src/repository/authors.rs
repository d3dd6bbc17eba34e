//! Author repository backed by PostgreSQL

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::Author,
    repository::AuthorRepository,
};

#[derive(Clone)]
pub struct PgAuthorRepository {
    pool: Pool<Postgres>,
}

impl PgAuthorRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, bio, birthdate
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    async fn create(&self, author: &mut Author) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO authors (name, bio, birthdate)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&author.name)
        .bind(&author.bio)
        .bind(author.birthdate)
        .fetch_one(&self.pool)
        .await?;

        author.id = id;
        Ok(())
    }
}
