use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{postgres::PgQueryResult, PgPool, Postgres, QueryBuilder};

use crate::{
    entities::experience::{Experience, ExperienceInsert},
    errors::AppError,
    pagination::{PageRequest, PaginatedResponse, PaginationMetadata},
    repositories::sqlx_repo::{RepositoryConfig, SqlxExperienceRepo},
    utils::deadline::with_deadline,
};

const EXPERIENCE_COLUMNS: &str =
    "id, title, description, company, start_date, end_date, created_at, updated_at, deleted_at";

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Probes the backing store
    async fn check_connection(&self) -> Result<(), AppError>;

    /// Persists a new experience and returns it with id and timestamps assigned
    async fn create_experience(&self, experience: &ExperienceInsert) -> Result<Experience, AppError>;

    /// Lists active experiences, newest first
    async fn list_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError>;

    /// Fetches an active experience
    async fn get_experience_by_id(&self, id: i64) -> Result<Experience, AppError>;

    /// Replaces the fields of an active experience
    async fn update_experience(&self, id: i64, experience: &ExperienceInsert) -> Result<Experience, AppError>;

    /// Marks an active experience as deleted
    async fn soft_delete_experience(&self, id: i64) -> Result<(), AppError>;

    /// Brings a soft-deleted experience back to the active set
    async fn restore_experience(&self, id: i64) -> Result<(), AppError>;

    /// Removes the row permanently, whatever its state
    async fn hard_delete_experience(&self, id: i64) -> Result<(), AppError>;

    /// Lists soft-deleted experiences, most recently deleted first
    async fn list_deleted_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError>;
}

/// Which side of the soft-delete line a query operates on.
///
/// Count and row queries take both their filter and sort key from here so
/// the reported total always describes the rows being paged through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Active,
    Deleted,
}

impl Scope {
    pub fn predicate(self) -> &'static str {
        match self {
            Scope::Active => "deleted_at IS NULL",
            Scope::Deleted => "deleted_at IS NOT NULL",
        }
    }

    pub fn order_by(self) -> &'static str {
        match self {
            Scope::Active => "created_at DESC, id DESC",
            Scope::Deleted => "deleted_at DESC, id DESC",
        }
    }

    pub fn contains(self, experience: &Experience) -> bool {
        match self {
            Scope::Active => !experience.is_deleted(),
            Scope::Deleted => experience.is_deleted(),
        }
    }
}

pub fn not_found() -> AppError {
    AppError::NotFound("Experience not found".into())
}

fn ensure_affected(result: PgQueryResult) -> Result<(), AppError> {
    if result.rows_affected() == 0 {
        Err(not_found())
    } else {
        Ok(())
    }
}

impl SqlxExperienceRepo {
    pub fn new(pool: PgPool, config: RepositoryConfig) -> Self {
        SqlxExperienceRepo { pool, config }
    }

    async fn list_in_scope(
        &self,
        scope: Scope,
        page: PageRequest,
    ) -> Result<PaginatedResponse<Experience>, AppError> {
        let count_sql = format!("SELECT COUNT(*) FROM experiences WHERE {}", scope.predicate());
        let total: i64 = sqlx::query_scalar(&count_sql)
            .fetch_one(&self.pool)
            .await?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM experiences WHERE {} ORDER BY {}",
            EXPERIENCE_COLUMNS,
            scope.predicate(),
            scope.order_by()
        ));

        let (limit, offset) = match page {
            PageRequest::All => (total, 0),
            PageRequest::Window(params) => {
                builder.push(" LIMIT ").push_bind(params.limit);
                builder.push(" OFFSET ").push_bind(params.offset);
                (params.limit, params.offset)
            }
        };

        let experiences: Vec<Experience> = builder
            .build_query_as::<Experience>()
            .fetch_all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            experiences,
            PaginationMetadata::new(limit, offset, total),
        ))
    }
}

#[async_trait]
impl ExperienceRepository for SqlxExperienceRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        with_deadline(self.config.query_timeout, async {
            sqlx::query("SELECT 1")
                .execute(&self.pool)
                .await
                .map(|_| ())
                .map_err(AppError::from)
        })
        .await
    }

    async fn create_experience(&self, experience: &ExperienceInsert) -> Result<Experience, AppError> {
        let sql = format!(
            r#"
            INSERT INTO experiences (title, description, company, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            EXPERIENCE_COLUMNS
        );

        with_deadline(self.config.query_timeout, async {
            sqlx::query_as::<_, Experience>(&sql)
                .bind(&experience.title)
                .bind(&experience.description)
                .bind(&experience.company)
                .bind(&experience.start_date)
                .bind(&experience.end_date)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::from)
        })
        .await
    }

    async fn list_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError> {
        with_deadline(self.config.query_timeout, self.list_in_scope(Scope::Active, page)).await
    }

    async fn get_experience_by_id(&self, id: i64) -> Result<Experience, AppError> {
        let sql = format!(
            "SELECT {} FROM experiences WHERE id = $1 AND {}",
            EXPERIENCE_COLUMNS,
            Scope::Active.predicate()
        );

        with_deadline(self.config.query_timeout, async {
            sqlx::query_as::<_, Experience>(&sql)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(not_found)
        })
        .await
    }

    async fn update_experience(&self, id: i64, experience: &ExperienceInsert) -> Result<Experience, AppError> {
        let sql = format!(
            r#"
            UPDATE experiences SET
                title = $1,
                description = $2,
                company = $3,
                start_date = $4,
                end_date = $5,
                updated_at = NOW()
            WHERE id = $6 AND deleted_at IS NULL
            RETURNING {}
            "#,
            EXPERIENCE_COLUMNS
        );

        with_deadline(self.config.query_timeout, async {
            // No returned row means nothing matched the active-row filter
            sqlx::query_as::<_, Experience>(&sql)
                .bind(&experience.title)
                .bind(&experience.description)
                .bind(&experience.company)
                .bind(&experience.start_date)
                .bind(&experience.end_date)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(not_found)
        })
        .await
    }

    async fn soft_delete_experience(&self, id: i64) -> Result<(), AppError> {
        with_deadline(self.config.query_timeout, async {
            let result = sqlx::query(
                r#"
                UPDATE experiences
                SET deleted_at = NOW(), updated_at = NOW()
                WHERE id = $1 AND deleted_at IS NULL
                "#
            )
            .bind(id)
            .execute(&self.pool)
            .await?;

            ensure_affected(result)
        })
        .await
    }

    async fn restore_experience(&self, id: i64) -> Result<(), AppError> {
        with_deadline(self.config.query_timeout, async {
            let result = sqlx::query(
                r#"
                UPDATE experiences
                SET deleted_at = NULL, updated_at = NOW()
                WHERE id = $1 AND deleted_at IS NOT NULL
                "#
            )
            .bind(id)
            .execute(&self.pool)
            .await?;

            ensure_affected(result)
        })
        .await
    }

    async fn hard_delete_experience(&self, id: i64) -> Result<(), AppError> {
        with_deadline(self.config.query_timeout, async {
            let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;

            ensure_affected(result)
        })
        .await
    }

    async fn list_deleted_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError> {
        with_deadline(self.config.query_timeout, self.list_in_scope(Scope::Deleted, page)).await
    }
}

#[async_trait]
impl<T> ExperienceRepository for Arc<T>
where
    T: ExperienceRepository + ?Sized,
{
    async fn check_connection(&self) -> Result<(), AppError> {
        (**self).check_connection().await
    }

    async fn create_experience(&self, experience: &ExperienceInsert) -> Result<Experience, AppError> {
        (**self).create_experience(experience).await
    }

    async fn list_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError> {
        (**self).list_experiences(page).await
    }

    async fn get_experience_by_id(&self, id: i64) -> Result<Experience, AppError> {
        (**self).get_experience_by_id(id).await
    }

    async fn update_experience(&self, id: i64, experience: &ExperienceInsert) -> Result<Experience, AppError> {
        (**self).update_experience(id, experience).await
    }

    async fn soft_delete_experience(&self, id: i64) -> Result<(), AppError> {
        (**self).soft_delete_experience(id).await
    }

    async fn restore_experience(&self, id: i64) -> Result<(), AppError> {
        (**self).restore_experience(id).await
    }

    async fn hard_delete_experience(&self, id: i64) -> Result<(), AppError> {
        (**self).hard_delete_experience(id).await
    }

    async fn list_deleted_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError> {
        (**self).list_deleted_experiences(page).await
    }
}
