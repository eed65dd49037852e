//! CRUD execution against PostgreSQL. Errors stay as `sqlx::Error` here;
//! handlers translate them into the per-operation API messages.

use crate::form::ResourceForm;
use crate::resource::Resource;
use crate::sql;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::{FromRow, PgPool};

/// One stored row with its owner summary, as returned to clients.
#[derive(Debug, Serialize, FromRow)]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Owner summary (id/name/email) assembled by the read queries.
    #[sqlx(rename = "user")]
    #[serde(rename = "user")]
    pub owner: Value,
}

pub struct CrudService;

impl CrudService {
    /// Insert one row for the user. Returns the new id.
    pub async fn create(
        pool: &PgPool,
        resource: &Resource,
        user_id: i64,
        form: &ResourceForm,
    ) -> sqlx::Result<i64> {
        let stmt = sql::insert(resource);
        tracing::debug!(sql = %stmt, user_id, resource = resource.slug, "create");
        sqlx::query_scalar(&stmt)
            .bind(user_id)
            .bind(&form.title)
            .bind(&form.content)
            .fetch_one(pool)
            .await
    }

    /// All of the user's rows, newest first.
    pub async fn all(
        pool: &PgPool,
        resource: &Resource,
        user_id: i64,
    ) -> sqlx::Result<Vec<Record>> {
        let stmt = sql::select_all(resource);
        tracing::debug!(sql = %stmt, user_id, resource = resource.slug, "list");
        sqlx::query_as(&stmt).bind(user_id).fetch_all(pool).await
    }

    /// One row by id, scoped to the user. None when the row does not exist
    /// or belongs to someone else.
    pub async fn one(
        pool: &PgPool,
        resource: &Resource,
        user_id: i64,
        id: i64,
    ) -> sqlx::Result<Option<Record>> {
        let stmt = sql::select_one(resource);
        tracing::debug!(sql = %stmt, user_id, resource = resource.slug, "read");
        sqlx::query_as(&stmt)
            .bind(user_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update title/content by id, scoped to the user. Returns rows affected;
    /// zero means no owned row matched.
    pub async fn update(
        pool: &PgPool,
        resource: &Resource,
        user_id: i64,
        id: i64,
        form: &ResourceForm,
    ) -> sqlx::Result<u64> {
        let stmt = sql::update(resource);
        tracing::debug!(sql = %stmt, user_id, resource = resource.slug, "update");
        let done = sqlx::query(&stmt)
            .bind(user_id)
            .bind(id)
            .bind(&form.title)
            .bind(&form.content)
            .execute(pool)
            .await?;
        Ok(done.rows_affected())
    }

    /// Delete by id, scoped to the user. Returns rows affected.
    pub async fn delete(
        pool: &PgPool,
        resource: &Resource,
        user_id: i64,
        id: i64,
    ) -> sqlx::Result<u64> {
        let stmt = sql::delete(resource);
        tracing::debug!(sql = %stmt, user_id, resource = resource.slug, "delete");
        let done = sqlx::query(&stmt)
            .bind(user_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(done.rows_affected())
    }
}
