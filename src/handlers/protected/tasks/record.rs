use axum::{extract::Path, response::Json, Extension};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::validate_title;
use crate::api::format::TaskView;
use crate::database::manager::DatabaseManager;
use crate::database::models::Task;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::selectors;
use crate::services::{TaskChanges, TaskService};

#[derive(Debug, Deserialize)]
pub struct TaskWriteRequest {
    pub title: Option<String>,
    pub done: Option<bool>,
    // owner/id/timestamp fields in the body are silently dropped here,
    // and TaskChanges has no way to express them anyway.
}

/// Resolve a task through the ownership-scoped selector.
///
/// A malformed id, a missing row, and a row owned by someone else all
/// come back as the same 404.
async fn resolve_task(pool: &PgPool, auth: &AuthUser, id: &str) -> Result<Task, ApiError> {
    let task_id = Uuid::parse_str(id).map_err(|_| ApiError::task_not_found())?;

    selectors::tasks::get_task_for_user(pool, auth.user_id, task_id)
        .await?
        .ok_or_else(ApiError::task_not_found)
}

/// GET /api/tasks/:id - Show a single task owned by the caller
pub async fn task_get(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<TaskView> {
    let pool = DatabaseManager::pool().await?;
    let task = resolve_task(&pool, &auth, &id).await?;

    Ok(ApiResponse::success(TaskView::from(&task)))
}

/// PUT /api/tasks/:id - Full update; title is required
pub async fn task_put(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(payload): Json<TaskWriteRequest>,
) -> ApiResult<TaskView> {
    let title = payload
        .title
        .ok_or_else(|| ApiError::field_error("title", "This field is required"))?;
    validate_title(&title)?;

    let pool = DatabaseManager::pool().await?;
    let task = resolve_task(&pool, &auth, &id).await?;

    let changes = TaskChanges {
        title: Some(title),
        done: payload.done,
    };

    let service = TaskService::with_pool(pool);
    let updated = service.update_task(&task, changes).await?;

    Ok(ApiResponse::success(TaskView::from(&updated)))
}

/// PATCH /api/tasks/:id - Partial update; absent fields stay unchanged
pub async fn task_patch(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(payload): Json<TaskWriteRequest>,
) -> ApiResult<TaskView> {
    if let Some(title) = payload.title.as_deref() {
        validate_title(title)?;
    }

    let pool = DatabaseManager::pool().await?;
    let task = resolve_task(&pool, &auth, &id).await?;

    let changes = TaskChanges {
        title: payload.title,
        done: payload.done,
    };

    let service = TaskService::with_pool(pool);
    let updated = service.update_task(&task, changes).await?;

    Ok(ApiResponse::success(TaskView::from(&updated)))
}

/// DELETE /api/tasks/:id - Remove a task owned by the caller
pub async fn task_delete(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let pool = DatabaseManager::pool().await?;
    let task = resolve_task(&pool, &auth, &id).await?;

    let service = TaskService::with_pool(pool);
    service.delete_task(&task).await?;

    Ok(ApiResponse::<()>::no_content())
}
