use axum::{extract::Query, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use super::validate_title;
use crate::api::format::TaskView;
use crate::config;
use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::selectors;
use crate::services::TaskService;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/tasks - List the caller's tasks, newest first
pub async fn task_list(
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Value> {
    let api_config = &config::config().api;
    let limit = query
        .limit
        .unwrap_or(api_config.default_page_size)
        .clamp(1, api_config.max_page_size);
    let offset = query.offset.unwrap_or(0).max(0);

    let pool = DatabaseManager::pool().await?;
    let tasks = selectors::tasks::list_tasks_for_user(&pool, auth.user_id, limit, offset).await?;
    let total = selectors::tasks::count_tasks_for_user(&pool, auth.user_id).await?;

    let views: Vec<TaskView> = tasks.iter().map(TaskView::from).collect();

    Ok(ApiResponse::success(json!({
        "tasks": views,
        "total": total,
        "limit": limit,
        "offset": offset,
    })))
}

#[derive(Debug, Deserialize)]
pub struct TaskCreateRequest {
    pub title: Option<String>,
    pub done: Option<bool>,
    // Anything else in the body (owner, id, timestamps, ...) is
    // dropped by deserialization and can never reach the service.
}

/// POST /api/tasks - Create a task owned by the caller
pub async fn task_post(
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<TaskCreateRequest>,
) -> ApiResult<TaskView> {
    let title = payload
        .title
        .as_deref()
        .ok_or_else(|| ApiError::field_error("title", "This field is required"))?;
    validate_title(title)?;

    let done = payload.done.unwrap_or(false);

    let service = TaskService::new().await?;
    let task = service.create_task(auth.user_id, title, done).await?;

    Ok(ApiResponse::created(TaskView::from(&task)))
}
