use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Task;

/// All tasks owned by the user, newest first.
///
/// The owner filter in the WHERE clause is the read-authorization
/// mechanism: no other function returns task rows to callers.
pub async fn list_tasks_for_user(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, owner_id, title, done, created_at, updated_at
        FROM tasks
        WHERE owner_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Total number of tasks owned by the user (for the pagination envelope)
pub async fn count_tasks_for_user(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE owner_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

/// The task with the given id, if and only if the user owns it.
///
/// Returns None both for missing rows and for rows owned by someone
/// else; callers cannot tell the two apart.
pub async fn get_task_for_user(
    pool: &PgPool,
    user_id: Uuid,
    task_id: Uuid,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, owner_id, title, done, created_at, updated_at
        FROM tasks
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(task_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
