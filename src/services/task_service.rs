use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::Task;

/// The subset of task fields a caller may change.
///
/// Owner, id, and timestamps have no representation here, so no update
/// request can reach them regardless of what the request body carried.
/// A `None` field means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub done: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Row is gone; also what a delete racing an update leaves behind
    #[error("Task not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct TaskService {
    pool: PgPool,
}

impl TaskService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Construct and persist a new task.
    ///
    /// Performs no validation; the presentation layer validates the
    /// title before calling in. `owner_id` is always the authenticated
    /// caller, never a request-supplied value.
    pub async fn create_task(
        &self,
        owner_id: Uuid,
        title: &str,
        done: bool,
    ) -> Result<Task, TaskError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (owner_id, title, done)
            VALUES ($1, $2, $3)
            RETURNING id, owner_id, title, done, created_at, updated_at
            "#,
        )
        .bind(owner_id)
        .bind(title)
        .bind(done)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    /// Apply a subset of mutable fields to an already-resolved task.
    ///
    /// The task must have been resolved through the ownership-scoped
    /// selector; no further authorization check happens here. Every
    /// update refreshes updated_at, even one that changes nothing else.
    pub async fn update_task(&self, task: &Task, changes: TaskChanges) -> Result<Task, TaskError> {
        let updated = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                done = COALESCE($3, done),
                updated_at = now()
            WHERE id = $1
            RETURNING id, owner_id, title, done, created_at, updated_at
            "#,
        )
        .bind(task.id)
        .bind(changes.title)
        .bind(changes.done)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(TaskError::NotFound)
    }

    /// Remove the task permanently. No soft-delete, no recovery.
    pub async fn delete_task(&self, task: &Task) -> Result<(), TaskError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound);
        }

        Ok(())
    }
}
