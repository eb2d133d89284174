use axum::Extension;

use crate::api::format::UserView;
use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::selectors;

/// GET /api/users - List all users, newest first.
///
/// Admin only. Unlike the task endpoints, a non-admin caller gets a
/// distinct 403 here rather than a 404; the listing's existence is not
/// a secret, only its contents are.
pub async fn user_list(Extension(auth): Extension<AuthUser>) -> ApiResult<Vec<UserView>> {
    if !auth.is_admin {
        return Err(ApiError::forbidden("Administrator access required"));
    }

    let pool = DatabaseManager::pool().await?;
    let users = selectors::users::list_users(&pool).await?;

    let views: Vec<UserView> = users.iter().map(UserView::from).collect();
    Ok(ApiResponse::success(views))
}

/// GET /api/auth/whoami - Current user, fetched fresh from the store
pub async fn whoami(Extension(auth): Extension<AuthUser>) -> ApiResult<UserView> {
    let pool = DatabaseManager::pool().await?;
    let user = selectors::users::get_user_by_id(&pool, auth.user_id)
        .await?
        // Token outlived the account; deny like any other bad credential
        .ok_or_else(|| ApiError::forbidden("Unknown user"))?;

    Ok(ApiResponse::success(UserView::from(&user)))
}
