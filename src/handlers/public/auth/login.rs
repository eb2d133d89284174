use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::format::UserView;
use crate::auth::{self, Claims};
use crate::config;
use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::selectors;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /auth/login - Authenticate user credentials and receive a JWT token.
///
/// A missing account and a wrong password produce the same 401 so the
/// endpoint cannot be used to probe which emails are registered.
pub async fn login_post(Json(payload): Json<LoginRequest>) -> ApiResult<Value> {
    let email = payload.email.as_deref().unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("email and password are required"));
    }

    let pool = DatabaseManager::pool().await?;
    let user = selectors::users::get_user_by_email(&pool, email).await?;

    let user = match user {
        Some(user) if auth::verify_password(password, &user.password_hash) => user,
        _ => return Err(ApiError::unauthorized("invalid email or password")),
    };

    let claims = Claims::new(user.id, user.email.clone(), user.is_admin);
    let token = auth::generate_jwt(claims).map_err(|e| {
        tracing::error!("Failed to issue JWT: {}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    Ok(ApiResponse::success(json!({
        "token": token,
        "user": UserView::from(&user),
        "expires_in": expires_in,
    })))
}
