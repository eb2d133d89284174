use axum::response::Json;
use serde::Deserialize;
use std::collections::HashMap;

use crate::api::format::UserView;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::UserService;

const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /auth/register - Provision a new user account.
///
/// Accounts created here are always regular users; the admin flag is
/// never writable through the public surface.
pub async fn register_post(Json(payload): Json<RegisterRequest>) -> ApiResult<UserView> {
    let email = payload.email.as_deref().unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();

    validate_registration(email, password)?;

    let service = UserService::new().await?;
    let user = service.create_user(email, password, false).await?;

    Ok(ApiResponse::created(UserView::from(&user)))
}

fn validate_registration(email: &str, password: &str) -> Result<(), ApiError> {
    let mut field_errors = HashMap::new();

    if email.is_empty() {
        field_errors.insert("email".to_string(), "This field is required".to_string());
    } else if !email.contains('@') {
        field_errors.insert("email".to_string(), "Enter a valid email address".to_string());
    }

    if password.is_empty() {
        field_errors.insert("password".to_string(), "This field is required".to_string());
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        field_errors.insert(
            "password".to_string(),
            format!("Password must be at least {} characters", MIN_PASSWORD_CHARS),
        );
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_error(
            "Validation failed",
            Some(field_errors),
        ))
    }
}
