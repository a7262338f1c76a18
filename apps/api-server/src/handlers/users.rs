//! User administration and avatar upload.

use actix_web::{HttpRequest, HttpResponse, http::header, web};
use chrono::Utc;
use std::sync::Arc;

use folio_core::domain::{Role, User};
use folio_core::ports::PasswordService;
use folio_shared::ApiResponse;
use folio_shared::dto::{
    AvatarResponse, CreateUserRequest, ResetPasswordRequest, UpdateUserRequest, UserResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::auth::MIN_PASSWORD_LEN;
use super::{PageParams, page_response};

pub(crate) fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        full_name: user.full_name.clone(),
        role: user.role.as_str().to_string(),
        avatar_url: user.avatar_url.clone(),
        created_at: user.created_at,
    }
}

async fn load_user(state: &AppState, id: i32) -> AppResult<User> {
    state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id} not found")))
}

/// GET /api/admin/users
pub async fn list_users(
    state: web::Data<AppState>,
    params: web::Query<PageParams>,
) -> AppResult<HttpResponse> {
    let page = state.users.list(&params.request()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(page, user_response))))
}

/// POST /api/admin/users
pub async fn create_user(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    if body.username.trim().is_empty() {
        return Err(AppError::BadRequest("username is required".to_string()));
    }
    if body.email.is_empty() || !body.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if body.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    let role: Role = body
        .role
        .parse()
        .map_err(|e: String| AppError::BadRequest(e))?;

    for identifier in [&body.username, &body.email] {
        if state
            .users
            .find_by_username_or_email(identifier)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "{identifier} is already registered"
            )));
        }
    }

    let password_hash = password_service.hash(&body.password)?;
    let user = User::new(body.username, body.email, password_hash, body.full_name, role);
    let saved = state.users.save(user).await?;

    tracing::info!(user_id = saved.id, "User created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(user_response(&saved))))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = load_user(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(&user))))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    let mut user = load_user(&state, path.into_inner()).await?;

    if let Some(email) = body.email {
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        user.email = email;
    }
    if let Some(full_name) = body.full_name {
        user.full_name = full_name;
    }
    if let Some(role) = body.role {
        user.role = role.parse().map_err(|e: String| AppError::BadRequest(e))?;
    }
    user.updated_at = Utc::now();

    let saved = state.users.save(user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(&saved))))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if identity.user_id == id {
        return Err(AppError::BadRequest(
            "Cannot delete your own account".to_string(),
        ));
    }

    state.users.delete(id).await?;

    tracing::info!(user_id = id, "User deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "User deleted")))
}

/// POST /api/admin/users/{id}/password - admin reset.
pub async fn reset_password(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    path: web::Path<i32>,
    body: web::Json<ResetPasswordRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    if body.new_password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let mut user = load_user(&state, path.into_inner()).await?;
    user.password_hash = password_service.hash(&body.new_password)?;
    user.updated_at = Utc::now();
    state.users.save(user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Password reset")))
}

/// POST /api/users/{id}/avatar
///
/// Raw image body; the content type picks the stored extension. Users
/// may replace their own avatar, admins anyone's.
pub async fn upload_avatar(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if identity.user_id != id && identity.role != Role::Admin {
        return Err(AppError::Forbidden);
    }

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let ext = match content_type.as_str() {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        _ => {
            return Err(AppError::BadRequest(
                "Unsupported image type (png, jpeg, webp)".to_string(),
            ));
        }
    };

    if body.is_empty() {
        return Err(AppError::BadRequest("Empty upload".to_string()));
    }

    let mut user = load_user(&state, id).await?;

    let key = format!("avatars/{id}.{ext}");
    let url = state.storage.put(&key, body.to_vec(), &content_type).await?;

    user.avatar_url = Some(url.clone());
    user.updated_at = Utc::now();
    state.users.save(user).await?;

    tracing::info!(user_id = id, "Avatar updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(AvatarResponse { avatar_url: url })))
}
