//! In-app notifications.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use folio_core::domain::Notification;
use folio_shared::ApiResponse;
use folio_shared::dto::NotificationResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::page_response;

fn notification_response(n: &Notification) -> NotificationResponse {
    NotificationResponse {
        id: n.id,
        publication_id: n.publication_id,
        message: n.message.clone(),
        is_read: n.is_read,
        created_at: n.created_at,
    }
}

#[derive(Debug, Deserialize)]
pub struct NotificationParams {
    #[serde(default)]
    pub unread: bool,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/notifications?unread=true - the caller's notifications,
/// newest first.
pub async fn list(
    identity: Identity,
    state: web::Data<AppState>,
    params: web::Query<NotificationParams>,
) -> AppResult<HttpResponse> {
    let page = folio_core::ports::PageRequest::new(params.page, params.per_page);
    let result = state
        .notifications
        .list_for_user(identity.user_id, params.unread, &page)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(
        result,
        notification_response,
    ))))
}

/// POST /api/notifications/{id}/read
///
/// Only the addressee can mark a notification read; anything else is a
/// missing row.
pub async fn mark_read(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let updated = state.notifications.mark_read(id, identity.user_id).await?;

    if !updated {
        return Err(AppError::NotFound(format!("notification {id} not found")));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Notification read")))
}
