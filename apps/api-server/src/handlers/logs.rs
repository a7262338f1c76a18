//! Admin audit views: login attempts and the global edit log.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use folio_core::domain::LoginLog;
use folio_core::ports::PageRequest;
use folio_shared::ApiResponse;
use folio_shared::dto::LoginLogResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

use super::history::edit_log_response;
use super::{PageParams, page_response};

fn login_log_response(log: &LoginLog) -> LoginLogResponse {
    LoginLogResponse {
        id: log.id,
        user_id: log.user_id,
        username: log.username.clone(),
        success: log.success,
        ip: log.ip.clone(),
        created_at: log.created_at,
    }
}

/// GET /api/admin/logs/logins - newest first.
pub async fn login_logs(
    state: web::Data<AppState>,
    params: web::Query<PageParams>,
) -> AppResult<HttpResponse> {
    let page = state.login_logs.list(&params.request()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(page, login_log_response))))
}

#[derive(Debug, Deserialize)]
pub struct EditLogParams {
    pub publication_id: Option<i32>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/admin/logs/edits - newest first, optionally filtered to a
/// single publication.
pub async fn edit_logs(
    state: web::Data<AppState>,
    params: web::Query<EditLogParams>,
) -> AppResult<HttpResponse> {
    let page = PageRequest::new(params.page, params.per_page);
    let result = state.edit_logs.list(params.publication_id, &page).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(result, edit_log_response))))
}
