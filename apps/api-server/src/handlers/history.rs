//! Edit and status history, plus the version diff endpoint.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use folio_core::domain::{EditRecord, StatusChange, diff_between};
use folio_shared::ApiResponse;
use folio_shared::dto::{
    EditLogResponse, FieldDiffResponse, HistoryDiffResponse, StatusHistoryResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::publications::{ensure_can_view, load_publication};
use super::{PageParams, page_response};

pub(crate) fn edit_log_response(record: &EditRecord) -> EditLogResponse {
    EditLogResponse {
        id: record.id,
        publication_id: record.publication_id,
        version: record.version,
        field: record.field.clone(),
        old_value: record.old_value.clone(),
        new_value: record.new_value.clone(),
        edited_by: record.edited_by,
        edited_at: record.edited_at,
    }
}

fn status_response(change: &StatusChange) -> StatusHistoryResponse {
    StatusHistoryResponse {
        id: change.id,
        publication_id: change.publication_id,
        from_status: change.from_status.as_str().to_string(),
        to_status: change.to_status.as_str().to_string(),
        changed_by: change.changed_by,
        note: change.note.clone(),
        created_at: change.created_at,
    }
}

/// GET /api/publications/{id}/history - the edit log in replay order,
/// paginated.
pub async fn edit_history(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    params: web::Query<PageParams>,
) -> AppResult<HttpResponse> {
    let publication = load_publication(&state, path.into_inner()).await?;
    ensure_can_view(&identity, &publication)?;

    let result = state
        .edit_logs
        .list(Some(publication.id), &params.request())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(result, edit_log_response))))
}

/// GET /api/publications/{id}/history/status
pub async fn status_history(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let publication = load_publication(&state, path.into_inner()).await?;
    ensure_can_view(&identity, &publication)?;

    let changes = state
        .status_history
        .list_for_publication(publication.id)
        .await?;
    let responses: Vec<StatusHistoryResponse> = changes.iter().map(status_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(responses)))
}

/// Version range for the diff endpoint. `from` defaults to 0 (before any
/// edit); `to` defaults to the publication's current version.
#[derive(Debug, Deserialize)]
pub struct DiffParams {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

/// GET /api/publications/{id}/history/diff?from=A&to=B
///
/// Replays the edit log to the snapshots at versions A and B and returns
/// the fields that differ between them.
pub async fn diff(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    params: web::Query<DiffParams>,
) -> AppResult<HttpResponse> {
    let publication = load_publication(&state, path.into_inner()).await?;
    ensure_can_view(&identity, &publication)?;

    let from_version = params.from.unwrap_or(0);
    let to_version = params.to.unwrap_or(publication.version);

    if from_version < 0 || to_version < 0 {
        return Err(AppError::BadRequest(
            "versions must be non-negative".to_string(),
        ));
    }
    if from_version > to_version {
        return Err(AppError::BadRequest(
            "from must not exceed to".to_string(),
        ));
    }

    let records = state.edit_logs.list_for_publication(publication.id).await?;
    let changes = diff_between(&records, from_version, to_version)
        .into_iter()
        .map(|c| FieldDiffResponse {
            field: c.field,
            from: c.from,
            to: c.to,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(HistoryDiffResponse {
        publication_id: publication.id,
        from_version,
        to_version,
        changes,
    })))
}
