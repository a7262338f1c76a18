//! Publication CRUD and submission.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;

use folio_core::domain::{EditRecord, Publication, PublicationStatus, StatusChange};
use folio_core::ports::{PageRequest, PublicationFilter};
use folio_shared::ApiResponse;
use folio_shared::dto::{
    CreatePublicationRequest, PublicationResponse, UpdatePublicationRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::{page_response, parse_sort, parse_status};

pub(crate) fn publication_response(p: &Publication) -> PublicationResponse {
    PublicationResponse {
        id: p.id,
        owner_id: p.owner_id,
        title: p.title.clone(),
        abstract_text: p.abstract_text.clone(),
        category_id: p.category_id,
        venue_id: p.venue_id,
        year: p.year,
        status: p.status.as_str().to_string(),
        version: p.version,
        created_at: p.created_at,
        updated_at: p.updated_at,
    }
}

pub(crate) async fn load_publication(state: &AppState, id: i32) -> AppResult<Publication> {
    state
        .publications
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("publication {id} not found")))
}

/// Owners see their own record; staff and admins see everything.
pub(crate) fn ensure_can_view(identity: &Identity, publication: &Publication) -> AppResult<()> {
    if publication.owner_id == identity.user_id || identity.role.is_staff() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Query parameters for listing one's publications.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub category_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/publications
///
/// Professors see only their own rows; staff and admins see all.
pub async fn list(
    identity: Identity,
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();

    let status = params
        .status
        .as_deref()
        .map(parse_status)
        .transpose()?;

    let filter = PublicationFilter {
        title_query: params.q,
        owner_id: (!identity.role.is_staff()).then_some(identity.user_id),
        category_id: params.category_id,
        venue_id: params.venue_id,
        year_from: params.year_from,
        year_to: params.year_to,
        status,
        sort: parse_sort(params.sort.as_deref())?,
    };
    let page = PageRequest::new(params.page, params.per_page);

    let result = state.publications.search(&filter, &page).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(
        result,
        publication_response,
    ))))
}

/// POST /api/publications - create a draft.
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreatePublicationRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    if body.title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    let mut publication = Publication::new_draft(identity.user_id, body.title);
    publication.abstract_text = body.abstract_text.unwrap_or_default();
    publication.category_id = body.category_id;
    publication.venue_id = body.venue_id;
    publication.year = body.year;

    let saved = state.publications.save(publication).await?;

    tracing::info!(publication_id = saved.id, "Draft created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(publication_response(&saved))))
}

/// GET /api/publications/{id}
pub async fn get(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let publication = load_publication(&state, path.into_inner()).await?;
    ensure_can_view(&identity, &publication)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(publication_response(&publication))))
}

/// PUT /api/publications/{id}
///
/// Diffs the submitted fields against the stored row; when anything
/// changed, bumps the version once and appends one edit-log row per
/// changed field.
pub async fn update(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdatePublicationRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    let mut publication = load_publication(&state, path.into_inner()).await?;

    if publication.owner_id == identity.user_id {
        if !identity.role.is_staff() && !publication.status.is_editable_by_owner() {
            return Err(AppError::BadRequest(format!(
                "publication is not editable while {}",
                publication.status
            )));
        }
    } else if !identity.role.is_staff() {
        return Err(AppError::Forbidden);
    }

    let publication_id = publication.id;
    let editor_id = identity.user_id;
    let version = publication.version + 1;
    let mut edits: Vec<EditRecord> = Vec::new();
    let mut record = |field: &str, old: Option<String>, new: Option<String>| {
        edits.push(EditRecord::new(
            publication_id,
            version,
            field,
            old,
            new,
            editor_id,
        ));
    };

    if let Some(title) = body.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("title cannot be empty".to_string()));
        }
        if title != publication.title {
            record(
                "title",
                Some(publication.title.clone()),
                Some(title.clone()),
            );
            publication.title = title;
        }
    }
    if let Some(abstract_text) = body.abstract_text {
        if abstract_text != publication.abstract_text {
            record(
                "abstract",
                Some(publication.abstract_text.clone()),
                Some(abstract_text.clone()),
            );
            publication.abstract_text = abstract_text;
        }
    }
    if let Some(category_id) = body.category_id {
        if category_id != publication.category_id {
            record(
                "category_id",
                publication.category_id.map(|v| v.to_string()),
                category_id.map(|v| v.to_string()),
            );
            publication.category_id = category_id;
        }
    }
    if let Some(venue_id) = body.venue_id {
        if venue_id != publication.venue_id {
            record(
                "venue_id",
                publication.venue_id.map(|v| v.to_string()),
                venue_id.map(|v| v.to_string()),
            );
            publication.venue_id = venue_id;
        }
    }
    if let Some(year) = body.year {
        if year != publication.year {
            record(
                "year",
                publication.year.map(|v| v.to_string()),
                year.map(|v| v.to_string()),
            );
            publication.year = year;
        }
    }

    if edits.is_empty() {
        return Ok(HttpResponse::Ok().json(ApiResponse::ok(publication_response(&publication))));
    }

    publication.version = version;
    publication.updated_at = Utc::now();

    let saved = state.publications.save(publication).await?;
    state.edit_logs.record_edits(edits).await?;

    tracing::info!(publication_id = saved.id, version, "Publication edited");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(publication_response(&saved))))
}

/// DELETE /api/publications/{id} - owners may drop their drafts, admins
/// anything.
pub async fn remove(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let publication = load_publication(&state, id).await?;

    let is_admin = identity.role == folio_core::domain::Role::Admin;
    let owns_draft = publication.owner_id == identity.user_id
        && publication.status == PublicationStatus::Draft;
    if !is_admin && !owns_draft {
        return Err(AppError::Forbidden);
    }

    state.publications.delete(id).await?;

    tracing::info!(publication_id = id, "Publication deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Publication deleted")))
}

/// POST /api/publications/{id}/submit - owner sends the record into
/// review.
pub async fn submit(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let mut publication = load_publication(&state, path.into_inner()).await?;

    if publication.owner_id != identity.user_id {
        return Err(AppError::Forbidden);
    }

    let from = publication.status;
    publication.status = from.transition_to(PublicationStatus::UnderReview)?;
    publication.updated_at = Utc::now();

    let saved = state.publications.save(publication).await?;
    state
        .status_history
        .save(StatusChange::new(
            saved.id,
            from,
            PublicationStatus::UnderReview,
            identity.user_id,
            None,
        ))
        .await?;

    tracing::info!(publication_id = saved.id, "Publication submitted for review");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(publication_response(&saved))))
}
