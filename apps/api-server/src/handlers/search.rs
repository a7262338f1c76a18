//! Public publication search. No authentication; only published records
//! are visible.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use folio_core::domain::PublicationStatus;
use folio_core::ports::{PageRequest, PublicationFilter};
use folio_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

use super::publications::publication_response;
use super::{page_response, parse_sort};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/search/publications
pub async fn search_publications(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();

    let filter = PublicationFilter {
        title_query: params.q,
        owner_id: None,
        category_id: params.category_id,
        venue_id: params.venue_id,
        year_from: params.year_from,
        year_to: params.year_to,
        status: Some(PublicationStatus::Published),
        sort: parse_sort(params.sort.as_deref())?,
    };
    let page = PageRequest::new(params.page, params.per_page);

    let result = state.publications.search(&filter, &page).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(page_response(
        result,
        publication_response,
    ))))
}
