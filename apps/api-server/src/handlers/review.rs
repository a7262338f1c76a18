//! Staff review workflow.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use folio_core::domain::{Notification, ReviewAction, ReviewDecision, StatusChange};
use folio_shared::ApiResponse;
use folio_shared::dto::{ReviewActionResponse, ReviewDecisionRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

use super::publications::load_publication;

fn review_response(action: &ReviewAction) -> ReviewActionResponse {
    ReviewActionResponse {
        id: action.id,
        publication_id: action.publication_id,
        reviewer_id: action.reviewer_id,
        decision: action.decision.as_str().to_string(),
        note: action.note.clone(),
        created_at: action.created_at,
    }
}

/// POST /api/staff/publications/{id}/review
///
/// Applies the decision's status transition, records the review action
/// and status change, and notifies the owner.
pub async fn decide(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<ReviewDecisionRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    let mut publication = load_publication(&state, path.into_inner()).await?;

    let decision: ReviewDecision = body.decision.parse()?;
    let target = decision.target_status();

    let from = publication.status;
    publication.status = from.transition_to(target)?;
    publication.updated_at = Utc::now();

    let saved = state.publications.save(publication).await?;

    let action = state
        .review_actions
        .save(ReviewAction::new(
            saved.id,
            identity.user_id,
            decision,
            body.note.clone(),
        ))
        .await?;

    state
        .status_history
        .save(StatusChange::new(
            saved.id,
            from,
            target,
            identity.user_id,
            body.note.clone(),
        ))
        .await?;

    let message = match body.note {
        Some(note) => format!("Your publication \"{}\" is now {}: {note}", saved.title, target),
        None => format!("Your publication \"{}\" is now {}", saved.title, target),
    };
    state
        .notifications
        .save(Notification::new(saved.owner_id, Some(saved.id), message))
        .await?;

    tracing::info!(
        publication_id = saved.id,
        decision = decision.as_str(),
        "Review recorded"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(review_response(&action))))
}

/// GET /api/staff/publications/{id}/reviews
pub async fn list_reviews(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let publication = load_publication(&state, path.into_inner()).await?;
    let actions = state
        .review_actions
        .list_for_publication(publication.id)
        .await?;

    let responses: Vec<ReviewActionResponse> = actions.iter().map(review_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(responses)))
}
