//! Reference-data maintenance: persons, categories, venues.

use actix_web::{HttpResponse, web};

use folio_core::domain::{Category, Person, Venue, VenueKind};
use folio_shared::ApiResponse;
use folio_shared::dto::{
    CategoryPayload, CategoryResponse, PersonPayload, PersonResponse, VenuePayload, VenueResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn person_response(p: &Person) -> PersonResponse {
    PersonResponse {
        id: p.id,
        full_name: p.full_name.clone(),
        email: p.email.clone(),
        affiliation: p.affiliation.clone(),
    }
}

fn category_response(c: &Category) -> CategoryResponse {
    CategoryResponse {
        id: c.id,
        name: c.name.clone(),
        description: c.description.clone(),
    }
}

fn venue_response(v: &Venue) -> VenueResponse {
    VenueResponse {
        id: v.id,
        name: v.name.clone(),
        kind: v.kind.as_str().to_string(),
        issn: v.issn.clone(),
    }
}

fn require_name(value: &str, what: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{what} is required")));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Persons

/// GET /api/catalog/persons
pub async fn list_persons(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let persons = state.persons.list().await?;
    let responses: Vec<PersonResponse> = persons.iter().map(person_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(responses)))
}

/// POST /api/staff/catalog/persons
pub async fn create_person(
    state: web::Data<AppState>,
    body: web::Json<PersonPayload>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    require_name(&body.full_name, "full_name")?;

    let person = Person {
        id: 0,
        full_name: body.full_name,
        email: body.email,
        affiliation: body.affiliation,
    };
    let saved = state.persons.save(person).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(person_response(&saved))))
}

/// PUT /api/staff/catalog/persons/{id}
pub async fn update_person(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PersonPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let body = body.into_inner();
    require_name(&body.full_name, "full_name")?;

    let mut person = state
        .persons
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("person {id} not found")))?;

    person.full_name = body.full_name;
    person.email = body.email;
    person.affiliation = body.affiliation;

    let saved = state.persons.save(person).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(person_response(&saved))))
}

/// DELETE /api/staff/catalog/persons/{id}
pub async fn delete_person(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.persons.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Person deleted")))
}

// ---------------------------------------------------------------------------
// Categories

/// GET /api/catalog/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.list().await?;
    let responses: Vec<CategoryResponse> = categories.iter().map(category_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(responses)))
}

/// POST /api/staff/catalog/categories
pub async fn create_category(
    state: web::Data<AppState>,
    body: web::Json<CategoryPayload>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    require_name(&body.name, "name")?;

    let category = Category {
        id: 0,
        name: body.name,
        description: body.description,
    };
    let saved = state.categories.save(category).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(category_response(&saved))))
}

/// PUT /api/staff/catalog/categories/{id}
pub async fn update_category(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CategoryPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let body = body.into_inner();
    require_name(&body.name, "name")?;

    let mut category = state
        .categories
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("category {id} not found")))?;

    category.name = body.name;
    category.description = body.description;

    let saved = state.categories.save(category).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(category_response(&saved))))
}

/// DELETE /api/staff/catalog/categories/{id}
pub async fn delete_category(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.categories.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Category deleted")))
}

// ---------------------------------------------------------------------------
// Venues

/// GET /api/catalog/venues
pub async fn list_venues(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let venues = state.venues.list().await?;
    let responses: Vec<VenueResponse> = venues.iter().map(venue_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(responses)))
}

/// POST /api/staff/catalog/venues
pub async fn create_venue(
    state: web::Data<AppState>,
    body: web::Json<VenuePayload>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    require_name(&body.name, "name")?;
    let kind: VenueKind = body.kind.parse().map_err(AppError::BadRequest)?;

    let venue = Venue {
        id: 0,
        name: body.name,
        kind,
        issn: body.issn,
    };
    let saved = state.venues.save(venue).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(venue_response(&saved))))
}

/// PUT /api/staff/catalog/venues/{id}
pub async fn update_venue(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<VenuePayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let body = body.into_inner();
    require_name(&body.name, "name")?;
    let kind: VenueKind = body.kind.parse().map_err(AppError::BadRequest)?;

    let mut venue = state
        .venues
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id} not found")))?;

    venue.name = body.name;
    venue.kind = kind;
    venue.issn = body.issn;

    let saved = state.venues.save(venue).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(venue_response(&saved))))
}

/// DELETE /api/staff/catalog/venues/{id}
pub async fn delete_venue(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.venues.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Venue deleted")))
}
