//! HTTP handlers and route configuration.

mod auth;
mod catalog;
mod health;
mod history;
mod logs;
mod notifications;
mod publications;
mod review;
mod search;
mod users;

use actix_web::web;

use folio_core::domain::PublicationStatus;
use folio_core::ports::{PageRequest, PageResult, PublicationSort};
use folio_shared::Page;

use crate::middleware::auth::RoleGuard;
use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Role gating happens at the scope level: `/api/admin` is ADMIN only,
/// `/api/staff` is ADMIN or STAFF, the trailing scope is any
/// authenticated role, and `/api/auth` + public routes are open (their
/// handlers require identity where needed).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route(
                "/search/publications",
                web::get().to(search::search_publications),
            )
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth::login))
                    .route("/logout", web::post().to(auth::logout))
                    .route("/me", web::get().to(auth::me))
                    .route("/password", web::post().to(auth::change_password)),
            )
            // Admin portal
            .service(
                web::scope("/admin")
                    .wrap(RoleGuard::admin())
                    .route("/users", web::get().to(users::list_users))
                    .route("/users", web::post().to(users::create_user))
                    .route("/users/{id}", web::get().to(users::get_user))
                    .route("/users/{id}", web::put().to(users::update_user))
                    .route("/users/{id}", web::delete().to(users::delete_user))
                    .route(
                        "/users/{id}/password",
                        web::post().to(users::reset_password),
                    )
                    .route("/logs/logins", web::get().to(logs::login_logs))
                    .route("/logs/edits", web::get().to(logs::edit_logs)),
            )
            // Staff portal: review workflow and catalog maintenance
            .service(
                web::scope("/staff")
                    .wrap(RoleGuard::staff())
                    .route(
                        "/publications/{id}/review",
                        web::post().to(review::decide),
                    )
                    .route(
                        "/publications/{id}/reviews",
                        web::get().to(review::list_reviews),
                    )
                    .route("/catalog/persons", web::post().to(catalog::create_person))
                    .route(
                        "/catalog/persons/{id}",
                        web::put().to(catalog::update_person),
                    )
                    .route(
                        "/catalog/persons/{id}",
                        web::delete().to(catalog::delete_person),
                    )
                    .route(
                        "/catalog/categories",
                        web::post().to(catalog::create_category),
                    )
                    .route(
                        "/catalog/categories/{id}",
                        web::put().to(catalog::update_category),
                    )
                    .route(
                        "/catalog/categories/{id}",
                        web::delete().to(catalog::delete_category),
                    )
                    .route("/catalog/venues", web::post().to(catalog::create_venue))
                    .route(
                        "/catalog/venues/{id}",
                        web::put().to(catalog::update_venue),
                    )
                    .route(
                        "/catalog/venues/{id}",
                        web::delete().to(catalog::delete_venue),
                    ),
            )
            // Any authenticated role
            .service(
                web::scope("")
                    .wrap(RoleGuard::any_user())
                    .route("/users/{id}/avatar", web::post().to(users::upload_avatar))
                    .route("/publications", web::get().to(publications::list))
                    .route("/publications", web::post().to(publications::create))
                    .route("/publications/{id}", web::get().to(publications::get))
                    .route("/publications/{id}", web::put().to(publications::update))
                    .route(
                        "/publications/{id}",
                        web::delete().to(publications::remove),
                    )
                    .route(
                        "/publications/{id}/submit",
                        web::post().to(publications::submit),
                    )
                    .route(
                        "/publications/{id}/history",
                        web::get().to(history::edit_history),
                    )
                    .route(
                        "/publications/{id}/history/status",
                        web::get().to(history::status_history),
                    )
                    .route(
                        "/publications/{id}/history/diff",
                        web::get().to(history::diff),
                    )
                    .route("/notifications", web::get().to(notifications::list))
                    .route(
                        "/notifications/{id}/read",
                        web::post().to(notifications::mark_read),
                    )
                    .route("/catalog/persons", web::get().to(catalog::list_persons))
                    .route(
                        "/catalog/categories",
                        web::get().to(catalog::list_categories),
                    )
                    .route("/catalog/venues", web::get().to(catalog::list_venues)),
            ),
    );
}

// ---------------------------------------------------------------------------
// Shared query-parameter plumbing

/// Pagination query parameters shared by list endpoints.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct PageParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PageParams {
    pub(crate) fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

/// Map one page of domain values into a response page.
pub(crate) fn page_response<T, U>(page: PageResult<T>, f: impl Fn(&T) -> U) -> Page<U> {
    Page {
        items: page.items.iter().map(f).collect(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
    }
}

pub(crate) fn parse_sort(value: Option<&str>) -> Result<PublicationSort, AppError> {
    match value {
        None => Ok(PublicationSort::Newest),
        Some("newest") => Ok(PublicationSort::Newest),
        Some("oldest") => Ok(PublicationSort::Oldest),
        Some("title") => Ok(PublicationSort::Title),
        Some("year") => Ok(PublicationSort::Year),
        Some(other) => Err(AppError::BadRequest(format!("unknown sort: {other}"))),
    }
}

pub(crate) fn parse_status(value: &str) -> Result<PublicationStatus, AppError> {
    value.parse().map_err(AppError::BadRequest)
}
