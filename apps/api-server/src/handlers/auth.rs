//! Authentication handlers: login, logout, profile, password change.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;
use std::sync::Arc;

use folio_core::domain::LoginLog;
use folio_core::ports::{PasswordService, TokenService};
use folio_shared::ApiResponse;
use folio_shared::dto::{ChangePasswordRequest, LoginRequest};

use crate::config::SessionConfig;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::users::user_response;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

fn session_cookie(config: &SessionConfig, token: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

/// POST /api/auth/login
///
/// Every attempt is recorded in the login log; failures never reveal
/// whether the identifier or the password was wrong.
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    session: web::Data<SessionConfig>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    if body.username_or_email.is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest(
            "username and password are required".to_string(),
        ));
    }

    // Log the TCP peer address; forwarded headers are client-controlled.
    let ip = req.peer_addr().map(|addr| addr.ip().to_string());

    let user = state
        .users
        .find_by_username_or_email(&body.username_or_email)
        .await?;

    let Some(user) = user else {
        state
            .login_logs
            .save(LoginLog::new(None, body.username_or_email, false, ip))
            .await?;
        return Err(AppError::Unauthorized);
    };

    let valid = password_service.verify(&body.password, &user.password_hash)?;

    state
        .login_logs
        .save(LoginLog::new(
            Some(user.id),
            body.username_or_email,
            valid,
            ip,
        ))
        .await?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    let token = token_service.generate_token(user.id, &user.username, user.role)?;
    let cookie = session_cookie(&session, token, token_service.expiration_seconds());

    tracing::info!(user_id = user.id, "User logged in");

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::ok(user_response(&user))))
}

/// POST /api/auth/logout - clears the session cookie.
pub async fn logout(session: web::Data<SessionConfig>) -> HttpResponse {
    let mut cookie = Cookie::new(session.cookie_name.clone(), "");
    cookie.set_path("/");
    cookie.set_max_age(Duration::ZERO);

    HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::ok_with_message((), "Logged out"))
}

/// GET /api/auth/me
pub async fn me(identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {} not found", identity.user_id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(&user))))
}

/// POST /api/auth/password - change one's own password.
pub async fn change_password(
    identity: Identity,
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<ChangePasswordRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    if body.new_password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let mut user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {} not found", identity.user_id)))?;

    let valid = password_service.verify(&body.current_password, &user.password_hash)?;
    if !valid {
        return Err(AppError::BadRequest(
            "Current password is incorrect".to_string(),
        ));
    }

    user.password_hash = password_service.hash(&body.new_password)?;
    user.updated_at = Utc::now();
    state.users.save(user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Password updated")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use actix_web::test::TestRequest;
    use async_trait::async_trait;

    use folio_core::domain::{
        Category, EditRecord, Notification, Person, Publication, ReviewAction, Role,
        StatusChange, User, Venue,
    };
    use folio_core::error::RepoError;
    use folio_core::ports::{
        BaseRepository, CategoryRepository, EditLogRepository, LoginLogRepository,
        NotificationRepository, PageRequest, PageResult, PersonRepository, PublicationFilter,
        PublicationRepository, ReviewActionRepository, StatusHistoryRepository, UserRepository,
        VenueRepository,
    };
    use folio_infra::{Argon2PasswordService, InMemoryObjectStore, JwtConfig, JwtTokenService};

    use crate::middleware::error::AppError;
    use crate::state::AppState;

    fn empty_page<T>(page: &PageRequest) -> PageResult<T> {
        PageResult {
            items: Vec::new(),
            total: 0,
            page: page.page,
            per_page: page.per_page,
        }
    }

    /// Inert repository for tables a test never touches.
    struct Stub;

    #[async_trait]
    impl<T> BaseRepository<T, i32> for Stub
    where
        T: Send + Sync + 'static,
    {
        async fn find_by_id(&self, _id: i32) -> Result<Option<T>, RepoError> {
            Ok(None)
        }

        async fn save(&self, entity: T) -> Result<T, RepoError> {
            Ok(entity)
        }

        async fn delete(&self, _id: i32) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl PublicationRepository for Stub {
        async fn search(
            &self,
            _filter: &PublicationFilter,
            page: &PageRequest,
        ) -> Result<PageResult<Publication>, RepoError> {
            Ok(empty_page(page))
        }
    }

    #[async_trait]
    impl PersonRepository for Stub {
        async fn list(&self) -> Result<Vec<Person>, RepoError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl CategoryRepository for Stub {
        async fn list(&self) -> Result<Vec<Category>, RepoError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl VenueRepository for Stub {
        async fn list(&self) -> Result<Vec<Venue>, RepoError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl NotificationRepository for Stub {
        async fn list_for_user(
            &self,
            _user_id: i32,
            _unread_only: bool,
            page: &PageRequest,
        ) -> Result<PageResult<Notification>, RepoError> {
            Ok(empty_page(page))
        }

        async fn mark_read(&self, _id: i32, _user_id: i32) -> Result<bool, RepoError> {
            Ok(false)
        }
    }

    #[async_trait]
    impl EditLogRepository for Stub {
        async fn record_edits(&self, _edits: Vec<EditRecord>) -> Result<(), RepoError> {
            Ok(())
        }

        async fn list_for_publication(
            &self,
            _publication_id: i32,
        ) -> Result<Vec<EditRecord>, RepoError> {
            Ok(Vec::new())
        }

        async fn list(
            &self,
            _publication_id: Option<i32>,
            page: &PageRequest,
        ) -> Result<PageResult<EditRecord>, RepoError> {
            Ok(empty_page(page))
        }
    }

    #[async_trait]
    impl StatusHistoryRepository for Stub {
        async fn list_for_publication(
            &self,
            _publication_id: i32,
        ) -> Result<Vec<StatusChange>, RepoError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl ReviewActionRepository for Stub {
        async fn list_for_publication(
            &self,
            _publication_id: i32,
        ) -> Result<Vec<ReviewAction>, RepoError> {
            Ok(Vec::new())
        }
    }

    /// User lookup backed by at most one fixture row.
    struct FixedUsers(Option<User>);

    #[async_trait]
    impl BaseRepository<User, i32> for FixedUsers {
        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
            Ok(self.0.clone().filter(|u| u.id == id))
        }

        async fn save(&self, entity: User) -> Result<User, RepoError> {
            Ok(entity)
        }

        async fn delete(&self, _id: i32) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for FixedUsers {
        async fn find_by_username_or_email(
            &self,
            identifier: &str,
        ) -> Result<Option<User>, RepoError> {
            Ok(self
                .0
                .clone()
                .filter(|u| u.username == identifier || u.email == identifier))
        }

        async fn list(&self, page: &PageRequest) -> Result<PageResult<User>, RepoError> {
            Ok(empty_page(page))
        }
    }

    /// Captures every login-log row the handler writes.
    struct RecordingLoginLogs(Mutex<Vec<LoginLog>>);

    #[async_trait]
    impl BaseRepository<LoginLog, i32> for RecordingLoginLogs {
        async fn find_by_id(&self, _id: i32) -> Result<Option<LoginLog>, RepoError> {
            Ok(None)
        }

        async fn save(&self, entity: LoginLog) -> Result<LoginLog, RepoError> {
            self.0.lock().unwrap().push(entity.clone());
            Ok(entity)
        }

        async fn delete(&self, _id: i32) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl LoginLogRepository for RecordingLoginLogs {
        async fn list(&self, page: &PageRequest) -> Result<PageResult<LoginLog>, RepoError> {
            Ok(empty_page(page))
        }
    }

    fn state_with(user: Option<User>, logs: Arc<RecordingLoginLogs>) -> AppState {
        AppState {
            users: Arc::new(FixedUsers(user)),
            publications: Arc::new(Stub),
            persons: Arc::new(Stub),
            categories: Arc::new(Stub),
            venues: Arc::new(Stub),
            notifications: Arc::new(Stub),
            login_logs: logs,
            edit_logs: Arc::new(Stub),
            status_history: Arc::new(Stub),
            review_actions: Arc::new(Stub),
            storage: Arc::new(InMemoryObjectStore::new()),
        }
    }

    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test".to_string(),
        }))
    }

    fn professor(password_service: &Argon2PasswordService, password: &str) -> User {
        let mut user = User::new(
            "prof.smith".to_string(),
            "smith@example.edu".to_string(),
            password_service.hash(password).unwrap(),
            "Prof Smith".to_string(),
            Role::Professor,
        );
        user.id = 7;
        user
    }

    async fn run_login(
        user: Option<User>,
        logs: Arc<RecordingLoginLogs>,
        username_or_email: &str,
        password: &str,
    ) -> AppResult<HttpResponse> {
        let req = TestRequest::default()
            .peer_addr("203.0.113.9:44832".parse().unwrap())
            .to_http_request();

        login(
            req,
            web::Data::new(state_with(user, logs)),
            web::Data::new(token_service()),
            web::Data::new(
                Arc::new(Argon2PasswordService::new()) as Arc<dyn PasswordService>
            ),
            web::Data::new(SessionConfig::default()),
            web::Json(LoginRequest {
                username_or_email: username_or_email.to_string(),
                password: password.to_string(),
            }),
        )
        .await
    }

    #[actix_rt::test]
    async fn wrong_password_is_unauthorized_and_logged() {
        let hasher = Argon2PasswordService::new();
        let logs = Arc::new(RecordingLoginLogs(Mutex::new(Vec::new())));

        let result = run_login(
            Some(professor(&hasher, "correct-horse")),
            logs.clone(),
            "prof.smith",
            "wrong-password",
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized));

        let rows = logs.0.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].success);
        assert_eq!(rows[0].user_id, Some(7));
        assert_eq!(rows[0].username, "prof.smith");
        assert_eq!(rows[0].ip.as_deref(), Some("203.0.113.9"));
    }

    #[actix_rt::test]
    async fn unknown_user_is_unauthorized_and_logged() {
        let logs = Arc::new(RecordingLoginLogs(Mutex::new(Vec::new())));

        let result = run_login(None, logs.clone(), "nobody@example.edu", "whatever").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized));

        let rows = logs.0.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].success);
        assert_eq!(rows[0].user_id, None);
        assert_eq!(rows[0].username, "nobody@example.edu");
    }

    #[actix_rt::test]
    async fn valid_login_sets_session_cookie_and_logs_success() {
        let hasher = Argon2PasswordService::new();
        let logs = Arc::new(RecordingLoginLogs(Mutex::new(Vec::new())));

        let response = run_login(
            Some(professor(&hasher, "correct-horse")),
            logs.clone(),
            "smith@example.edu",
            "correct-horse",
        )
        .await
        .unwrap();

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        let cookie = response
            .cookies()
            .find(|c| c.name() == "folio_session")
            .unwrap();
        assert!(!cookie.value().is_empty());

        let rows = logs.0.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].success);
        assert_eq!(rows[0].user_id, Some(7));
    }
}
