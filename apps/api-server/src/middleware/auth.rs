//! Session authentication: identity extractor and per-scope role guard.
//!
//! The session token travels in an HttpOnly cookie set at login; a
//! Bearer header is accepted as a fallback for non-browser clients.

use actix_web::{
    Error, FromRequest, HttpRequest, HttpResponse, ResponseError,
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header,
    web,
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::sync::Arc;

use folio_core::domain::Role;
use folio_core::ports::{AuthError, TokenClaims, TokenService};
use folio_shared::ErrorBody;

use crate::config::SessionConfig;

/// Authenticated user identity extractor.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::InsufficientPermissions => actix_web::http::StatusCode::FORBIDDEN,
            AuthError::HashingError(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.0 {
            AuthError::TokenExpired => {
                ErrorBody::new("Session expired. Please login again.")
            }
            AuthError::MissingAuth => ErrorBody::new("Authentication required"),
            AuthError::InsufficientPermissions => ErrorBody::new("Insufficient permissions"),
            AuthError::InvalidToken(msg) => ErrorBody::new(format!("Invalid session: {msg}")),
            _ => ErrorBody::new("Authentication failed"),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Pull the session token out of the cookie (or Bearer header) and
/// validate it.
fn claims_from_request(req: &HttpRequest) -> Result<TokenClaims, AuthError> {
    let token_service = req
        .app_data::<web::Data<Arc<dyn TokenService>>>()
        .ok_or_else(|| {
            tracing::error!("TokenService not found in app data");
            AuthError::InvalidToken("Server configuration error".to_string())
        })?;

    let cookie_name = req
        .app_data::<web::Data<SessionConfig>>()
        .map(|c| c.cookie_name.clone())
        .unwrap_or_else(|| SessionConfig::default().cookie_name);

    let token = req
        .cookie(&cookie_name)
        .map(|c| c.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
                .map(str::to_string)
        })
        .ok_or(AuthError::MissingAuth)?;

    token_service.validate_token(&token)
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            claims_from_request(req)
                .map(Identity::from)
                .map_err(AuthenticationError),
        )
    }
}

/// Scope middleware rejecting requests whose session role is not in the
/// allowed set. Authentication errors are 401, wrong role is 403.
pub struct RoleGuard {
    allowed: &'static [Role],
}

impl RoleGuard {
    pub fn admin() -> Self {
        Self {
            allowed: &[Role::Admin],
        }
    }

    pub fn staff() -> Self {
        Self {
            allowed: &[Role::Admin, Role::Staff],
        }
    }

    pub fn any_user() -> Self {
        Self {
            allowed: &[Role::Admin, Role::Staff, Role::Professor],
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RoleGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RoleGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoleGuardService {
            service,
            allowed: self.allowed,
        }))
    }
}

pub struct RoleGuardService<S> {
    service: S,
    allowed: &'static [Role],
}

impl<S, B> Service<ServiceRequest> for RoleGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let check = claims_from_request(req.request()).and_then(|claims| {
            if self.allowed.contains(&claims.role) {
                Ok(())
            } else {
                Err(AuthError::InsufficientPermissions)
            }
        });

        match check {
            Ok(()) => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
            Err(err) => {
                let response = AuthenticationError(err).error_response();
                let (request, _) = req.into_parts();
                let res = ServiceResponse::new(request, response).map_into_right_body();
                Box::pin(async move { Ok(res) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::test::TestRequest;
    use folio_infra::{JwtConfig, JwtTokenService};

    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test".to_string(),
        }))
    }

    #[actix_rt::test]
    async fn identity_from_session_cookie() {
        let service = token_service();
        let token = service.generate_token(5, "staffer", Role::Staff).unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(service))
            .cookie(actix_web::cookie::Cookie::new("folio_session", token))
            .to_http_request();

        let identity = Identity::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert_eq!(identity.user_id, 5);
        assert_eq!(identity.username, "staffer");
        assert_eq!(identity.role, Role::Staff);
    }

    #[actix_rt::test]
    async fn identity_from_bearer_header() {
        let service = token_service();
        let token = service.generate_token(1, "root", Role::Admin).unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(service))
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_http_request();

        let identity = Identity::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert_eq!(identity.role, Role::Admin);
    }

    #[actix_rt::test]
    async fn missing_token_is_rejected() {
        let req = TestRequest::default()
            .app_data(web::Data::new(token_service()))
            .to_http_request();

        let err = Identity::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), actix_web::http::StatusCode::UNAUTHORIZED);
        assert!(matches!(err.0, AuthError::MissingAuth));
    }

    #[actix_rt::test]
    async fn tampered_token_is_rejected() {
        let service = token_service();
        let token = service.generate_token(5, "staffer", Role::Staff).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');

        let req = TestRequest::default()
            .app_data(web::Data::new(service))
            .cookie(actix_web::cookie::Cookie::new("folio_session", tampered))
            .to_http_request();

        let result = Identity::from_request(&req, &mut Payload::None).await;
        assert!(result.is_err());
    }
}
