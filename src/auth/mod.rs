//! Session-based authentication and role enforcement.
//!
//! Protected routers are wrapped in [`session_auth_layer`]: the bearer token
//! is resolved against the identity store and the principal is inserted into
//! request extensions for handlers to extract. A missing or stale session is
//! a 401; a live session with the wrong role is a 403.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::{codes, ErrorDetails, ErrorResponse};
use crate::models::Role;
use crate::store::IdentityStore;

/// Authentication layer function. `required_role`, when given, restricts the
/// wrapped routes to principals of that role.
pub async fn session_auth_layer(
    identity: Arc<IdentityStore>,
    required_role: Option<Role>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request) else {
        return unauthorized_response("Missing bearer token");
    };

    let Some(principal) = identity.resolve(&token) else {
        return unauthorized_response("Invalid or expired session");
    };

    if let Some(role) = required_role {
        if principal.role != role {
            return forbidden_response(&format!(
                "This area requires the {} role",
                role.as_str()
            ));
        }
    }

    request.extensions_mut().insert(principal);
    next.run(request).await
}

/// Extract the token from the Authorization header.
fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    error_response(StatusCode::UNAUTHORIZED, codes::UNAUTHORIZED, message)
}

/// Create a forbidden response.
fn forbidden_response(message: &str) -> Response {
    error_response(StatusCode::FORBIDDEN, codes::FORBIDDEN, message)
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = ErrorResponse {
        success: false,
        error: ErrorDetails {
            code: code.to_string(),
            message: message.to_string(),
        },
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_auth(value: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_present() {
        let req = request_with_auth(Some("Bearer abc-123"));
        assert_eq!(bearer_token(&req).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let req = request_with_auth(None);
        assert!(bearer_token(&req).is_none());
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let req = request_with_auth(Some("Basic abc-123"));
        assert!(bearer_token(&req).is_none());
    }
}
