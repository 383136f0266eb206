//! Session cookie authentication middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method, header},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::api::handlers::sitters::SESSION_COOKIE;
use crate::{error::AppError, state::AppState};

/// Name of the header carrying the CSRF echo on mutating requests.
pub const CSRF_HEADER: &str = "x-csrf-token";

/// The authenticated sitter, inserted into request extensions for handlers.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSitter {
    pub sitter_id: i64,
}

/// Authenticates requests using the `session_token` cookie.
///
/// # Authentication Flow
///
/// 1. Extract the token from the `Cookie` header
/// 2. Verify its HMAC signature and expiry
/// 3. For mutating methods, compare `X-CSRF-Token` against the session's
///    CSRF claim
/// 4. Insert [`CurrentSitter`] into request extensions
/// 5. Continue to next middleware/handler
///
/// The CSRF check exists because the cookie travels automatically: a
/// cross-site form could trigger a mutation, but it cannot read the CSRF
/// token from the login response body.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The session cookie is missing
/// - The token is malformed, forged or expired
/// - A mutating request carries no or a wrong `X-CSRF-Token`
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = session_cookie_value(req.headers()).ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Session cookie is missing"}),
        )
    })?;

    let session = st.auth_service.verify_session(&token)?;

    if requires_csrf(req.method()) {
        let echoed = req
            .headers()
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok());

        if echoed != Some(session.csrf_token.as_str()) {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "CSRF token is missing or does not match"}),
            ));
        }
    }

    req.extensions_mut().insert(CurrentSitter {
        sitter_id: session.sitter_id,
    });

    Ok(next.run(req).await)
}

/// Safe methods skip the CSRF check, everything else must echo the token.
fn requires_csrf(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Pulls the session token out of the `Cookie` header.
fn session_cookie_value(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_cookie_value_found_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session_token=abc.def; lang=de"),
        );
        assert_eq!(session_cookie_value(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_session_cookie_value_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_cookie_value(&headers), None);

        assert_eq!(session_cookie_value(&HeaderMap::new()), None);
    }

    #[test]
    fn test_requires_csrf_per_method() {
        assert!(!requires_csrf(&Method::GET));
        assert!(!requires_csrf(&Method::HEAD));
        assert!(requires_csrf(&Method::POST));
        assert!(requires_csrf(&Method::PATCH));
        assert!(requires_csrf(&Method::DELETE));
    }
}
