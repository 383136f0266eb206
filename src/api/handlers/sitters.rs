//! Handlers for sitter registration, login and account management.

use axum::{
    Json,
    extract::{Extension, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::auth::{
    LoginRequest, RegisterRequest, SessionResponse, SitterResponse, UpdateSitterRequest,
};
use crate::api::middleware::auth::CurrentSitter;
use crate::application::services::IssuedSession;
use crate::error::AppError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session_token";

/// Builds the `Set-Cookie` value for a freshly issued session.
///
/// `HttpOnly` keeps the token away from client script, `SameSite=Strict`
/// stops the browser from attaching it to cross-site requests.
fn session_cookie(session: &IssuedSession) -> String {
    let max_age = (session.expires_at - chrono::Utc::now().timestamp()).max(0);
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age}",
        session.token
    )
}

/// Builds the `Set-Cookie` value that removes the session cookie.
fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0")
}

/// Registers a new sitter account and logs it in.
///
/// # Endpoint
///
/// `POST /api/sitters/register`
///
/// # Behavior
///
/// On success the response carries the session token in an `HttpOnly`
/// cookie and the CSRF token in the JSON body. The client must echo the
/// CSRF token in `X-CSRF-Token` on every mutating request.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the email is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sitter = state
        .auth_service
        .register(
            payload.first_name,
            payload.last_name,
            payload.email,
            &payload.password,
        )
        .await?;

    tracing::info!(sitter_id = sitter.id, "New sitter registered");

    let session = state.auth_service.issue_session(sitter.id);
    let cookie = session_cookie(&session);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse {
            sitter: SitterResponse::from(sitter),
            csrf_token: session.csrf_token,
        }),
    ))
}

/// Authenticates a sitter and starts a session.
///
/// # Endpoint
///
/// `POST /api/sitters/login`
///
/// # Errors
///
/// Returns 401 Unauthorized on bad credentials. The error does not say
/// whether the email or the password was wrong.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sitter = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    let session = state.auth_service.issue_session(sitter.id);
    let cookie = session_cookie(&session);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse {
            sitter: SitterResponse::from(sitter),
            csrf_token: session.csrf_token,
        }),
    ))
}

/// Ends the current session by expiring the cookie.
///
/// # Endpoint
///
/// `POST /api/sitters/logout`
///
/// Tokens are stateless, so logout works purely client-side: the cookie
/// is replaced with an already-expired one.
pub async fn logout_handler() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, clear_session_cookie())],
    )
}

/// Returns the authenticated sitter's own account.
///
/// # Endpoint
///
/// `GET /api/sitters/me`
pub async fn get_me_handler(
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
) -> Result<Json<SitterResponse>, AppError> {
    let sitter = state.sitter_service.get_sitter(current.sitter_id).await?;
    Ok(Json(SitterResponse::from(sitter)))
}

/// Partially updates the authenticated sitter's own account.
///
/// # Endpoint
///
/// `PATCH /api/sitters/me`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the new email is taken.
pub async fn update_me_handler(
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateSitterRequest>,
) -> Result<Json<SitterResponse>, AppError> {
    payload.validate()?;

    let sitter = state
        .sitter_service
        .update_sitter(
            current.sitter_id,
            payload.first_name,
            payload.last_name,
            payload.email,
            payload.password.as_deref(),
        )
        .await?;

    Ok(Json(SitterResponse::from(sitter)))
}

/// Deletes the authenticated sitter's account with everything under it.
///
/// # Endpoint
///
/// `DELETE /api/sitters/me`
///
/// # Behavior
///
/// Removes the account together with all of its owners and their dogs,
/// then expires the session cookie.
pub async fn delete_me_handler(
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    state.sitter_service.delete_sitter(current.sitter_id).await?;

    tracing::info!(sitter_id = current.sitter_id, "Sitter account deleted");

    Ok((
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, clear_session_cookie())],
    ))
}
