use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;

use crate::{
    auth,
    config::AppState,
    dto::{LoginRequest, MessageResponse},
    error::Error,
};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated, session cookie set", body = MessageResponse),
        (status = 400, description = "Password missing"),
        (status = 401, description = "Invalid password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
#[debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, Error> {
    // No verification is attempted without a password.
    let Some(password) = payload.password.filter(|p| !p.is_empty()) else {
        return Err(Error::Validation("Password is required".to_string()));
    };

    if !auth::verify_password(&state.config, &password)? {
        return Err(Error::InvalidPassword);
    }

    let token = auth::issue_token(&state.config)?;
    let cookie = auth::session_cookie(&token)
        .map_err(|e| Error::Internal(format!("failed to build session cookie: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    Ok((
        StatusCode::OK,
        headers,
        Json(MessageResponse {
            success: true,
            message: "Authenticated".to_string(),
        }),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "auth"
)]
#[debug_handler]
pub async fn logout() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, auth::clear_session_cookie());

    (
        StatusCode::OK,
        headers,
        Json(MessageResponse {
            success: true,
            message: "Logged out".to_string(),
        }),
    )
        .into_response()
}
