use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{auth, config::AppState};

/// Gate in front of the admin pages, applied to `/admin` but not to the
/// login page or the API routes. Browser requests without a valid session
/// are bounced to the login page; each request is evaluated on its own.
pub async fn require_admin_page(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let Ok(secret) = state.config.token_secret() else {
        // Without a signing secret no session can ever verify; redirecting
        // would just loop the browser through the login page.
        tracing::error!("admin gate cannot verify sessions: TOKEN_SECRET is not set");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    let authenticated = auth::extract_admin_token(req.headers())
        .is_some_and(|token| auth::verify_token(secret, &token));

    if authenticated {
        next.run(req).await
    } else {
        Redirect::to("/admin/login").into_response()
    }
}
