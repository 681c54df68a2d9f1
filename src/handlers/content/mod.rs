
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;

use crate::{
    auth,
    config::AppState,
    dto::{
        ContentItemResponse, ContentListResponse, CreateContentRequest, MessageResponse,
        UpdateContentRequest,
    },
    error::Error,
};

#[utoipa::path(
    get,
    path = "/api/content",
    responses(
        (status = 200, description = "All content items, most recently updated first", body = ContentListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "content"
)]
#[debug_handler]
pub async fn list_content(State(state): State<AppState>) -> Result<Response, Error> {
    let items = state.service.list().await?;

    Ok((
        StatusCode::OK,
        Json(ContentListResponse {
            success: true,
            items,
        }),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/content",
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Content item created", body = ContentItemResponse),
        (status = 400, description = "Missing title or content"),
        (status = 401, description = "Missing or invalid session"),
        (status = 500, description = "Internal server error")
    ),
    tag = "content"
)]
#[debug_handler]
pub async fn create_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateContentRequest>,
) -> Result<Response, Error> {
    auth::require_admin(&state.config, &headers)?;

    let item = state.service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContentItemResponse {
            success: true,
            item,
        }),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/content/{id}",
    params(
        ("id" = String, Path, description = "Content item id")
    ),
    request_body = UpdateContentRequest,
    responses(
        (status = 200, description = "Content item updated", body = ContentItemResponse),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Content item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "content"
)]
#[debug_handler]
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<UpdateContentRequest>,
) -> Result<Response, Error> {
    auth::require_admin(&state.config, &headers)?;

    let item = state.service.update(&id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ContentItemResponse {
            success: true,
            item,
        }),
    )
        .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/content/{id}",
    params(
        ("id" = String, Path, description = "Content item id")
    ),
    responses(
        (status = 200, description = "Content item deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Content item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "content"
)]
#[debug_handler]
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, Error> {
    auth::require_admin(&state.config, &headers)?;

    state.service.delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            success: true,
            message: "Content deleted".to_string(),
        }),
    )
        .into_response())
}
