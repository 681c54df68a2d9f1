pub mod auth;
pub mod content;
pub mod pages;

use utoipa::OpenApi;

use crate::{
    dto::{
        ContentItemResponse, ContentListResponse, CreateContentRequest, LoginRequest,
        MessageResponse, UpdateContentRequest,
    },
    models::{ContentItem, ContentKind},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        content::list_content,
        content::create_content,
        content::update_content,
        content::delete_content
    ),
    components(schemas(
        ContentItem,
        ContentKind,
        ContentItemResponse,
        ContentListResponse,
        CreateContentRequest,
        LoginRequest,
        MessageResponse,
        UpdateContentRequest
    )),
    tags(
        (name = "auth", description = "Admin session API"),
        (name = "content", description = "Content management API")
    )
)]
pub struct ApiDoc;
