use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ContentItem, ContentKind};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Admin password
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateContentRequest {
    /// Item title
    pub title: Option<String>,
    /// Item body
    pub content: Option<String>,
    /// Category tag, defaults to `note` when omitted
    #[serde(rename = "type")]
    pub kind: Option<ContentKind>,
}

/// Partial update: a field is replaced only when supplied non-empty,
/// otherwise the stored value is kept.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ContentKind>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContentListResponse {
    pub success: bool,
    /// All items, most recently updated first
    pub items: Vec<ContentItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContentItemResponse {
    pub success: bool,
    pub item: ContentItem,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
