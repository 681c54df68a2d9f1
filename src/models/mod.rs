use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category tag carried by every content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Note,
    Update,
    Link,
}

impl ContentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Update => "update",
            Self::Link => "link",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "note" => Some(Self::Note),
            "update" => Some(Self::Update),
            "link" => Some(Self::Link),
            _ => None,
        }
    }
}

/// A single feed post. The store owns all instances; callers get clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Opaque id, assigned at creation and never changed
    pub id: String,
    pub title: String,
    pub content: String,
    /// Category tag, serialized as `type`
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation
    pub updated_at: DateTime<Utc>,
}
