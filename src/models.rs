use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Server identifiers are plain integers.
pub type Id = i64;

/// Classification of a report: a missing pet or an animal held at a shelter.
/// Immutable after creation; drives vocabulary and the board path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostType {
    Missing,
    Shelter,
}

impl PostType {
    /// Path segment of the board list this post belongs to (`/board/{segment}`).
    pub fn board_segment(&self) -> &'static str {
        match self {
            PostType::Missing => "missing",
            PostType::Shelter => "shelter",
        }
    }
}

/// Lifecycle flag. The only legal transition is Active -> Completed, one-way,
/// performed by the server when the complete action succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    Active,
    Completed,
}

impl PostStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, PostStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub user_id: Id,
    pub name: String,
}

/// A single lost/found-pet report as the server sends it. Unknown `postType`
/// or `status` values are rejected at deserialization; the strict enums above
/// are the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id,
    pub post_type: PostType,
    pub status: PostStatus,
    pub author: Author,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub animal_name: Option<String>,
    #[serde(default)]
    pub animal_age: Option<u32>,
    #[serde(default)]
    pub animal_category: Option<String>,
    #[serde(default)]
    pub animal_breed: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub lost_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Relative path fragments; joined with the upload origin by the presenter.
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}
