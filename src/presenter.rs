use chrono::{DateTime, Utc};

use crate::authz::{moderation_controls, ModerationControls, Session};
use crate::config::ClientConfig;
use crate::models::{Id, Post, PostType};
use crate::status::{display_status, DisplayStatus};

/// Rendered for every absent optional field; absence is never an error.
pub const PLACEHOLDER: &str = "-";

/// Coordinates handed to the map widget. Display-only, never selectable
/// from the detail view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub selectable: bool,
}

/// What the opaque comment subsystem needs: the post key and whether new
/// comments are still allowed (decided entirely inside that collaborator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentContext {
    pub post_id: Id,
    pub post_completed: bool,
}

/// Render-ready detail data, derived without mutating the source post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetailView {
    pub status: DisplayStatus,
    pub title: String,
    pub author_name: String,
    pub created_at: String,
    pub controls: ModerationControls,
    pub image_urls: Vec<String>,
    pub animal_name: String,
    pub animal_age: String,
    pub animal_category: String,
    pub animal_breed: String,
    pub gender: String,
    pub time_label: &'static str,
    pub time_value: String,
    pub location_label: &'static str,
    pub location_value: String,
    pub map_label: &'static str,
    pub map: MapView,
    pub content: String,
    pub comments: CommentContext,
}

/// Absolute gallery URLs: origin prefix + stored fragment, order preserved.
/// Always a fresh vector; empty input yields empty output.
pub fn absolute_image_urls(upload_base: &str, fragments: &[String]) -> Vec<String> {
    fragments
        .iter()
        .map(|fragment| format!("{upload_base}{fragment}"))
        .collect()
}

fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M").to_string()
}

fn or_placeholder(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Assembles the detail view from the raw post, the viewer's session and the
/// configured upload origin. Labels switch wording on the post type.
pub fn present(post: &Post, session: &Session, config: &ClientConfig) -> PostDetailView {
    let missing = post.post_type == PostType::Missing;
    PostDetailView {
        status: display_status(post.post_type, post.status),
        title: post.title.clone(),
        author_name: post.author.name.clone(),
        created_at: format_timestamp(&post.created_at),
        controls: moderation_controls(session, post),
        image_urls: absolute_image_urls(&config.upload_base, &post.image_urls),
        animal_name: or_placeholder(&post.animal_name),
        animal_age: post
            .animal_age
            .map(|age| format!("{age} years"))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        animal_category: or_placeholder(&post.animal_category),
        animal_breed: or_placeholder(&post.animal_breed),
        gender: or_placeholder(&post.gender),
        time_label: if missing { "Time lost" } else { "Time found" },
        time_value: post
            .lost_time
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        location_label: if missing { "Location lost" } else { "Location found" },
        location_value: or_placeholder(&post.location),
        map_label: if missing { "Estimated missing location" } else { "Found location" },
        map: MapView {
            latitude: post.latitude,
            longitude: post.longitude,
            selectable: false,
        },
        content: post.content.clone(),
        comments: CommentContext {
            post_id: post.id,
            post_completed: post.status.is_completed(),
        },
    }
}
