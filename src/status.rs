use crate::models::{PostStatus, PostType};

/// Style bucket for the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Active,
    Completed,
}

impl StatusClass {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusClass::Active => "status-active",
            StatusClass::Completed => "status-completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStatus {
    pub text: &'static str,
    pub class: StatusClass,
}

/// Maps the two independent post enums onto badge text and style. Pure and
/// total over the defined values; unknown wire values never reach here
/// because deserialization rejects them.
pub fn display_status(post_type: PostType, status: PostStatus) -> DisplayStatus {
    match (status, post_type) {
        (PostStatus::Completed, PostType::Missing) => DisplayStatus {
            text: "found!",
            class: StatusClass::Completed,
        },
        (PostStatus::Completed, PostType::Shelter) => DisplayStatus {
            text: "family found!",
            class: StatusClass::Completed,
        },
        (PostStatus::Active, PostType::Missing) => DisplayStatus {
            text: "searching",
            class: StatusClass::Active,
        },
        (PostStatus::Active, PostType::Shelter) => DisplayStatus {
            text: "sheltering",
            class: StatusClass::Active,
        },
    }
}
