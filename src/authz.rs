use crate::models::{Id, Post};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: Id,
    pub name: String,
}

/// Snapshot of the authentication context, injected into the view rather
/// than read from ambient state so any (user, logged-in) pair is testable.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
    pub is_logged_in: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in(user: User) -> Self {
        Self { user: Some(user), is_logged_in: true }
    }
}

/// True iff the viewer is logged in and is the author of the post.
pub fn can_moderate(session: &Session, post: &Post) -> bool {
    session.is_logged_in
        && session
            .user
            .as_ref()
            .is_some_and(|u| u.user_id == post.author.user_id)
}

/// Which moderation affordances to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModerationControls {
    pub edit: bool,
    pub delete: bool,
    pub complete: bool,
}

impl ModerationControls {
    pub fn any(&self) -> bool {
        self.edit || self.delete || self.complete
    }
}

/// Controls are shown only to the author of a post that is not yet
/// completed. Once completed, nobody gets them, the author included.
pub fn moderation_controls(session: &Session, post: &Post) -> ModerationControls {
    if can_moderate(session, post) && !post.status.is_completed() {
        ModerationControls { edit: true, delete: true, complete: true }
    } else {
        ModerationControls::default()
    }
}
