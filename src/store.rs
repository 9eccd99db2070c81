use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::api::PostApi;
use crate::error::LoadError;
use crate::models::{Id, Post};
use crate::shell::{ConfirmPrompt, Navigator, Notifier};

pub const CONFIRM_DELETE: &str = "Really delete this post?";
pub const CONFIRM_COMPLETE: &str = "Mark this post as resolved? This cannot be undone.";
pub const NOTICE_DELETED: &str = "The post has been deleted.";
pub const NOTICE_DELETE_FAILED: &str = "Failed to delete the post.";
pub const NOTICE_COMPLETED: &str = "The post has been marked as resolved.";
pub const NOTICE_COMPLETE_FAILED: &str = "Failed to update the post status.";

/// Ephemeral state of one detail view. `loading` is true exactly while a
/// fetch is in flight; `error` is set only by a fetch that did not produce a
/// post and is cleared when the next fetch starts.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub post: Option<Post>,
    pub loading: bool,
    pub error: Option<LoadError>,
}

/// What the view should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    /// Nothing loaded yet and no fetch running.
    Empty,
    Loading,
    Failed(LoadError),
    Ready,
}

impl ViewState {
    pub fn phase(&self) -> ViewPhase {
        if self.loading {
            ViewPhase::Loading
        } else if let Some(err) = self.error {
            ViewPhase::Failed(err)
        } else if self.post.is_some() {
            ViewPhase::Ready
        } else {
            ViewPhase::Empty
        }
    }
}

/// Which path a mutating action took. Notices and navigation are side
/// effects; the outcome lets callers observe the result directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation prompt; no request was issued.
    Declined,
    /// Another mutating action is still in flight; refused, no side effects.
    Busy,
    Done,
    Failed,
}

/// Single source of truth for the detail view: owns the loaded post and
/// coordinates fetch, delete and complete against the remote API. One store
/// per view instance; nothing is shared across instances.
pub struct PostStore {
    api: Arc<dyn PostApi>,
    prompt: Arc<dyn ConfirmPrompt>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    state: RwLock<ViewState>,
    // Ticket for the most recent load; responses holding an older ticket
    // are stale (the route param changed underneath them) and are dropped.
    generation: AtomicU64,
    action_in_flight: AtomicBool,
}

impl PostStore {
    pub fn new(
        api: Arc<dyn PostApi>,
        prompt: Arc<dyn ConfirmPrompt>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            prompt,
            notifier,
            navigator,
            state: RwLock::new(ViewState::default()),
            generation: AtomicU64::new(0),
            action_in_flight: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current view state. The lock is never held across an
    /// await, so this cannot observe a half-applied update.
    pub fn state(&self) -> ViewState {
        self.state.read().unwrap().clone()
    }

    /// Fetch the post and apply the outcome, unless a newer load superseded
    /// this one in the meantime. Safe to call repeatedly; callers re-invoke
    /// it whenever the route's post id changes.
    pub async fn load(&self, post_id: Id) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().unwrap();
            state.loading = true;
            state.error = None;
        }

        let result = self.api.fetch_post(post_id).await;

        let mut state = self.state.write().unwrap();
        if self.generation.load(Ordering::SeqCst) != ticket {
            info!(post_id, "discarding superseded load response");
            return;
        }
        state.loading = false;
        match result {
            Ok(Some(post)) => {
                state.error = None;
                state.post = Some(post);
            }
            Ok(None) => {
                state.post = None;
                state.error = Some(LoadError::NotFound);
            }
            Err(err) => {
                // Stale-if-error: keep the previously loaded post.
                warn!(post_id, error = %err, "post fetch failed");
                state.error = Some(LoadError::FetchFailed);
            }
        }
    }

    /// Delete after confirmation. Success navigates to the board list the
    /// post belonged to; failure leaves the view untouched.
    pub async fn delete(&self, post_id: Id) -> ActionOutcome {
        if !self.prompt.confirm(CONFIRM_DELETE) {
            return ActionOutcome::Declined;
        }
        if self.action_in_flight.swap(true, Ordering::SeqCst) {
            return ActionOutcome::Busy;
        }
        let outcome = match self.api.delete_post(post_id).await {
            Ok(()) => {
                info!(post_id, "post deleted");
                self.notifier.notify(NOTICE_DELETED);
                let segment = {
                    let state = self.state.read().unwrap();
                    state.post.as_ref().map(|p| p.post_type.board_segment())
                };
                if let Some(segment) = segment {
                    self.navigator.navigate_to(&format!("/board/{segment}"));
                }
                ActionOutcome::Done
            }
            Err(err) => {
                warn!(post_id, error = %err, "post delete failed");
                self.notifier.notify(NOTICE_DELETE_FAILED);
                ActionOutcome::Failed
            }
        };
        self.action_in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    /// Mark the post resolved after an irreversibility warning. Success
    /// refetches so the displayed status reflects the server's transition.
    pub async fn complete(&self, post_id: Id) -> ActionOutcome {
        if !self.prompt.confirm(CONFIRM_COMPLETE) {
            return ActionOutcome::Declined;
        }
        if self.action_in_flight.swap(true, Ordering::SeqCst) {
            return ActionOutcome::Busy;
        }
        let outcome = match self.api.complete_post(post_id).await {
            Ok(()) => {
                info!(post_id, "post marked resolved");
                self.notifier.notify(NOTICE_COMPLETED);
                ActionOutcome::Done
            }
            Err(err) => {
                warn!(post_id, error = %err, "post complete failed");
                self.notifier.notify(NOTICE_COMPLETE_FAILED);
                ActionOutcome::Failed
            }
        };
        self.action_in_flight.store(false, Ordering::SeqCst);
        if outcome == ActionOutcome::Done {
            self.load(post_id).await;
        }
        outcome
    }
}
