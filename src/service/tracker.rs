//! Fire-and-forget view tracking.
//!
//! Marking a story as viewed must never block or fail playback. Each call
//! runs on its own detached thread; errors are logged and dropped. There is
//! no ordering between requests and no retry.

use std::sync::Arc;
use std::thread;

use super::StoryService;
use crate::story::StoryId;

/// Sink for "story viewed" notifications.
pub trait ViewTracker: Send + Sync {
    /// Notify that `id` was shown. Must return immediately.
    fn mark_viewed(&self, id: &StoryId);
}

impl<F> ViewTracker for F
where
    F: Fn(&StoryId) + Send + Sync,
{
    fn mark_viewed(&self, id: &StoryId) {
        self(id)
    }
}

/// Tracker that drops every notification (offline playback).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullViewTracker;

impl ViewTracker for NullViewTracker {
    fn mark_viewed(&self, id: &StoryId) {
        tracing::trace!(%id, "View tracking disabled");
    }
}

/// Tracker that posts views through a [`StoryService`] on detached threads.
pub struct DetachedViewTracker<S> {
    service: Arc<S>,
}

impl<S> DetachedViewTracker<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }
}

impl<S> ViewTracker for DetachedViewTracker<S>
where
    S: StoryService + 'static,
{
    fn mark_viewed(&self, id: &StoryId) {
        let service = Arc::clone(&self.service);
        let id = id.clone();
        // Detached: the join handle is dropped.
        let spawned = thread::Builder::new()
            .name("story-view".to_string())
            .spawn(move || match service.view(&id) {
                Ok(()) => tracing::debug!(%id, "Marked story as viewed"),
                Err(e) => tracing::warn!(%id, error = %e, "Failed to mark story as viewed"),
            });
        if let Err(e) = spawned {
            tracing::warn!(error = %e, "Could not start view tracking thread");
        }
    }
}
