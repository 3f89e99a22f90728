// src/session/store.rs

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use uuid::Uuid;

use super::RankingSystemView;
use crate::api::RankingApi;

pub type SharedView = Arc<tokio::sync::Mutex<RankingSystemView>>;

struct SessionEntry {
    view: SharedView,
    last_seen: Instant,
}

/// Live views, one per browser, keyed by the session cookie.
///
/// Views idle for longer than the timeout are dropped, which cancels their
/// outstanding fetches.
pub struct ViewSessions {
    api: Arc<dyn RankingApi>,
    idle_timeout: Duration,
    entries: Mutex<HashMap<Uuid, SessionEntry>>,
}

impl ViewSessions {
    pub fn new(api: Arc<dyn RankingApi>, idle_timeout: Duration) -> Self {
        Self {
            api,
            idle_timeout,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Replaces the browser's view with a newly mounted one (a page load).
    /// The previous view, if any, is torn down.
    pub fn open(&self, id: Option<Uuid>) -> (Uuid, SharedView) {
        let id = id.unwrap_or_else(Uuid::new_v4);
        let view = self.mounted_view();

        let previous = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            self.purge_idle(&mut entries);
            entries.insert(
                id,
                SessionEntry {
                    view: Arc::clone(&view),
                    last_seen: Instant::now(),
                },
            )
        };
        if previous.is_some() {
            tracing::debug!("Replaced view of session {}", id);
        }

        (id, view)
    }

    /// Returns the browser's live view, mounting a new one when the session
    /// is unknown or has expired.
    pub fn resume(&self, id: Option<Uuid>) -> (Uuid, SharedView) {
        if let Some(id) = id {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            self.purge_idle(&mut entries);
            if let Some(entry) = entries.get_mut(&id) {
                entry.last_seen = Instant::now();
                return (id, Arc::clone(&entry.view));
            }
        }

        self.open(id)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn mounted_view(&self) -> SharedView {
        let mut view = RankingSystemView::new(Arc::clone(&self.api));
        view.mount();
        Arc::new(tokio::sync::Mutex::new(view))
    }

    fn purge_idle(&self, entries: &mut HashMap<Uuid, SessionEntry>) {
        let before = entries.len();
        entries.retain(|_, entry| entry.last_seen.elapsed() < self.idle_timeout);
        let purged = before - entries.len();
        if purged > 0 {
            tracing::debug!("Tore down {} idle views", purged);
        }
    }
}
