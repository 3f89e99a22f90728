use std::sync::Arc;

use crate::{api::RankingApi, config::Config, session::ViewSessions};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: Arc<ViewSessions>,
}

impl AppState {
    pub fn new(config: Config, api: Arc<dyn RankingApi>) -> Self {
        let sessions = Arc::new(ViewSessions::new(api, config.session_idle_timeout));
        Self { config, sessions }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<ViewSessions> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
