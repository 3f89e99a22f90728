// src/handlers/page.rs

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Response},
};
use uuid::Uuid;

use crate::{
    config::Config,
    session::{RankingSystemView, ViewSessions},
    utils::cookie::{session_cookie, session_id},
    view::render_page,
};

/// Loads the page: mounts a new view for this browser, waits for its four
/// fetches and renders it.
pub async fn show_page(
    State(sessions): State<Arc<ViewSessions>>,
    State(config): State<Config>,
    headers: HeaderMap,
) -> Response {
    let (id, view) = sessions.open(session_id(&headers));

    let mut view = view.lock().await;
    view.settle().await;

    page_response(id, &view, &config)
}

/// Renders `view` and re-issues the session cookie.
pub(crate) fn page_response(id: Uuid, view: &RankingSystemView, config: &Config) -> Response {
    let body = render_page(view, config.display_locale);
    ([(header::SET_COOKIE, session_cookie(id))], Html(body)).into_response()
}
