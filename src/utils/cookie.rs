// src/utils/cookie.rs

use axum::http::{HeaderMap, HeaderValue, header};
use uuid::Uuid;

use crate::config::SESSION_COOKIE;

/// Reads the view session id from the request's `Cookie` headers.
/// A missing or malformed value yields `None`.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to its view session.
pub fn session_cookie(id: Uuid) -> HeaderValue {
    let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
    // A hyphenated uuid and fixed attributes are always a valid header value.
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static("ranking_session=; Path=/"))
}
