use axum::extract::{ConnectInfo, RawQuery};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use ipecho_core::client_ip::resolve_client_ip;
use ipecho_core::error::AppError;
use serde::Serialize;
use std::net::SocketAddr;

#[derive(Debug, Serialize)]
struct IpResponse {
    ip: String,
}

/// First value of the `format` query parameter, if any.
///
/// Scanned from the raw query string so an odd query (duplicated keys,
/// stray separators) can never reject the request; anything that isn't
/// `format=json` falls through to plain text.
fn format_param(query: Option<&str>) -> Option<&str> {
    query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("format="))
}

/// Reports the caller's apparent IP address.
///
/// Plain text by default; `?format=json` switches to `{"ip": "..."}`.
pub async fn ip_handler(
    RawQuery(query): RawQuery,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let ip = resolve_client_ip(&headers, &peer.to_string());

    let response = if format_param(query.as_deref()) == Some("json") {
        let body = serde_json::to_string(&IpResponse { ip })?;
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()
    } else {
        (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], ip).into_response()
    };

    Ok(response)
}
