use crate::AppState;
use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use ipecho_core::access_log::AccessLogRecord;
use ipecho_core::client_ip::resolve_client_ip;
use std::net::SocketAddr;
use std::time::Instant;

/// Middleware that appends one access-log line per request.
///
/// The client IP is resolved here independently of the handler, so the log
/// stays correct even if a handler never looks at the address.
pub async fn access_log_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let protocol = format!("{:?}", request.version());
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let client_ip = resolve_client_ip(request.headers(), &peer);

    let response = next.run(request).await;

    // The response carries the status actually written; axum defaults it to
    // 200 when a handler never sets one explicitly.
    let record = AccessLogRecord::new(
        client_ip,
        method,
        uri,
        protocol,
        response.status().as_u16(),
        start.elapsed().as_micros(),
    );
    state.sink.append(&record.format_line());

    response
}
