use axum::http::HeaderMap;
use std::net::SocketAddr;

pub(crate) const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Best-effort client IP for a request.
///
/// Prefers the first entry of `X-Forwarded-For` (the address a reverse proxy
/// recorded for the original client), falling back to the transport peer
/// address. Never fails: malformed input degrades to returning the input
/// verbatim.
pub fn resolve_client_ip(headers: &HeaderMap, peer_addr: &str) -> String {
    if let Some(forwarded) = headers.get(X_FORWARDED_FOR).and_then(|v| v.to_str().ok())
        && !forwarded.is_empty()
    {
        // Proxies append entries, so the first one is the original client.
        let first = forwarded.split(", ").next().unwrap_or(forwarded).trim();
        return strip_port(first).to_string();
    }

    strip_port(peer_addr).to_string()
}

/// Drops the port from a `host:port` or `[host]:port` address.
///
/// Splits when the string parses as a full socket address, or when a single
/// colon is followed by digits (a hostname with a port never parses as a
/// `SocketAddr`). Anything else — a bare IP, a bare IPv6 like `::1`,
/// garbage — is returned unchanged, so a colon inside an unbracketed IPv6
/// address is never mistaken for a port separator.
fn strip_port(addr: &str) -> &str {
    if addr.parse::<SocketAddr>().is_ok() {
        let host = match addr.rfind(':') {
            Some(i) => &addr[..i],
            None => addr,
        };
        return host.trim_start_matches('[').trim_end_matches(']');
    }

    if let Some((host, port)) = addr.split_once(':')
        && !host.is_empty()
        && !host.contains(':')
        && !port.is_empty()
        && port.bytes().all(|b| b.is_ascii_digit())
    {
        return host;
    }

    addr
}
