//! Access-log records and the sink they are appended to.

use chrono::{FixedOffset, Utc};
use serde::Serialize;

/// Report timestamps are rendered in a hard-coded +8h offset, carried over
/// from the original deployment. Deliberately not the host timezone.
const REPORT_OFFSET_SECS: i32 = 8 * 3600;

/// One access-log record, built once the response is complete.
#[derive(Debug, Clone, Serialize)]
pub struct AccessLogRecord {
    pub client_ip: String,
    pub timestamp: String,
    pub method: String,
    pub uri: String,
    pub protocol: String,
    pub status: u16,
    pub duration_micros: u128,
}

impl AccessLogRecord {
    /// Builds a record stamped with the current report time.
    pub fn new(
        client_ip: String,
        method: String,
        uri: String,
        protocol: String,
        status: u16,
        duration_micros: u128,
    ) -> Self {
        Self {
            client_ip,
            timestamp: report_timestamp(),
            method,
            uri,
            protocol,
            status,
            duration_micros,
        }
    }

    /// Renders the Apache-combined-inspired line:
    ///
    /// `<ip> - - [<timestamp>] "<METHOD> <URI> <PROTO>" <status> <micros>`
    pub fn format_line(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} {}\" {} {}",
            self.client_ip,
            self.timestamp,
            self.method,
            self.uri,
            self.protocol,
            self.status,
            self.duration_micros,
        )
    }
}

fn report_timestamp() -> String {
    let offset = FixedOffset::east_opt(REPORT_OFFSET_SECS).expect("static offset in range");
    Utc::now()
        .with_timezone(&offset)
        .format("%d/%b/%Y:%H:%M:%S %z")
        .to_string()
}

/// Append-only sink for access-log lines.
///
/// Implementations must keep each line atomic under concurrent append; the
/// middleware calls `append` from one task per in-flight request.
pub trait LogSink: Send + Sync {
    fn append(&self, line: &str);
}

/// Default sink: forwards each line as a single `tracing` event on the
/// `access` target, so ordinary subscriber configuration routes it.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn append(&self, line: &str) {
        tracing::info!(target: "access", "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_layout_is_space_delimited_with_quoted_request() {
        let record = AccessLogRecord {
            client_ip: "1.2.3.4".to_string(),
            timestamp: "30/Aug/2026:12:00:00 +0800".to_string(),
            method: "GET".to_string(),
            uri: "/?format=json".to_string(),
            protocol: "HTTP/1.1".to_string(),
            status: 200,
            duration_micros: 417,
        };
        assert_eq!(
            record.format_line(),
            "1.2.3.4 - - [30/Aug/2026:12:00:00 +0800] \"GET /?format=json HTTP/1.1\" 200 417"
        );
    }

    #[test]
    fn report_timestamp_uses_the_fixed_offset() {
        let ts = report_timestamp();
        assert!(ts.ends_with("+0800"), "unexpected timestamp: {ts}");
        chrono::DateTime::parse_from_str(&ts, "%d/%b/%Y:%H:%M:%S %z")
            .expect("timestamp should round-trip through its own format");
    }

    #[test]
    fn new_stamps_the_record() {
        let record = AccessLogRecord::new(
            "::1".to_string(),
            "POST".to_string(),
            "/x".to_string(),
            "HTTP/2.0".to_string(),
            500,
            12,
        );
        assert!(record.timestamp.contains("+0800"));
        assert!(record.format_line().ends_with("\" 500 12"));
    }
}
