use serde::Serialize;

/// `log_entries` row. Its id doubles as the live-update sequence number.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: i64,
    pub level: String,
    pub message: String,
    pub created_at: String,
}
