pub mod fetch_logs;
pub mod record_log;
