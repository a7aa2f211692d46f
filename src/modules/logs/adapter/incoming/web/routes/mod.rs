mod create_log;
mod get_logs;

pub use create_log::create_log_handler;
pub use get_logs::get_logs_handler;
