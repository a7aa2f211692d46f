use actix_web::{http::header, post, web, HttpRequest, HttpResponse, Responder};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::{
    logs::application::use_cases::record_log::RecordLogError,
    logs::domain::entities::{LogEntry, LogLevel},
    AppState,
};

const CONTENT_TYPE_MESSAGE: &str =
    "Invalid form body. Header 'content-type' must be of type 'application/json'.";
const INVALID_BODY_MESSAGE: &str = "Invalid form body.";

/// Accepts a JSON object with exactly two keys, `content` (non-empty string)
/// and `level` (one of INFO/WARN/ERROR/DEBUG). Anything else is a 400.
#[post("/api/logs")]
pub async fn create_log_handler(
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    if content_type != Some("application/json") {
        return HttpResponse::BadRequest().body(CONTENT_TYPE_MESSAGE);
    }

    let Some((content, level)) = parse_body(&body) else {
        return HttpResponse::BadRequest().body(INVALID_BODY_MESSAGE);
    };

    match data.record_log_use_case.execute(content, level).await {
        Ok(entry) => {
            emit(&entry);
            HttpResponse::Ok().body("Log successful")
        }
        Err(RecordLogError::EmptyContent) => HttpResponse::BadRequest().body(INVALID_BODY_MESSAGE),
        Err(RecordLogError::RepositoryError(msg)) => {
            error!("Repository error recording log: {}", msg);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Mirrors the accepted entry into the process logger at its own severity.
fn emit(entry: &LogEntry) {
    match entry.level {
        LogLevel::Info => info!(timestamp = entry.timestamp, "{}", entry.content),
        LogLevel::Warn => warn!(timestamp = entry.timestamp, "{}", entry.content),
        LogLevel::Error => error!(timestamp = entry.timestamp, "{}", entry.content),
        LogLevel::Debug => debug!(timestamp = entry.timestamp, "{}", entry.content),
    }
}

fn parse_body(body: &[u8]) -> Option<(String, LogLevel)> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let object = value.as_object()?;
    if object.len() != 2 {
        return None;
    }

    let content = object.get("content")?.as_str()?;
    if content.is_empty() {
        return None;
    }
    let level = LogLevel::parse(object.get("level")?.as_str()?)?;

    Some((content.to_owned(), level))
}
