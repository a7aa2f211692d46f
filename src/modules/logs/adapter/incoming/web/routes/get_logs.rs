use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tracing::error;

use crate::{
    logs::application::use_cases::fetch_logs::FetchLogsError, logs::domain::entities::LogEntry,
    AppState,
};

/// Returns every stored entry as newline-joined human-readable lines. The
/// `production` query parameter is presence-only: `?production` (with or
/// without a value) restricts the listing to production-flagged entries.
#[get("/api/logs")]
pub async fn get_logs_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let production_only = req
        .query_string()
        .split('&')
        .any(|pair| pair == "production" || pair.starts_with("production="));

    match data.fetch_logs_use_case.execute(production_only).await {
        Ok(entries) => {
            let body = entries
                .iter()
                .map(LogEntry::display_line)
                .collect::<Vec<_>>()
                .join("\n");
            HttpResponse::Ok().body(body)
        }
        Err(FetchLogsError::RepositoryError(msg)) => {
            error!("Repository error fetching logs: {}", msg);
            HttpResponse::InternalServerError().finish()
        }
    }
}
