pub mod modules;
pub use modules::cv;
pub use modules::logo;
pub use modules::logs;
pub use modules::pages;
pub mod health;

use crate::logo::application::renderer::LogoRenderer;
use crate::logs::adapter::outgoing::log_repo_postgres::LogRepoPostgres;
use crate::logs::application::use_cases::fetch_logs::{FetchLogsUseCase, IFetchLogsUseCase};
use crate::logs::application::use_cases::record_log::{IRecordLogUseCase, RecordLogUseCase};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub struct AppState {
    pub record_log_use_case: Arc<dyn IRecordLogUseCase + Send + Sync>,
    pub fetch_logs_use_case: Arc<dyn IFetchLogsUseCase + Send + Sync>,
    pub logo_renderer: Arc<LogoRenderer>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // Stored log entries carry the deployment environment, not the host OS.
    let production = env_name == "production";

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Create repositories and use cases
    let log_repo = LogRepoPostgres::new(Arc::clone(&db_arc));
    let record_log_use_case = RecordLogUseCase::new(log_repo.clone(), production);
    let fetch_logs_use_case = FetchLogsUseCase::new(log_repo);

    let state = AppState {
        record_log_use_case: Arc::new(record_log_use_case),
        fetch_logs_use_case: Arc::new(fetch_logs_use_case),
        logo_renderer: Arc::new(LogoRenderer::new()),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .default_service(web::route().to(crate::pages::routes::not_found))
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // API
    cfg.service(crate::logo::adapter::incoming::web::routes::get_logo_handler);
    cfg.service(crate::logs::adapter::incoming::web::routes::create_log_handler);
    cfg.service(crate::logs::adapter::incoming::web::routes::get_logs_handler);
    // Pages
    cfg.service(crate::pages::routes::home);
    cfg.service(crate::pages::routes::about);
    cfg.service(crate::pages::routes::portfolio);
    cfg.service(crate::pages::routes::gallery);
    cfg.service(crate::pages::routes::contact);
    cfg.service(crate::pages::routes::cv);
    cfg.service(crate::pages::routes::privacy);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
