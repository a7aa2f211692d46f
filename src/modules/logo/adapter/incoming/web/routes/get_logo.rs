use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tracing::error;

use crate::{
    logo::domain::parameters::{Parameters, RawParameters},
    AppState,
};

/// Collects the known query parameters, keeping the first value when a key
/// is repeated. Unknown keys and undecodable queries are ignored rather than
/// rejected.
fn parse_parameters(query: &str) -> RawParameters {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
        .map(web::Query::into_inner)
        .unwrap_or_default();

    let mut raw = RawParameters::default();
    for (key, value) in pairs {
        let slot = match key.as_str() {
            "backgroundColour" => &mut raw.background_colour,
            "outerLineColour" => &mut raw.outer_line_colour,
            "innerLineColour" => &mut raw.inner_line_colour,
            "pinColour" => &mut raw.pin_colour,
            "innerColour" => &mut raw.inner_colour,
            "outerColour" => &mut raw.outer_colour,
            "topTextColour" => &mut raw.top_text_colour,
            "middleTextColour" => &mut raw.middle_text_colour,
            "bottomTextColour" => &mut raw.bottom_text_colour,
            "fileType" => &mut raw.file_type,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    raw
}

/// Generates the site emblem on demand. Every colour parameter is optional
/// and silently falls back to its default when missing or invalid, so this
/// endpoint never rejects a request over its query string.
#[get("/api/logo")]
pub async fn get_logo_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let parameters = Parameters::resolve(&parse_parameters(req.query_string()));
    let renderer = data.logo_renderer.clone();

    // Rasterisation of a 2048x2048 canvas is CPU-bound; keep it off the
    // async workers.
    let rendered =
        web::block(move || renderer.render(&parameters).map(|bytes| (bytes, parameters))).await;

    match rendered {
        Ok(Ok((bytes, parameters))) => {
            let mut response = HttpResponse::Ok();
            if let Some(content_type) = parameters.file_type.content_type() {
                response.content_type(content_type);
            }
            response.body(bytes)
        }
        Ok(Err(err)) => {
            error!("Failed to render logo: {}", err);
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            error!("Logo render task failed: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::logo::application::renderer::LogoRenderer;
    use crate::logs::application::use_cases::fetch_logs::{FetchLogsError, IFetchLogsUseCase};
    use crate::logs::application::use_cases::record_log::{IRecordLogUseCase, RecordLogError};
    use crate::logs::domain::entities::{LogEntry, LogLevel};

    struct UnusedRecordLogUseCase;

    #[async_trait]
    impl IRecordLogUseCase for UnusedRecordLogUseCase {
        async fn execute(
            &self,
            _content: String,
            _level: LogLevel,
        ) -> Result<LogEntry, RecordLogError> {
            unimplemented!("not used in logo tests")
        }
    }

    struct UnusedFetchLogsUseCase;

    #[async_trait]
    impl IFetchLogsUseCase for UnusedFetchLogsUseCase {
        async fn execute(&self, _production_only: bool) -> Result<Vec<LogEntry>, FetchLogsError> {
            unimplemented!("not used in logo tests")
        }
    }

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState {
            record_log_use_case: Arc::new(UnusedRecordLogUseCase),
            fetch_logs_use_case: Arc::new(UnusedFetchLogsUseCase),
            logo_renderer: Arc::new(LogoRenderer::new()),
        })
    }

    #[actix_web::test]
    async fn test_get_logo_defaults_to_svg() {
        let app = test::init_service(
            App::new().app_data(app_state()).service(get_logo_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/logo").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("<svg "));
    }

    #[actix_web::test]
    async fn test_get_logo_png() {
        let app = test::init_service(
            App::new().app_data(app_state()).service(get_logo_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/logo?fileType=png")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );

        let body = test::read_body(resp).await;
        assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[actix_web::test]
    async fn test_get_logo_data_url_sets_no_content_type() {
        let app = test::init_service(
            App::new().app_data(app_state()).service(get_logo_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/logo?fileType=dataUrl")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(header::CONTENT_TYPE).is_none());

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("data:image/png;base64,"));
    }

    #[actix_web::test]
    async fn test_get_logo_invalid_colour_falls_back_silently() {
        let app = test::init_service(
            App::new().app_data(app_state()).service(get_logo_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/logo?pinColour=zzzzzz")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("#1c7eea"));
    }

    #[::core::prelude::v1::test]
    fn test_parse_parameters_keeps_first_value_for_repeated_keys() {
        let raw = parse_parameters("fileType=png&fileType=svg&pinColour=094d1c&pinColour=zzzzzz");

        assert_eq!(raw.file_type.as_deref(), Some("png"));
        assert_eq!(raw.pin_colour.as_deref(), Some("094d1c"));
    }

    #[::core::prelude::v1::test]
    fn test_parse_parameters_ignores_unknown_keys() {
        let raw = parse_parameters("production=1&fileType=pdf");

        assert_eq!(raw.file_type.as_deref(), Some("pdf"));
        assert_eq!(raw.background_colour, None);
    }

    #[actix_web::test]
    async fn test_get_logo_duplicate_parameters_are_not_rejected() {
        let app = test::init_service(
            App::new().app_data(app_state()).service(get_logo_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/logo?fileType=png&fileType=png")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );

        let body = test::read_body(resp).await;
        assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[actix_web::test]
    async fn test_get_logo_valid_colours_are_applied() {
        let app = test::init_service(
            App::new().app_data(app_state()).service(get_logo_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/logo?backgroundColour=094D1C&outerColour=%23ffffff")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains(r##"fill="#094D1C""##));
        assert!(text.contains(r##"fill="#ffffff""##));
    }
}
