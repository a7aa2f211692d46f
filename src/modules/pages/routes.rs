use actix_web::{get, http::StatusCode, Responder};

use super::templates::{
    AboutTemplate, ContactTemplate, CvTemplate, GalleryTemplate, HomeTemplate, NotFoundTemplate,
    PortfolioTemplate, PrivacyTemplate,
};

#[get("/")]
pub async fn home() -> impl Responder {
    HomeTemplate
}

#[get("/about")]
pub async fn about() -> impl Responder {
    AboutTemplate::from_store()
}

#[get("/portfolio")]
pub async fn portfolio() -> impl Responder {
    PortfolioTemplate
}

#[get("/gallery")]
pub async fn gallery() -> impl Responder {
    GalleryTemplate
}

#[get("/contact")]
pub async fn contact() -> impl Responder {
    ContactTemplate
}

#[get("/cv")]
pub async fn cv() -> impl Responder {
    CvTemplate::from_store()
}

#[get("/privacy")]
pub async fn privacy() -> impl Responder {
    PrivacyTemplate
}

/// Wired through `default_service`, so every unmatched path lands here.
pub async fn not_found() -> impl Responder {
    (NotFoundTemplate, StatusCode::NOT_FOUND)
}
