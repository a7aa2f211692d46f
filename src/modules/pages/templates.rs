use askama::Template;

use crate::cv::domain::entities::QualificationGroup;
use crate::cv::domain::markup::format_links_html;
use crate::cv::store;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate;

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate;

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

#[derive(Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// One work-experience entry with its `[label](url)` markers already
/// rendered to HTML fragments.
pub struct ExperienceView {
    pub heading_html: String,
    pub details_html: String,
}

/// The CV as the templates consume it, shared by the about and CV pages
/// through the `cv_sections.html` partial.
pub struct CvView {
    pub skills: &'static [String],
    pub experiences: Vec<ExperienceView>,
    pub qualifications: &'static [QualificationGroup],
}

impl CvView {
    pub fn from_store() -> Self {
        let cv = store::cv();
        Self {
            skills: &cv.skills,
            experiences: cv
                .work_experience
                .iter()
                .map(|experience| ExperienceView {
                    heading_html: format_links_html(&experience.heading),
                    details_html: format_links_html(&experience.details),
                })
                .collect(),
            qualifications: &cv.qualifications,
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub cv: CvView,
}

impl AboutTemplate {
    pub fn from_store() -> Self {
        Self {
            cv: CvView::from_store(),
        }
    }
}

#[derive(Template)]
#[template(path = "cv.html")]
pub struct CvTemplate {
    pub cv: CvView,
}

impl CvTemplate {
    pub fn from_store() -> Self {
        Self {
            cv: CvView::from_store(),
        }
    }
}
