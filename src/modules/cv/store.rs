use std::sync::OnceLock;

use super::domain::entities::Cv;

const CV_JSON: &str = include_str!("../../../assets/cv.json");

/// The CV ships inside the binary; a parse failure is a build defect, caught
/// by the tests below before it can ship.
pub fn cv() -> &'static Cv {
    static CV: OnceLock<Cv> = OnceLock::new();
    CV.get_or_init(|| serde_json::from_str(CV_JSON).expect("embedded cv.json is valid"))
}
