use serde::Deserialize;

/// The curriculum vitae as authored in `assets/cv.json`. Free-text fields may
/// contain `[label](url)` link markers, resolved at render time by
/// [`super::markup::format_links`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    pub skills: Vec<String>,
    pub work_experience: Vec<Experience>,
    pub qualifications: Vec<QualificationGroup>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub heading: String,
    pub details: String,
}

/// One education stage, with the grading scale spelled out between
/// `max_grade` and `min_grade`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationGroup {
    pub education_level: String,
    pub institution_name: String,
    pub institution_link: String,
    pub attainment_year: u16,
    pub max_grade: String,
    pub min_grade: String,
    pub grades: Vec<Grade>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub subject: String,
    pub grade: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialises_camel_case_document() {
        let json = r#"{
            "skills": ["Rust"],
            "workExperience": [
                {"heading": "Engineer at [Acme](https://acme.example)", "details": "Did things.\nMore things."}
            ],
            "qualifications": [
                {
                    "educationLevel": "Degree",
                    "institutionName": "A University",
                    "institutionLink": "https://uni.example",
                    "attainmentYear": 2021,
                    "maxGrade": "First",
                    "minGrade": "Third",
                    "grades": [{"subject": "Computer Science", "grade": "First"}]
                }
            ]
        }"#;

        let cv: Cv = serde_json::from_str(json).unwrap();

        assert_eq!(cv.skills, vec!["Rust"]);
        assert_eq!(cv.work_experience.len(), 1);
        assert!(cv.work_experience[0].details.contains('\n'));
        assert_eq!(cv.qualifications[0].attainment_year, 2021);
        assert_eq!(cv.qualifications[0].grades[0].subject, "Computer Science");
    }
}
