use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::resume::Resume;

/// Closed list for Resume.status. Stored as text but only these values
/// pass the form boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    NotLooking,
    OpenToOffers,
    Looking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeGrade {
    Intern,
    Junior,
    Middle,
    Senior,
    Lead,
}

impl ResumeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStatus::NotLooking => "not_looking",
            ResumeStatus::OpenToOffers => "open_to_offers",
            ResumeStatus::Looking => "looking",
        }
    }

    pub const ALL: [ResumeStatus; 3] = [
        ResumeStatus::NotLooking,
        ResumeStatus::OpenToOffers,
        ResumeStatus::Looking,
    ];
}

impl ResumeGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeGrade::Intern => "intern",
            ResumeGrade::Junior => "junior",
            ResumeGrade::Middle => "middle",
            ResumeGrade::Senior => "senior",
            ResumeGrade::Lead => "lead",
        }
    }

    pub const ALL: [ResumeGrade; 5] = [
        ResumeGrade::Intern,
        ResumeGrade::Junior,
        ResumeGrade::Middle,
        ResumeGrade::Senior,
        ResumeGrade::Lead,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResumePayload {
    #[validate(length(min = 1, max = 20))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub surname: String,
    pub status: ResumeStatus,
    #[validate(range(min = 0))]
    pub salary: i32,
    #[validate(length(min = 1))]
    pub specialty: String,
    pub grade: ResumeGrade,
    #[validate(length(min = 1))]
    pub education: String,
    #[validate(length(min = 1))]
    pub experience: String,
    #[validate(url)]
    pub portfolio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeResponse {
    pub name: String,
    pub surname: String,
    pub status: String,
    pub salary: i32,
    pub specialty_id: uuid::Uuid,
    pub grade: String,
    pub education: String,
    pub experience: String,
    pub portfolio: String,
}

/// Choice lists surfaced to the resume form. Response-only, so the
/// `&'static str` lists are never deserialized.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeFormOptions {
    pub statuses: Vec<&'static str>,
    pub grades: Vec<&'static str>,
}

impl ResumeFormOptions {
    pub fn new() -> Self {
        Self {
            statuses: ResumeStatus::ALL.iter().map(|s| s.as_str()).collect(),
            grades: ResumeGrade::ALL.iter().map(|g| g.as_str()).collect(),
        }
    }
}

impl Default for ResumeFormOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Resume> for ResumeResponse {
    fn from(value: Resume) -> Self {
        Self {
            name: value.name,
            surname: value.surname,
            status: value.status,
            salary: value.salary,
            specialty_id: value.specialty_id,
            grade: value.grade,
            education: value.education,
            experience: value.experience,
            portfolio: value.portfolio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ResumePayload {
        ResumePayload {
            name: "Ada".into(),
            surname: "Lovelace".into(),
            status: ResumeStatus::Looking,
            salary: 120_000,
            specialty: "backend".into(),
            grade: ResumeGrade::Senior,
            education: "Mathematics".into(),
            experience: "Analytical engines".into(),
            portfolio: "https://example.com/ada".into(),
        }
    }

    #[test]
    fn accepts_valid_resume() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn rejects_bad_portfolio_url() {
        let mut p = payload();
        p.portfolio = "not a url".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_negative_salary() {
        let mut p = payload();
        p.salary = -5;
        assert!(p.validate().is_err());
    }

    #[test]
    fn status_outside_closed_list_fails_to_deserialize() {
        let raw = r#"{"name":"A","surname":"B","status":"retired","salary":1,
            "specialty":"backend","grade":"junior","education":"x",
            "experience":"y","portfolio":"https://example.com"}"#;
        assert!(serde_json::from_str::<ResumePayload>(raw).is_err());
    }

    #[test]
    fn form_options_serialize_every_status_and_grade() {
        let json = serde_json::to_value(ResumeFormOptions::new()).unwrap();
        let statuses = json["statuses"].as_array().unwrap();
        let grades = json["grades"].as_array().unwrap();
        assert_eq!(statuses.len(), ResumeStatus::ALL.len());
        assert_eq!(grades.len(), ResumeGrade::ALL.len());
        assert!(statuses.contains(&serde_json::json!("open_to_offers")));
        assert!(grades.contains(&serde_json::json!("middle")));
    }

    #[test]
    fn grade_round_trips_through_text() {
        for grade in ResumeGrade::ALL {
            let json = serde_json::to_string(&grade).unwrap();
            assert_eq!(json, format!("\"{}\"", grade.as_str()));
        }
    }
}
