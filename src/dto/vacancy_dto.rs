use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::dto::application_dto::ApplicationView;
use crate::error::{Error, Result};
use crate::models::vacancy::VacancyListing;

/// One form serves both create and edit; company and published_at are
/// stamped server-side and never accepted from the client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VacancyPayload {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1))]
    pub specialty: String,
    #[validate(length(min = 1, max = 200))]
    pub skills: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0))]
    pub salary_min: i32,
    #[validate(range(min = 0))]
    pub salary_max: i32,
}

impl VacancyPayload {
    /// Field rules plus the cross-field salary range check.
    pub fn validate_form(&self) -> Result<()> {
        self.validate()?;
        if self.salary_min > self.salary_max {
            return Err(Error::BadRequest(
                "salary_min must not exceed salary_max".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancySummary {
    pub id: Uuid,
    pub title: String,
    pub skills: String,
    pub description: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub published_at: NaiveDate,
    pub specialty_code: String,
    pub specialty_title: String,
    pub company_id: Uuid,
    pub company_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyListResponse {
    pub vacancies: Vec<VacancySummary>,
}

/// Row of the owner's vacancy list, with the received-application count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OwnedVacancyRow {
    pub id: Uuid,
    pub title: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub applications: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedVacancyListResponse {
    pub vacancies: Vec<OwnedVacancyRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedVacancyDetailResponse {
    pub vacancy: VacancySummary,
    pub applications: Vec<ApplicationView>,
}

impl From<VacancyListing> for VacancySummary {
    fn from(value: VacancyListing) -> Self {
        Self {
            id: value.id,
            title: value.title,
            skills: value.skills,
            description: value.description,
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            published_at: value.published_at,
            specialty_code: value.specialty_code,
            specialty_title: value.specialty_title,
            company_id: value.company_id,
            company_name: value.company_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(min: i32, max: i32) -> VacancyPayload {
        VacancyPayload {
            title: "Backend developer".into(),
            specialty: "backend".into(),
            skills: "Python, Django, PostgreSQL".into(),
            description: "Build things".into(),
            salary_min: min,
            salary_max: max,
        }
    }

    #[test]
    fn accepts_well_formed_salary_range() {
        assert!(payload(50_000, 90_000).validate_form().is_ok());
    }

    #[test]
    fn rejects_inverted_salary_range() {
        assert!(payload(90_000, 50_000).validate_form().is_err());
    }

    #[test]
    fn rejects_negative_salary() {
        assert!(payload(-1, 100).validate_form().is_err());
    }

    #[test]
    fn rejects_empty_title() {
        let mut p = payload(1, 2);
        p.title = String::new();
        assert!(p.validate_form().is_err());
    }

    #[test]
    fn equal_min_and_max_is_allowed() {
        assert!(payload(70_000, 70_000).validate_form().is_ok());
    }
}
