use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::vacancy_dto::VacancySummary;
use crate::models::company::Company;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyPayload {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(length(min = 1, max = 150))]
    pub location: String,
    pub logo: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0))]
    pub employee_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub logo: Option<String>,
    pub description: String,
    pub employee_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfileResponse {
    pub company: CompanyResponse,
    pub vacancies: Vec<VacancySummary>,
}

impl From<Company> for CompanyResponse {
    fn from(value: Company) -> Self {
        Self {
            id: value.id,
            name: value.name,
            location: value.location,
            logo: value.logo,
            description: value.description,
            employee_count: value.employee_count,
        }
    }
}
