use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::vacancy_dto::VacancySummary;
use crate::models::{company::Company, specialty::Specialty};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyCard {
    pub code: String,
    pub title: String,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCard {
    pub id: Uuid,
    pub name: String,
    pub logo: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainPageResponse {
    pub specialties: Vec<SpecialtyCard>,
    pub companies: Vec<CompanyCard>,
    pub skills_random: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub vacancies: Vec<VacancySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyVacanciesResponse {
    pub specialty: SpecialtyCard,
    pub vacancies: Vec<VacancySummary>,
    pub count: usize,
}

impl From<Specialty> for SpecialtyCard {
    fn from(value: Specialty) -> Self {
        Self {
            code: value.code,
            title: value.title,
            picture: value.picture,
        }
    }
}

impl From<Company> for CompanyCard {
    fn from(value: Company) -> Self {
        Self {
            id: value.id,
            name: value.name,
            logo: value.logo,
            location: value.location,
        }
    }
}
