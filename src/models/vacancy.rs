use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: Uuid,
    pub title: String,
    pub specialty_id: Uuid,
    pub company_id: Uuid,
    pub skills: String,
    pub description: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub published_at: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Vacancy row joined with its company and specialty names, as shown
/// on listing and detail pages.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyListing {
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
