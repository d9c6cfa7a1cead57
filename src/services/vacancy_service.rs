use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vacancy_dto::{OwnedVacancyRow, VacancyPayload};
use crate::error::Result;
use crate::models::vacancy::{Vacancy, VacancyListing};

const VACANCY_COLUMNS: &str = "id, title, specialty_id, company_id, skills, description, \
     salary_min, salary_max, published_at, created_at, updated_at";

const LISTING_SELECT: &str = r#"
    SELECT v.id, v.title, v.skills, v.description, v.salary_min, v.salary_max,
           v.published_at,
           s.code AS specialty_code, s.title AS specialty_title,
           c.id AS company_id, c.name AS company_name
    FROM vacancies v
    JOIN specialties s ON s.id = v.specialty_id
    JOIN companies c ON c.id = v.company_id
"#;

#[derive(Clone)]
pub struct VacancyService {
    pool: PgPool,
}

impl VacancyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<VacancyListing>> {
        let items = sqlx::query_as::<_, VacancyListing>(&format!(
            "{LISTING_SELECT} ORDER BY v.published_at DESC, v.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn find_listing(&self, id: Uuid) -> Result<Option<VacancyListing>> {
        let item = sqlx::query_as::<_, VacancyListing>(&format!("{LISTING_SELECT} WHERE v.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vacancy>> {
        let vacancy = sqlx::query_as::<_, Vacancy>(&format!(
            "SELECT {VACANCY_COLUMNS} FROM vacancies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vacancy)
    }

    pub async fn list_by_specialty(&self, specialty_id: Uuid) -> Result<Vec<VacancyListing>> {
        let items = sqlx::query_as::<_, VacancyListing>(&format!(
            "{LISTING_SELECT} WHERE v.specialty_id = $1 ORDER BY v.published_at DESC"
        ))
        .bind(specialty_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<VacancyListing>> {
        let items = sqlx::query_as::<_, VacancyListing>(&format!(
            "{LISTING_SELECT} WHERE v.company_id = $1 ORDER BY v.published_at DESC"
        ))
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Owner's management list: strictly scoped to companies they own.
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<OwnedVacancyRow>> {
        let rows = sqlx::query_as::<_, OwnedVacancyRow>(
            r#"
            SELECT v.id, v.title, v.salary_min, v.salary_max,
                   (SELECT COUNT(*) FROM applications a WHERE a.vacancy_id = v.id) AS applications
            FROM vacancies v
            JOIN companies c ON c.id = v.company_id
            WHERE c.owner_id = $1
            ORDER BY v.published_at DESC, v.created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Resolves the user an application against this vacancy is attributed to.
    pub async fn find_owner(&self, vacancy_id: Uuid) -> Result<Option<Uuid>> {
        let owner = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT c.owner_id
            FROM vacancies v
            JOIN companies c ON c.id = v.company_id
            WHERE v.id = $1
            "#,
        )
        .bind(vacancy_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner)
    }

    pub async fn owner_has_vacancies(&self, owner_id: Uuid) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM vacancies v
            JOIN companies c ON c.id = v.company_id
            WHERE c.owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Company comes from the owner's record and published_at from the clock,
    /// never from the payload.
    pub async fn create(
        &self,
        company_id: Uuid,
        specialty_id: Uuid,
        payload: &VacancyPayload,
    ) -> Result<Vacancy> {
        let vacancy = sqlx::query_as::<_, Vacancy>(&format!(
            r#"
            INSERT INTO vacancies
                (title, specialty_id, company_id, skills, description, salary_min, salary_max)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {VACANCY_COLUMNS}
            "#
        ))
        .bind(&payload.title)
        .bind(specialty_id)
        .bind(company_id)
        .bind(&payload.skills)
        .bind(&payload.description)
        .bind(payload.salary_min)
        .bind(payload.salary_max)
        .fetch_one(&self.pool)
        .await?;

        Ok(vacancy)
    }

    pub async fn update(
        &self,
        id: Uuid,
        specialty_id: Uuid,
        payload: &VacancyPayload,
    ) -> Result<Vacancy> {
        let vacancy = sqlx::query_as::<_, Vacancy>(&format!(
            r#"
            UPDATE vacancies
            SET title = $2,
                specialty_id = $3,
                skills = $4,
                description = $5,
                salary_min = $6,
                salary_max = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {VACANCY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&payload.title)
        .bind(specialty_id)
        .bind(&payload.skills)
        .bind(&payload.description)
        .bind(payload.salary_min)
        .bind(payload.salary_max)
        .fetch_one(&self.pool)
        .await?;

        Ok(vacancy)
    }
}
