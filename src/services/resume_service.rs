use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::resume_dto::ResumePayload;
use crate::error::Result;
use crate::models::resume::Resume;

const RESUME_COLUMNS: &str = "id, user_id, name, surname, status, salary, specialty_id, \
     grade, education, experience, portfolio, created_at, updated_at";

#[derive(Clone)]
pub struct ResumeService {
    pool: PgPool,
}

impl ResumeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Resume>> {
        let resume = sqlx::query_as::<_, Resume>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(resume)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        specialty_id: Uuid,
        payload: &ResumePayload,
    ) -> Result<Resume> {
        let resume = sqlx::query_as::<_, Resume>(&format!(
            r#"
            INSERT INTO resumes
                (user_id, name, surname, status, salary, specialty_id,
                 grade, education, experience, portfolio)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {RESUME_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(&payload.name)
        .bind(&payload.surname)
        .bind(payload.status.as_str())
        .bind(payload.salary)
        .bind(specialty_id)
        .bind(payload.grade.as_str())
        .bind(&payload.education)
        .bind(&payload.experience)
        .bind(&payload.portfolio)
        .fetch_one(&self.pool)
        .await?;

        Ok(resume)
    }

    pub async fn update_by_user(
        &self,
        user_id: Uuid,
        specialty_id: Uuid,
        payload: &ResumePayload,
    ) -> Result<Resume> {
        let resume = sqlx::query_as::<_, Resume>(&format!(
            r#"
            UPDATE resumes
            SET name = $2,
                surname = $3,
                status = $4,
                salary = $5,
                specialty_id = $6,
                grade = $7,
                education = $8,
                experience = $9,
                portfolio = $10,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {RESUME_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(&payload.name)
        .bind(&payload.surname)
        .bind(payload.status.as_str())
        .bind(payload.salary)
        .bind(specialty_id)
        .bind(payload.grade.as_str())
        .bind(&payload.education)
        .bind(&payload.experience)
        .bind(&payload.portfolio)
        .fetch_one(&self.pool)
        .await?;

        Ok(resume)
    }
}
