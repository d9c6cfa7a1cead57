use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::application_dto::{ApplicationPayload, ApplicationView};
use crate::error::Result;
use crate::models::application::Application;

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applications are attributed to the vacancy's company owner, not the
    /// submitter; they are immutable after insert.
    pub async fn create(
        &self,
        vacancy_id: Uuid,
        owner_id: Uuid,
        payload: &ApplicationPayload,
    ) -> Result<Application> {
        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications
                (written_username, written_phone, written_cover_letter, vacancy_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, written_username, written_phone, written_cover_letter,
                      vacancy_id, user_id, created_at
            "#,
        )
        .bind(&payload.written_username)
        .bind(&payload.written_phone)
        .bind(&payload.written_cover_letter)
        .bind(vacancy_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    /// Only the three written fields are ever exposed to the vacancy owner.
    pub async fn list_for_vacancy(&self, vacancy_id: Uuid) -> Result<Vec<ApplicationView>> {
        let applications = sqlx::query_as::<_, ApplicationView>(
            r#"
            SELECT written_username, written_phone, written_cover_letter
            FROM applications
            WHERE vacancy_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }
}
