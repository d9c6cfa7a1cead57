use sqlx::PgPool;

use crate::error::Result;
use crate::models::specialty::Specialty;

#[derive(Clone)]
pub struct SpecialtyService {
    pool: PgPool,
}

impl SpecialtyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Specialty>> {
        let specialties = sqlx::query_as::<_, Specialty>(
            "SELECT id, code, title, picture FROM specialties ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(specialties)
    }

    /// Code is the external lookup key for specialties.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Specialty>> {
        let specialty = sqlx::query_as::<_, Specialty>(
            "SELECT id, code, title, picture FROM specialties WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(specialty)
    }

    pub async fn search_by_title(&self, query: &str) -> Result<Vec<Specialty>> {
        let specialties = sqlx::query_as::<_, Specialty>(
            "SELECT id, code, title, picture FROM specialties WHERE title ILIKE $1 ORDER BY title",
        )
        .bind(format!("%{}%", query))
        .fetch_all(&self.pool)
        .await?;

        Ok(specialties)
    }
}
