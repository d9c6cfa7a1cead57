use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::company_dto::CompanyPayload;
use crate::error::Result;
use crate::models::company::Company;

const COMPANY_COLUMNS: &str =
    "id, name, location, logo, description, employee_count, owner_id, created_at, updated_at";

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE owner_id = $1"
        ))
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    pub async fn list_all(&self) -> Result<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE name ILIKE $1 ORDER BY name"
        ))
        .bind(format!("%{}%", query))
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    /// Owner is stamped from the authenticated identity, never the payload.
    pub async fn create(&self, owner_id: Uuid, payload: &CompanyPayload) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(&format!(
            r#"
            INSERT INTO companies (name, location, logo, description, employee_count, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(&payload.name)
        .bind(&payload.location)
        .bind(&payload.logo)
        .bind(&payload.description)
        .bind(payload.employee_count)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    pub async fn update_by_owner(
        &self,
        owner_id: Uuid,
        payload: &CompanyPayload,
    ) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(&format!(
            r#"
            UPDATE companies
            SET name = $2,
                location = $3,
                logo = $4,
                description = $5,
                employee_count = $6,
                updated_at = NOW()
            WHERE owner_id = $1
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(owner_id)
        .bind(&payload.name)
        .bind(&payload.location)
        .bind(&payload.logo)
        .bind(&payload.description)
        .bind(payload.employee_count)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }
}
