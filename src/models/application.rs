use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub written_username: String,
    pub written_phone: String,
    pub written_cover_letter: String,
    pub vacancy_id: Uuid,
    // the vacancy's company owner, not the submitter
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
