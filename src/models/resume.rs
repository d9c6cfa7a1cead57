use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub surname: String,
    pub status: String,
    pub salary: i32,
    pub specialty_id: Uuid,
    pub grade: String,
    pub education: String,
    pub experience: String,
    pub portfolio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
