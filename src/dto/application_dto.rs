use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicationPayload {
    #[validate(length(min = 1, max = 50))]
    pub written_username: String,
    #[validate(length(min = 1, max = 50))]
    pub written_phone: String,
    #[validate(length(min = 1))]
    pub written_cover_letter: String,
}

/// The only application fields a vacancy owner gets to see.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationView {
    pub written_username: String,
    pub written_phone: String,
    pub written_cover_letter: String,
}
