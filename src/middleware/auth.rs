use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    response::Redirect,
};
use uuid::Uuid;

use crate::utils::token::decode_token;

/// The authenticated identity, threaded explicitly through handler
/// signatures. Missing or invalid credentials redirect to /login.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| Redirect::to("/login"))?;

        let config = crate::config::get_config();
        let claims =
            decode_token(token, &config.jwt_secret).map_err(|_| Redirect::to("/login"))?;
        let user_id = claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| Redirect::to("/login"))?;

        Ok(AuthUser { user_id })
    }
}
