use axum::{
    extract::State,
    response::{IntoResponse, Json, Redirect},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::auth_dto::{LoginPayload, LoginResponse, RegisterPayload, UserResponse},
    error::{Error, Result},
    utils::{crypto, token},
    AppState,
};

#[utoipa::path(
    post,
    path = "/register",
    responses(
        (status = 303, description = "User created, redirect to login"),
        (status = 400, description = "Invalid payload or username taken")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let password_hash = crypto::hash_password(&payload.password)
        .map_err(|err| Error::Internal(format!("password hashing failed: {err}")))?;
    state.user_service.create(&payload, &password_hash).await?;

    Ok(Redirect::to("/login"))
}

/// Resolvable target for the anonymous-redirect flow.
#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Login step")
    )
)]
#[axum::debug_handler]
pub async fn login_form() -> impl IntoResponse {
    Json(json!({ "next": "/login" }))
}

#[utoipa::path(
    post,
    path = "/login",
    responses(
        (status = 200, description = "Bearer token for the session"),
        (status = 400, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(|| Error::BadRequest("invalid username or password".to_string()))?;

    let verified = crypto::verify_password(&payload.password, &user.password_hash)
        .map_err(|err| Error::Internal(format!("password verification failed: {err}")))?;
    if !verified {
        return Err(Error::BadRequest("invalid username or password".to_string()));
    }

    let config = crate::config::get_config();
    let token = token::issue_token(user.id, &config.jwt_secret)?;

    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from(user),
    }))
}

#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Redirect to the home page")
    )
)]
#[axum::debug_handler]
pub async fn logout() -> impl IntoResponse {
    // Tokens are stateless; the client drops its copy.
    Redirect::to("/")
}
