use axum::{
    extract::State,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::resume_dto::{ResumeFormOptions, ResumePayload, ResumeResponse},
    error::{Error, Result},
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    get,
    path = "/myresume",
    responses(
        (status = 200, description = "The acting user's resume"),
        (status = 303, description = "No resume yet, redirect to onboarding")
    )
)]
#[axum::debug_handler]
pub async fn edit_form(auth: AuthUser, State(state): State<AppState>) -> Result<Response> {
    match state.resume_service.find_by_user(auth.user_id).await? {
        Some(resume) => Ok(Json(ResumeResponse::from(resume)).into_response()),
        None => Ok(Redirect::to("/myresume/start").into_response()),
    }
}

#[utoipa::path(
    post,
    path = "/myresume",
    responses(
        (status = 303, description = "Resume updated, redirect back"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ResumePayload>,
) -> Result<Response> {
    if state
        .resume_service
        .find_by_user(auth.user_id)
        .await?
        .is_none()
    {
        return Ok(Redirect::to("/myresume/start").into_response());
    }
    payload.validate()?;
    let specialty = state
        .specialty_service
        .find_by_code(&payload.specialty)
        .await?
        .ok_or_else(|| Error::BadRequest(format!("unknown specialty {}", payload.specialty)))?;
    state
        .resume_service
        .update_by_user(auth.user_id, specialty.id, &payload)
        .await?;

    Ok(Redirect::to("/myresume").into_response())
}

#[utoipa::path(
    get,
    path = "/myresume/start",
    responses(
        (status = 200, description = "Resume onboarding step")
    )
)]
#[axum::debug_handler]
pub async fn start(_auth: AuthUser) -> impl IntoResponse {
    Json(json!({ "next": "/myresume/create" }))
}

#[utoipa::path(
    get,
    path = "/myresume/create",
    responses(
        (status = 200, description = "Empty resume form with choice lists"),
        (status = 303, description = "Resume already exists, redirect to edit")
    )
)]
#[axum::debug_handler]
pub async fn create_form(auth: AuthUser, State(state): State<AppState>) -> Result<Response> {
    if state
        .resume_service
        .find_by_user(auth.user_id)
        .await?
        .is_some()
    {
        return Ok(Redirect::to("/myresume").into_response());
    }
    Ok(Json(ResumeFormOptions::new()).into_response())
}

#[utoipa::path(
    post,
    path = "/myresume/create",
    responses(
        (status = 303, description = "Resume created, redirect to edit"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<ResumePayload>,
) -> Result<Response> {
    if state
        .resume_service
        .find_by_user(auth.user_id)
        .await?
        .is_some()
    {
        return Ok(Redirect::to("/myresume").into_response());
    }
    payload.validate()?;
    let specialty = state
        .specialty_service
        .find_by_code(&payload.specialty)
        .await?
        .ok_or_else(|| Error::BadRequest(format!("unknown specialty {}", payload.specialty)))?;
    state
        .resume_service
        .create(auth.user_id, specialty.id, &payload)
        .await?;

    Ok(Redirect::to("/myresume").into_response())
}
