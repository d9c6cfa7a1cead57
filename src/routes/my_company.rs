use axum::{
    extract::State,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::company_dto::{CompanyPayload, CompanyResponse},
    error::Result,
    middleware::auth::AuthUser,
    AppState,
};

/// GET /mycompany — the owner's company, or a redirect into onboarding
/// when none exists yet.
#[utoipa::path(
    get,
    path = "/mycompany",
    responses(
        (status = 200, description = "The acting user's company"),
        (status = 303, description = "No company yet, redirect to onboarding")
    )
)]
#[axum::debug_handler]
pub async fn edit_form(auth: AuthUser, State(state): State<AppState>) -> Result<Response> {
    match state.company_service.find_by_owner(auth.user_id).await? {
        Some(company) => Ok(Json(CompanyResponse::from(company)).into_response()),
        None => Ok(Redirect::to("/mycompany/start").into_response()),
    }
}

#[utoipa::path(
    post,
    path = "/mycompany",
    responses(
        (status = 303, description = "Company updated, redirect back"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CompanyPayload>,
) -> Result<Response> {
    if state
        .company_service
        .find_by_owner(auth.user_id)
        .await?
        .is_none()
    {
        return Ok(Redirect::to("/mycompany/start").into_response());
    }
    payload.validate()?;
    state
        .company_service
        .update_by_owner(auth.user_id, &payload)
        .await?;

    Ok(Redirect::to("/mycompany").into_response())
}

#[utoipa::path(
    get,
    path = "/mycompany/start",
    responses(
        (status = 200, description = "Company onboarding step")
    )
)]
#[axum::debug_handler]
pub async fn start(_auth: AuthUser) -> impl IntoResponse {
    Json(json!({ "next": "/mycompany/create" }))
}

#[utoipa::path(
    get,
    path = "/mycompany/create",
    responses(
        (status = 200, description = "Empty company form"),
        (status = 303, description = "Company already exists, redirect to edit")
    )
)]
#[axum::debug_handler]
pub async fn create_form(auth: AuthUser, State(state): State<AppState>) -> Result<Response> {
    if state
        .company_service
        .find_by_owner(auth.user_id)
        .await?
        .is_some()
    {
        return Ok(Redirect::to("/mycompany").into_response());
    }
    Ok(Json(json!({})).into_response())
}

/// A user that already owns a company is sent to the edit path instead;
/// no duplicate row is ever inserted.
#[utoipa::path(
    post,
    path = "/mycompany/create",
    responses(
        (status = 303, description = "Company created, redirect to edit"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CompanyPayload>,
) -> Result<Response> {
    if state
        .company_service
        .find_by_owner(auth.user_id)
        .await?
        .is_some()
    {
        return Ok(Redirect::to("/mycompany").into_response());
    }
    payload.validate()?;
    state.company_service.create(auth.user_id, &payload).await?;

    Ok(Redirect::to("/mycompany").into_response())
}
