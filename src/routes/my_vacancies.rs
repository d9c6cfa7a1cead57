use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Redirect, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    dto::vacancy_dto::{
        OwnedVacancyDetailResponse, OwnedVacancyListResponse, VacancyPayload, VacancySummary,
    },
    error::{Error, Result},
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    get,
    path = "/mycompany/vacancies",
    responses(
        (status = 200, description = "The owner's vacancies with application counts"),
        (status = 303, description = "No vacancies yet, redirect to onboarding")
    )
)]
#[axum::debug_handler]
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> Result<Response> {
    let vacancies = state.vacancy_service.list_by_owner(auth.user_id).await?;
    if vacancies.is_empty() {
        return Ok(Redirect::to("/mycompany/vacancies/start").into_response());
    }
    Ok(Json(OwnedVacancyListResponse { vacancies }).into_response())
}

#[utoipa::path(
    get,
    path = "/mycompany/vacancies/start",
    responses(
        (status = 200, description = "Vacancy onboarding step")
    )
)]
#[axum::debug_handler]
pub async fn start(_auth: AuthUser) -> impl IntoResponse {
    Json(json!({ "next": "/mycompany/vacancies/create" }))
}

#[utoipa::path(
    get,
    path = "/mycompany/vacancies/create",
    responses(
        (status = 200, description = "Empty vacancy form"),
        (status = 303, description = "Owner already has vacancies, redirect to the list")
    )
)]
#[axum::debug_handler]
pub async fn create_form(auth: AuthUser, State(state): State<AppState>) -> Result<Response> {
    if state.vacancy_service.owner_has_vacancies(auth.user_id).await? {
        return Ok(Redirect::to("/mycompany/vacancies").into_response());
    }
    Ok(Json(json!({})).into_response())
}

#[utoipa::path(
    post,
    path = "/mycompany/vacancies/create",
    responses(
        (status = 303, description = "Vacancy created, redirect to the list"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<VacancyPayload>,
) -> Result<Response> {
    // A vacancy needs an owning company first.
    let Some(company) = state.company_service.find_by_owner(auth.user_id).await? else {
        return Ok(Redirect::to("/mycompany/start").into_response());
    };
    payload.validate_form()?;
    let specialty = state
        .specialty_service
        .find_by_code(&payload.specialty)
        .await?
        .ok_or_else(|| Error::BadRequest(format!("unknown specialty {}", payload.specialty)))?;
    state
        .vacancy_service
        .create(company.id, specialty.id, &payload)
        .await?;

    Ok(Redirect::to("/mycompany/vacancies").into_response())
}

/// Owner-scoped vacancy view: the path id is trusted, the record is
/// fetched, and ownership is verified before anything is returned.
#[utoipa::path(
    get,
    path = "/mycompany/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy with its received applications"),
        (status = 303, description = "Not the owner, redirect to own vacancy list"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn edit_form(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    let vacancy = state
        .vacancy_service
        .find_listing(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("vacancy {id}")))?;
    let Some(company) = state.company_service.find_by_owner(auth.user_id).await? else {
        return Ok(Redirect::to("/mycompany/start").into_response());
    };
    if vacancy.company_id != company.id {
        return Ok(Redirect::to("/mycompany/vacancies").into_response());
    }

    let applications = state.application_service.list_for_vacancy(id).await?;
    Ok(Json(OwnedVacancyDetailResponse {
        vacancy: VacancySummary::from(vacancy),
        applications,
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/mycompany/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 303, description = "Vacancy updated, redirect back"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VacancyPayload>,
) -> Result<Response> {
    let vacancy = state
        .vacancy_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("vacancy {id}")))?;
    let Some(company) = state.company_service.find_by_owner(auth.user_id).await? else {
        return Ok(Redirect::to("/mycompany/start").into_response());
    };
    // Same policy as the GET: a non-owner is sent back to their own list
    // and nothing is written.
    if vacancy.company_id != company.id {
        return Ok(Redirect::to("/mycompany/vacancies").into_response());
    }
    payload.validate_form()?;
    let specialty = state
        .specialty_service
        .find_by_code(&payload.specialty)
        .await?
        .ok_or_else(|| Error::BadRequest(format!("unknown specialty {}", payload.specialty)))?;
    state
        .vacancy_service
        .update(id, specialty.id, &payload)
        .await?;

    Ok(Redirect::to(&format!("/mycompany/vacancies/{id}")).into_response())
}
