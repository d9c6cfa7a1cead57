use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Redirect, Response},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        application_dto::ApplicationPayload,
        company_dto::{CompanyProfileResponse, CompanyResponse},
        search_dto::{
            CompanyCard, MainPageResponse, SearchQuery, SearchResponse, SpecialtyCard,
            SpecialtyVacanciesResponse,
        },
        vacancy_dto::{VacancyListResponse, VacancySummary},
    },
    error::{Error, Result},
    AppState,
};

const SKILLS_SAMPLE_SIZE: usize = 5;

#[utoipa::path(
    get,
    path = "/",
    params(
        ("search" = Option<String>, Query, description = "Filter specialties and companies")
    ),
    responses(
        (status = 200, description = "Specialties, companies and random skill tags")
    )
)]
#[axum::debug_handler]
pub async fn main_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse> {
    let (specialties, companies) = match query.search.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => (
            state.specialty_service.search_by_title(q).await?,
            state.company_service.search_by_name(q).await?,
        ),
        None => (
            state.specialty_service.list_all().await?,
            state.company_service.list_all().await?,
        ),
    };
    let skills_random = state.search_service.skills_sample(SKILLS_SAMPLE_SIZE).await?;

    Ok(Json(MainPageResponse {
        specialties: specialties.into_iter().map(SpecialtyCard::from).collect(),
        companies: companies.into_iter().map(CompanyCard::from).collect(),
        skills_random,
    }))
}

#[utoipa::path(
    get,
    path = "/search",
    params(
        ("search" = Option<String>, Query, description = "Vacancy search query")
    ),
    responses(
        (status = 200, description = "Matching vacancies")
    )
)]
#[axum::debug_handler]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse> {
    let vacancies = state
        .search_service
        .search_vacancies(query.search.as_deref())
        .await?;

    Ok(Json(SearchResponse {
        vacancies: vacancies.into_iter().map(VacancySummary::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/vacancies",
    responses(
        (status = 200, description = "All vacancies")
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let vacancies = state.vacancy_service.list_all().await?;
    Ok(Json(VacancyListResponse {
        vacancies: vacancies.into_iter().map(VacancySummary::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/vacancies/cat/{code}",
    params(
        ("code" = String, Path, description = "Specialty code")
    ),
    responses(
        (status = 200, description = "Vacancies of one specialty"),
        (status = 404, description = "Unknown specialty code")
    )
)]
#[axum::debug_handler]
pub async fn vacancies_by_specialty(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse> {
    let specialty = state
        .specialty_service
        .find_by_code(&code)
        .await?
        .ok_or_else(|| Error::NotFound(format!("specialty {code}")))?;
    let vacancies = state.vacancy_service.list_by_specialty(specialty.id).await?;
    let vacancies: Vec<VacancySummary> =
        vacancies.into_iter().map(VacancySummary::from).collect();

    Ok(Json(SpecialtyVacanciesResponse {
        specialty: specialty.into(),
        count: vacancies.len(),
        vacancies,
    }))
}

#[utoipa::path(
    get,
    path = "/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy detail"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let vacancy = state
        .vacancy_service
        .find_listing(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("vacancy {id}")))?;

    Ok(Json(json!({ "vacancy": VacancySummary::from(vacancy) })))
}

/// Public application form: no authentication required. The application
/// is attributed to the vacancy's company owner.
#[utoipa::path(
    post,
    path = "/vacancies/{id}",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 303, description = "Application stored, redirect to the sent page"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn apply_to_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ApplicationPayload>,
) -> Result<Response> {
    payload.validate()?;
    let owner_id = state
        .vacancy_service
        .find_owner(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("vacancy {id}")))?;

    state
        .application_service
        .create(id, owner_id, &payload)
        .await?;

    Ok(Redirect::to(&format!("/vacancies/{id}/sent")).into_response())
}

#[utoipa::path(
    get,
    path = "/vacancies/{id}/sent",
    params(
        ("id" = Uuid, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Submission acknowledgement")
    )
)]
#[axum::debug_handler]
pub async fn application_sent(Path(id): Path<Uuid>) -> impl IntoResponse {
    Json(json!({ "vacancy_id": id, "message": "application sent" }))
}

#[utoipa::path(
    get,
    path = "/companies/{id}",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company profile with its vacancies"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let company = state
        .company_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("company {id}")))?;
    let vacancies = state.vacancy_service.list_by_company(company.id).await?;

    Ok(Json(CompanyProfileResponse {
        company: CompanyResponse::from(company),
        vacancies: vacancies.into_iter().map(VacancySummary::from).collect(),
    }))
}
