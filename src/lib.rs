pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    application_service::ApplicationService, company_service::CompanyService,
    resume_service::ResumeService, search_service::SearchService,
    specialty_service::SpecialtyService, user_service::UserService,
    vacancy_service::VacancyService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub company_service: CompanyService,
    pub specialty_service: SpecialtyService,
    pub vacancy_service: VacancyService,
    pub application_service: ApplicationService,
    pub resume_service: ResumeService,
    pub search_service: SearchService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let user_service = UserService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());
        let specialty_service = SpecialtyService::new(pool.clone());
        let vacancy_service = VacancyService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let resume_service = ResumeService::new(pool.clone());
        let search_service = SearchService::new(pool.clone());

        Self {
            pool,
            user_service,
            company_service,
            specialty_service,
            vacancy_service,
            application_service,
            resume_service,
            search_service,
        }
    }
}
