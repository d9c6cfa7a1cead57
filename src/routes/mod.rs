pub mod auth;
pub mod health;
pub mod my_company;
pub mod my_resume;
pub mod my_vacancies;
pub mod public;

use axum::{
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::cors::permissive_cors;
use crate::AppState;

pub fn app(state: AppState, uploads_dir: &str) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health))
        .route("/", get(public::main_page))
        .route("/search", get(public::search))
        .route("/vacancies", get(public::list_vacancies))
        .route("/vacancies/cat/:code", get(public::vacancies_by_specialty))
        .route(
            "/vacancies/:id",
            get(public::get_vacancy).post(public::apply_to_vacancy),
        )
        .route("/vacancies/:id/sent", get(public::application_sent))
        .route("/companies/:id", get(public::get_company));

    let auth_routes = Router::new()
        .route("/register", axum::routing::post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout));

    let account_routes = Router::new()
        .route(
            "/myresume",
            get(my_resume::edit_form).post(my_resume::update),
        )
        .route("/myresume/start", get(my_resume::start))
        .route(
            "/myresume/create",
            get(my_resume::create_form).post(my_resume::create),
        )
        .route(
            "/mycompany",
            get(my_company::edit_form).post(my_company::update),
        )
        .route("/mycompany/start", get(my_company::start))
        .route(
            "/mycompany/create",
            get(my_company::create_form).post(my_company::create),
        )
        .route("/mycompany/vacancies", get(my_vacancies::list))
        .route("/mycompany/vacancies/start", get(my_vacancies::start))
        .route(
            "/mycompany/vacancies/create",
            get(my_vacancies::create_form).post(my_vacancies::create),
        )
        .route(
            "/mycompany/vacancies/:id",
            get(my_vacancies::edit_form).post(my_vacancies::update),
        );

    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(account_routes)
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
}
