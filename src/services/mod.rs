pub mod application_service;
pub mod company_service;
pub mod resume_service;
pub mod search_service;
pub mod specialty_service;
pub mod user_service;
pub mod vacancy_service;
