use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

async fn test_app() -> Router {
    dotenvy::dotenv().ok();
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", "test_secret_key");
    let _ = jobboard_backend::config::init_config();

    let pool = jobboard_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    jobboard_backend::routes::app(jobboard_backend::AppState::new(pool), "./uploads")
}

async fn json_body(response: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn post_json(uri: &str, token: Option<&str>, body: &JsonValue) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

async fn register_and_login(app: &Router, username: &str) -> String {
    let payload = json!({
        "username": username,
        "password": "hunter2hunter2",
        "first_name": "Test",
        "last_name": "User",
        "email": format!("{username}@example.com"),
    });
    let response = app
        .clone()
        .oneshot(post_json("/register", None, &payload))
        .await
        .expect("register");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            None,
            &json!({ "username": username, "password": "hunter2hunter2" }),
        ))
        .await
        .expect("login");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    body["token"].as_str().expect("token").to_string()
}

async fn create_company(app: &Router, token: &str, name: &str) {
    let payload = json!({
        "name": name,
        "location": "Remote",
        "description": "A test company",
        "employee_count": 12,
    });
    let response = app
        .clone()
        .oneshot(post_json("/mycompany/create", Some(token), &payload))
        .await
        .expect("create company");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

async fn create_vacancy(app: &Router, token: &str, title: &str) -> String {
    let payload = json!({
        "title": title,
        "specialty": "backend",
        "skills": "Rust, Axum, PostgreSQL",
        "description": "Build the backend",
        "salary_min": 50_000,
        "salary_max": 90_000,
    });
    let response = app
        .clone()
        .oneshot(post_json(
            "/mycompany/vacancies/create",
            Some(token),
            &payload,
        ))
        .await
        .expect("create vacancy");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .clone()
        .oneshot(get("/mycompany/vacancies", Some(token)))
        .await
        .expect("list vacancies");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let vacancy = body["vacancies"]
        .as_array()
        .expect("vacancy list")
        .iter()
        .find(|v| v["title"] == title)
        .expect("created vacancy");
    vacancy["id"].as_str().expect("vacancy id").to_string()
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn application_flow_end_to_end() {
    let app = test_app().await;
    let suffix = Uuid::new_v4().simple().to_string();

    let token = register_and_login(&app, &format!("owner_{suffix}")).await;
    create_company(&app, &token, &format!("Acme {suffix}")).await;
    let vacancy_id = create_vacancy(&app, &token, &format!("Backend dev {suffix}")).await;

    // Anonymous application submission.
    let application = json!({
        "written_username": "Jane Applicant",
        "written_phone": "+1-555-0100",
        "written_cover_letter": "I would like this job.",
    });
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/vacancies/{vacancy_id}"),
            None,
            &application,
        ))
        .await
        .expect("apply");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/vacancies/{vacancy_id}/sent")
    );

    // The owner sees exactly that one application, three fields only.
    let response = app
        .clone()
        .oneshot(get(&format!("/mycompany/vacancies/{vacancy_id}"), Some(&token)))
        .await
        .expect("owner detail");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let applications = body["applications"].as_array().expect("applications");
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["written_username"], "Jane Applicant");
    assert_eq!(applications[0]["written_phone"], "+1-555-0100");
    assert_eq!(
        applications[0]["written_cover_letter"],
        "I would like this job."
    );
    assert!(applications[0].get("user_id").is_none());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn non_owner_edit_redirects_without_mutation() {
    let app = test_app().await;
    let suffix = Uuid::new_v4().simple().to_string();

    let owner_token = register_and_login(&app, &format!("owner_{suffix}")).await;
    create_company(&app, &owner_token, &format!("Owner Co {suffix}")).await;
    let title = format!("Protected vacancy {suffix}");
    let vacancy_id = create_vacancy(&app, &owner_token, &title).await;

    let rival_token = register_and_login(&app, &format!("rival_{suffix}")).await;
    create_company(&app, &rival_token, &format!("Rival Co {suffix}")).await;

    // Both read and write of someone else's vacancy bounce to the
    // rival's own vacancy list.
    let response = app
        .clone()
        .oneshot(get(
            &format!("/mycompany/vacancies/{vacancy_id}"),
            Some(&rival_token),
        ))
        .await
        .expect("rival read");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/mycompany/vacancies");

    let takeover = json!({
        "title": "Hijacked",
        "specialty": "backend",
        "skills": "None",
        "description": "Hijacked",
        "salary_min": 1,
        "salary_max": 2,
    });
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/mycompany/vacancies/{vacancy_id}"),
            Some(&rival_token),
            &takeover,
        ))
        .await
        .expect("rival write");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/mycompany/vacancies");

    // The owner's record is untouched.
    let response = app
        .clone()
        .oneshot(get(
            &format!("/mycompany/vacancies/{vacancy_id}"),
            Some(&owner_token),
        ))
        .await
        .expect("owner read");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["vacancy"]["title"], title.as_str());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn second_company_is_not_created() {
    let app = test_app().await;
    let suffix = Uuid::new_v4().simple().to_string();

    let token = register_and_login(&app, &format!("solo_{suffix}")).await;
    create_company(&app, &token, &format!("First Co {suffix}")).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/mycompany/create",
            Some(&token),
            &json!({
                "name": "Second Co",
                "location": "Elsewhere",
                "description": "Should not exist",
                "employee_count": 1,
            }),
        ))
        .await
        .expect("second create");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/mycompany");

    let response = app
        .clone()
        .oneshot(get("/mycompany", Some(&token)))
        .await
        .expect("company read");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], format!("First Co {suffix}"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn search_matches_title_and_skills_then_specialty_title() {
    let app = test_app().await;
    let suffix = Uuid::new_v4().simple().to_string();

    let token = register_and_login(&app, &format!("seeker_{suffix}")).await;
    create_company(&app, &token, &format!("Search Co {suffix}")).await;
    let needle = format!("needle{suffix}");
    let vacancy_id = create_vacancy(&app, &token, &needle).await;

    // A second vacancy whose title and skills share nothing with its
    // specialty title.
    let response = app
        .clone()
        .oneshot(post_json(
            "/mycompany/vacancies/create",
            Some(&token),
            &json!({
                "title": format!("Quest scripting {suffix}"),
                "specialty": "gamedev",
                "skills": format!("Lua, Blueprints, tag{suffix}"),
                "description": "Script quests",
                "salary_min": 40_000,
                "salary_max": 60_000,
            }),
        ))
        .await
        .expect("create second vacancy");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // A title hit returns exactly the matching vacancy.
    let response = app
        .clone()
        .oneshot(get(&format!("/search?search={needle}"), None))
        .await
        .expect("title search");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let found = body["vacancies"].as_array().expect("vacancies");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], vacancy_id.as_str());

    // A skills hit works the same way.
    let response = app
        .clone()
        .oneshot(get(&format!("/search?search=tag{suffix}"), None))
        .await
        .expect("skills search");
    let body = json_body(response).await;
    let found = body["vacancies"].as_array().expect("vacancies");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["title"], format!("Quest scripting {suffix}"));

    // No title or skills contain "Gamedev", so the specialty title is
    // consulted and its vacancies come back.
    let response = app
        .clone()
        .oneshot(get("/search?search=Gamedev", None))
        .await
        .expect("specialty search");
    let body = json_body(response).await;
    let found = body["vacancies"].as_array().expect("vacancies");
    assert!(found.iter().all(|v| v["specialty_code"] == "gamedev"));
    assert!(found
        .iter()
        .any(|v| v["title"] == format!("Quest scripting {suffix}")));

    // An empty query returns everything.
    let response = app
        .clone()
        .oneshot(get("/search?search=", None))
        .await
        .expect("empty search");
    let body = json_body(response).await;
    let found = body["vacancies"].as_array().expect("vacancies");
    assert!(found.iter().any(|v| v["id"] == vacancy_id.as_str()));
    assert!(found
        .iter()
        .any(|v| v["title"] == format!("Quest scripting {suffix}")));

    // A query matching nothing at all yields an empty list.
    let garbage = Uuid::new_v4().simple().to_string();
    let response = app
        .clone()
        .oneshot(get(&format!("/search?search=no-match-{garbage}"), None))
        .await
        .expect("garbage search");
    let body = json_body(response).await;
    assert!(body["vacancies"].as_array().expect("vacancies").is_empty());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn protected_routes_redirect_anonymous_to_login() {
    let app = test_app().await;

    for uri in ["/mycompany", "/myresume", "/mycompany/vacancies"] {
        let response = app.clone().oneshot(get(uri, None)).await.expect("request");
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(response.headers()[header::LOCATION], "/login", "{uri}");
    }

    // The redirect target itself resolves for anonymous users.
    let response = app.clone().oneshot(get("/login", None)).await.expect("login form");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn unknown_ids_return_fixed_not_found_body() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(get(&format!("/vacancies/{}", Uuid::new_v4()), None))
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    assert_eq!(&bytes[..], b"404 error - page not found");

    let response = app
        .clone()
        .oneshot(get("/vacancies/cat/no-such-specialty", None))
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
