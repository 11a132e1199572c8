pub mod health;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::{self, middleware::require_session};
use crate::jobseeker;
use crate::recruiter;
use crate::search;
use crate::shortlist;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Every route in here needs a live session; role checks happen per handler.
    let protected = Router::new()
        .route("/logout", post(auth::handlers::handle_logout))
        // Job seeker
        .route("/jobseeker/dashboard", get(jobseeker::handlers::handle_dashboard))
        .route(
            "/jobseeker/profile",
            get(jobseeker::handlers::handle_get_profile).put(jobseeker::handlers::handle_update_profile),
        )
        .route("/jobseeker/skills", put(jobseeker::handlers::handle_update_skills))
        .route("/jobseeker/apply", post(jobseeker::handlers::handle_apply))
        .route(
            "/jobseeker/applications",
            get(jobseeker::handlers::handle_list_applications),
        )
        .route("/jobseeker/resume", get(jobseeker::handlers::handle_resume))
        // Recruiter
        .route("/recruiter/dashboard", get(recruiter::handlers::handle_dashboard))
        .route(
            "/recruiter/jobs",
            get(recruiter::handlers::handle_list_jobs).post(recruiter::handlers::handle_create_job),
        )
        .route(
            "/recruiter/jobs/:id",
            put(recruiter::handlers::handle_update_job).delete(recruiter::handlers::handle_delete_job),
        )
        .route(
            "/recruiter/applications",
            get(recruiter::handlers::handle_list_applications),
        )
        .route(
            "/recruiter/applications/:id/status",
            put(recruiter::handlers::handle_update_application_status),
        )
        .route(
            "/recruiter/shortlist",
            get(shortlist::handlers::handle_get_shortlist)
                .post(shortlist::handlers::handle_add_to_shortlist),
        )
        .route(
            "/recruiter/shortlist/clear",
            post(shortlist::handlers::handle_clear_shortlist),
        )
        .route(
            "/recruiter/shortlist/:id",
            delete(shortlist::handlers::handle_remove_from_shortlist),
        )
        // Search
        .route(
            "/search/candidates",
            post(search::handlers::handle_search_candidates),
        )
        .route("/search/jobs", post(search::handlers::handle_search_jobs))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/login", post(auth::handlers::handle_login))
        .route("/register", post(auth::handlers::handle_register))
        .route("/verify-token", get(auth::handlers::handle_verify_token))
        .merge(protected)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{
            header::{AUTHORIZATION, CONTENT_TYPE},
            Method, Request, StatusCode,
        },
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        let state = AppState::new(Config::default());
        state.store.seed_sample_jobs().await;
        build_router(state)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        read(app.clone().oneshot(request).await.unwrap()).await
    }

    async fn read(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn register(app: &Router, email: &str, user_type: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/register",
            None,
            Some(json!({
                "email": email,
                "password": "password123",
                "userType": user_type,
                "name": "Test User",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    fn multipart_body(boundary: &str, fields: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));
        body
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["search_backend"], "keyword");
    }

    #[tokio::test]
    async fn test_login_verify_logout_cycle() {
        let app = app().await;
        register(&app, "seeker@example.com", "jobseeker").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/login",
            None,
            Some(json!({
                "userEmail": "seeker@example.com",
                "password": "password123",
                "userType": "jobseeker",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token"], body["access_token"]);
        assert_eq!(body["user"]["type"], "jobseeker");
        let token = body["token"].as_str().unwrap().to_string();

        let (status, body) = send(&app, Method::GET, "/verify-token", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_email"], "seeker@example.com");

        let (status, _) = send(&app, Method::POST, "/logout", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, "/verify-token", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Could not validate credentials");
    }

    #[tokio::test]
    async fn test_login_failures_carry_detail() {
        let app = app().await;
        register(&app, "seeker@example.com", "jobseeker").await;

        let login = |password: &str, user_type: &str| {
            json!({
                "userEmail": "seeker@example.com",
                "password": password,
                "userType": user_type,
            })
        };

        let (status, body) = send(&app, Method::POST, "/login", None, Some(login("nope", "jobseeker"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Invalid password");

        let (status, body) =
            send(&app, Method::POST, "/login", None, Some(login("password123", "recruiter"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "User not found");
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_400() {
        let app = app().await;
        register(&app, "r@example.com", "recruiter").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/register",
            None,
            Some(json!({
                "email": "r@example.com",
                "password": "password123",
                "userType": "recruiter",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "User already exists");
    }

    #[tokio::test]
    async fn test_missing_token_and_wrong_role() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/search/candidates",
            None,
            Some(json!({"query": "python"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Token is required");

        let seeker = register(&app, "s@example.com", "jobseeker").await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/search/candidates",
            Some(&seeker),
            Some(json!({"query": "python"})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["detail"], "Access denied");
    }

    #[tokio::test]
    async fn test_candidate_search_ranks_and_rejects_blank_query() {
        let app = app().await;
        let token = register(&app, "r@example.com", "recruiter").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/search/candidates",
            Some(&token),
            Some(json!({"query": "Python  Machine Learning"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["name"], "Rahul Kumar");
        assert_eq!(results[0]["match"], 90);
        assert!(results.iter().all(|r| r["match"].as_u64().unwrap() > 0));

        let (status, body) = send(
            &app,
            Method::POST,
            "/search/candidates",
            Some(&token),
            Some(json!({"query": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Please enter a search query");
    }

    #[tokio::test]
    async fn test_registered_jobseeker_becomes_searchable() {
        let app = app().await;
        let seeker = register(&app, "meera@example.com", "jobseeker").await;
        let recruiter = register(&app, "r@example.com", "recruiter").await;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/jobseeker/skills",
            Some(&seeker),
            Some(json!({"skills": ["Elixir", "Phoenix"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(
            &app,
            Method::POST,
            "/search/candidates",
            Some(&recruiter),
            Some(json!({"query": "elixir"})),
        )
        .await;
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["email"], "meera@example.com");
        assert_eq!(results[0]["match"], 30);
    }

    #[tokio::test]
    async fn test_shortlist_lifecycle() {
        let app = app().await;
        let token = register(&app, "r@example.com", "recruiter").await;
        let add = |id: u32| Some(json!({"candidate_id": id}));

        let (status, body) = send(&app, Method::POST, "/recruiter/shortlist", Some(&token), add(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["added"], true);

        let (status, body) = send(&app, Method::POST, "/recruiter/shortlist", Some(&token), add(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["added"], false);
        assert_eq!(body["size"], 1);

        let (status, _) = send(&app, Method::POST, "/recruiter/shortlist", Some(&token), add(999)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send(&app, Method::POST, "/recruiter/shortlist", Some(&token), add(3)).await;
        let (_, body) = send(&app, Method::DELETE, "/recruiter/shortlist/42", Some(&token), None).await;
        assert_eq!(body["changed"], false);
        assert_eq!(body["size"], 2);

        let (_, body) = send(
            &app,
            Method::POST,
            "/recruiter/shortlist/clear",
            Some(&token),
            Some(json!({"confirmed": false})),
        )
        .await;
        assert_eq!(body["size"], 2);

        let (_, body) = send(&app, Method::GET, "/recruiter/shortlist", Some(&token), None).await;
        assert_eq!(body["candidates"][0]["id"], 1);
        assert_eq!(body["candidates"][1]["position"], 2);

        let (_, body) = send(
            &app,
            Method::POST,
            "/recruiter/shortlist/clear",
            Some(&token),
            Some(json!({"confirmed": true})),
        )
        .await;
        assert_eq!(body["size"], 0);
    }

    #[tokio::test]
    async fn test_shortlist_discarded_on_logout() {
        let app = app().await;
        let token = register(&app, "r@example.com", "recruiter").await;
        send(
            &app,
            Method::POST,
            "/recruiter/shortlist",
            Some(&token),
            Some(json!({"candidate_id": 2})),
        )
        .await;
        send(&app, Method::POST, "/logout", Some(&token), None).await;

        let (_, body) = send(
            &app,
            Method::POST,
            "/login",
            None,
            Some(json!({
                "userEmail": "r@example.com",
                "password": "password123",
                "userType": "recruiter",
            })),
        )
        .await;
        let fresh = body["token"].as_str().unwrap().to_string();
        let (_, body) = send(&app, Method::GET, "/recruiter/dashboard", Some(&fresh), None).await;
        assert_eq!(body["shortlist_size"], 0);
    }

    #[tokio::test]
    async fn test_post_job_apply_and_review() {
        let app = app().await;
        let recruiter = register(&app, "r@example.com", "recruiter").await;
        let seeker = register(&app, "s@example.com", "jobseeker").await;

        let boundary = "portal-test-boundary";
        let body = multipart_body(
            boundary,
            &[
                ("title", "Rust Engineer"),
                ("location", "Remote"),
                ("employmentType", "Full-time"),
                ("description", "Services in Rust"),
                ("skills", "Rust, Tokio"),
                ("minSalary", "1000"),
                ("maxSalary", "2000"),
            ],
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/recruiter/jobs")
            .header(AUTHORIZATION, format!("Bearer {recruiter}"))
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
            .body(Body::from(body))
            .unwrap();
        let (status, body) = read(app.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["job"]["skills"], json!(["Rust", "Tokio"]));
        let job_id = body["job"]["id"].as_u64().unwrap();

        let (_, body) = send(
            &app,
            Method::POST,
            "/search/jobs",
            Some(&seeker),
            Some(json!({"query": "tokio"})),
        )
        .await;
        assert_eq!(body["results"][0]["id"], job_id);

        let apply = Some(json!({"job_id": job_id}));
        let (status, _) = send(&app, Method::POST, "/jobseeker/apply", Some(&seeker), apply.clone()).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, Method::POST, "/jobseeker/apply", Some(&seeker), apply).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("already applied"));

        let (_, body) = send(&app, Method::GET, "/recruiter/applications", Some(&recruiter), None).await;
        let application_id = body["applications"][0]["id"].as_u64().unwrap();
        assert_eq!(body["applications"][0]["name"], "Test User");

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/recruiter/applications/{application_id}/status"),
            Some(&recruiter),
            Some(json!({"status": "Interview Scheduled"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["application"]["status"], "interview_scheduled");

        let (_, body) = send(&app, Method::GET, "/jobseeker/applications", Some(&seeker), None).await;
        assert_eq!(body["applications"][0]["title"], "Rust Engineer");
    }

    #[tokio::test]
    async fn test_apply_ignores_legacy_fields_in_any_format() {
        let app = app().await;
        let seeker = register(&app, "s@example.com", "jobseeker").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/jobseeker/apply",
            Some(&seeker),
            Some(json!({
                "job_id": 1,
                "jobseeker_email": "someone-else@example.com",
                "application_date": "2025-09-26",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["application"]["jobseeker_email"], "s@example.com");
    }

    #[tokio::test]
    async fn test_malformed_bodies_get_validation_error_shape() {
        let app = app().await;
        let seeker = register(&app, "s@example.com", "jobseeker").await;

        // wrong type for job_id
        let (status, body) = send(
            &app,
            Method::POST,
            "/jobseeker/apply",
            Some(&seeker),
            Some(json!({"job_id": "first"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(!body["detail"].as_str().unwrap().is_empty());

        // unparseable JSON
        let request = Request::builder()
            .method(Method::POST)
            .uri("/login")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{\"userEmail\":"))
            .unwrap();
        let (status, body) = read(app.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        // no content type at all
        let request = Request::builder()
            .method(Method::POST)
            .uri("/login")
            .body(Body::from("{}"))
            .unwrap();
        let (_, body) = read(app.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_job_post_without_multipart_body_is_validation_error() {
        let app = app().await;
        let recruiter = register(&app, "r@example.com", "recruiter").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/recruiter/jobs",
            Some(&recruiter),
            Some(json!({"title": "Rust Engineer"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_other_recruiters_job_is_not_found() {
        let app = app().await;
        let owner = register(&app, "owner@example.com", "recruiter").await;
        let other = register(&app, "other@example.com", "recruiter").await;

        let (_, body) = send(&app, Method::GET, "/recruiter/jobs", Some(&owner), None).await;
        assert!(body["jobs"].as_array().unwrap().is_empty());

        // seeded postings belong to the sample recruiter, not to either caller
        let (status, _) = send(&app, Method::DELETE, "/recruiter/jobs/1", Some(&other), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_profile_and_resume() {
        let app = app().await;
        let seeker = register(&app, "s@example.com", "jobseeker").await;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/jobseeker/profile",
            Some(&seeker),
            Some(json!({
                "name": "Kavya Menon",
                "location": "Kochi",
                "education": "B.Sc Physics",
                "summary": "Analyst moving into data engineering.",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, "/jobseeker/resume", Some(&seeker), None).await;
        assert_eq!(status, StatusCode::OK);
        let resume = body["resume"].as_str().unwrap();
        assert!(resume.starts_with("KAVYA MENON"));
        assert!(resume.contains("EDUCATION"));

        let (_, body) = send(&app, Method::GET, "/jobseeker/dashboard", Some(&seeker), None).await;
        assert_eq!(body["recent_jobs"].as_array().unwrap().len(), 4);
    }
}
