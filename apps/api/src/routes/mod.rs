pub mod health;
pub mod params;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::dashboard::handlers as dashboard;
use crate::jobs::handlers as jobs;
use crate::messaging::handlers as messaging;
use crate::profiles::handlers as profiles;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/login", post(auth::handle_login))
        // Search
        .route("/api/v1/search/talent", get(search::handle_search_talent))
        .route("/api/v1/search/jobs", get(search::handle_search_jobs))
        // Profiles
        .route("/api/v1/profiles", put(profiles::handle_upsert_profile))
        .route(
            "/api/v1/profiles/:id",
            get(profiles::handle_get_profile).delete(profiles::handle_delete_profile),
        )
        .route(
            "/api/v1/profiles/:id/contact",
            post(profiles::handle_contact_candidate),
        )
        .route(
            "/api/v1/profiles/:id/save",
            post(profiles::handle_toggle_saved),
        )
        // Job posts
        .route("/api/v1/jobs", put(jobs::handle_upsert_job))
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job).delete(jobs::handle_delete_job),
        )
        .route("/api/v1/jobs/:id/apply", post(jobs::handle_apply))
        // Messaging
        .route("/api/v1/messages", post(messaging::handle_send_message))
        .route(
            "/api/v1/messages/threads",
            get(messaging::handle_list_threads),
        )
        .route(
            "/api/v1/messages/threads/:other_id",
            get(messaging::handle_open_thread),
        )
        .route(
            "/api/v1/messages/unread",
            get(messaging::handle_unread_count),
        )
        // Dashboards
        .route(
            "/api/v1/dashboard/seeker",
            get(dashboard::handle_seeker_dashboard),
        )
        .route(
            "/api/v1/dashboard/employer",
            get(dashboard::handle_employer_dashboard),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::models::profile::{Profile, Visibility};
    use crate::store::MockDb;

    fn app_with(db: MockDb) -> Router {
        build_router(AppState::new(db))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn seeded_db() -> MockDb {
        let db = MockDb::new();
        let john = Profile {
            id: "cv-john".to_string(),
            full_name: "John Seeker".to_string(),
            job_title: "Frontend Engineer".to_string(),
            skills: vec!["React".to_string(), "CSS".to_string()],
            city: Some("Toronto".to_string()),
            country: Some("Canada".to_string()),
            visibility: Visibility::Public,
            ..Profile::default()
        };
        let hidden = Profile {
            id: "cv-hidden".to_string(),
            full_name: "John Seeker".to_string(),
            job_title: "React Specialist".to_string(),
            visibility: Visibility::EmployersOnly,
            ..Profile::default()
        };
        db.upsert_profile("u1", john).await.unwrap();
        db.upsert_profile("u1", hidden).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(MockDb::new());
        let response = send(&app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_talent_search_only_public_profiles() {
        let app = app_with(seeded_db().await);
        let response = send(&app, Method::GET, "/api/v1/search/talent?q=react%20toronto", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["results"][0]["id"], "cv-john");
        assert_eq!(body["results"][0]["score"], 25);
    }

    #[tokio::test]
    async fn test_talent_search_browse_and_country_filter() {
        let app = app_with(seeded_db().await);

        let body = json_body(send(&app, Method::GET, "/api/v1/search/talent", None).await).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["results"][0]["score"], 1);

        let body = json_body(
            send(&app, Method::GET, "/api/v1/search/talent?country=Germany", None).await,
        )
        .await;
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_employer_dashboard_sees_employers_only_profiles() {
        let app = app_with(seeded_db().await);
        let response = send(
            &app,
            Method::GET,
            "/api/v1/dashboard/employer?user_id=u2&q=react",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        // cv-hidden: title 20 ; cv-john: skill 10
        assert_eq!(body["search"]["total"], 2);
        assert_eq!(body["search"]["results"][0]["id"], "cv-hidden");
        assert_eq!(body["search"]["results"][1]["id"], "cv-john");
        assert_eq!(body["unreadCount"], 0);
    }

    #[tokio::test]
    async fn test_employer_dashboard_rejects_seeker() {
        let app = app_with(MockDb::new());
        let response = send(&app, Method::GET, "/api/v1/dashboard/employer?user_id=u1", None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_profile_view_visibility() {
        let app = app_with(seeded_db().await);

        let anon = send(&app, Method::GET, "/api/v1/profiles/cv-hidden", None).await;
        assert_eq!(anon.status(), StatusCode::FORBIDDEN);

        let employer = send(
            &app,
            Method::GET,
            "/api/v1/profiles/cv-hidden?viewer_id=u2",
            None,
        )
        .await;
        assert_eq!(employer.status(), StatusCode::OK);
        let body = json_body(employer).await;
        assert_eq!(body["profile"]["jobTitle"], "React Specialist");
        assert_eq!(body["saved"], false);

        let missing = send(&app, Method::GET, "/api/v1/profiles/nope", None).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflict() {
        let app = app_with(MockDb::new());
        let response = send(
            &app,
            Method::POST,
            "/api/v1/auth/register",
            Some(json!({
                "fullName": "Another John",
                "email": "seeker@procv.com",
                "password": "pw",
                "role": "JOB_SEEKER"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            json_body(response).await["error"]["message"],
            "Identity already registered."
        );
    }

    #[tokio::test]
    async fn test_login_hides_password() {
        let app = app_with(MockDb::new());
        let response = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({"email": "employer@procv.com", "password": "password"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["id"], "u2");
        assert!(body.get("password").is_none());

        let bad = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({"email": "employer@procv.com", "password": "nope"})),
        )
        .await;
        assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_job_post_apply_and_inbox_flow() {
        let app = app_with(MockDb::new());

        let created = send(
            &app,
            Method::PUT,
            "/api/v1/jobs?user_id=u2",
            Some(json!({
                "title": "Rust Engineer",
                "location": "Toronto",
                "requirements": ["Rust", "Tokio"]
            })),
        )
        .await;
        assert_eq!(created.status(), StatusCode::OK);
        let job = json_body(created).await;
        let job_id = job["id"].as_str().unwrap().to_string();
        assert_eq!(job["companyName"], "Elite Recruiting");

        let board = json_body(send(&app, Method::GET, "/api/v1/search/jobs?q=tokio", None).await).await;
        assert_eq!(board["total"], 1);
        assert_eq!(board["results"][0]["score"], 10);

        let applied = send(
            &app,
            Method::POST,
            &format!("/api/v1/jobs/{job_id}/apply?user_id=u1"),
            Some(json!({"content": "Hire me"})),
        )
        .await;
        assert_eq!(applied.status(), StatusCode::CREATED);

        let unread = json_body(send(&app, Method::GET, "/api/v1/messages/unread?user_id=u2", None).await).await;
        assert_eq!(unread["unread"], 1);

        let threads = json_body(send(&app, Method::GET, "/api/v1/messages/threads?user_id=u2", None).await).await;
        assert_eq!(threads[0]["otherId"], "u1");
        assert_eq!(threads[0]["otherName"], "John Seeker");
        assert_eq!(threads[0]["unreadCount"], 1);

        let convo = json_body(
            send(&app, Method::GET, "/api/v1/messages/threads/u1?user_id=u2", None).await,
        )
        .await;
        assert_eq!(
            convo[0]["content"],
            "APPLICATION FOR RUST ENGINEER:\n\nHire me"
        );

        let unread = json_body(send(&app, Method::GET, "/api/v1/messages/unread?user_id=u2", None).await).await;
        assert_eq!(unread["unread"], 0);
    }

    #[tokio::test]
    async fn test_seeker_cannot_publish_job() {
        let app = app_with(MockDb::new());
        let response = send(
            &app,
            Method::PUT,
            "/api/v1/jobs?user_id=u1",
            Some(json!({"title": "Chef"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_user_is_unauthorized() {
        let app = app_with(MockDb::new());
        let response = send(&app, Method::GET, "/api/v1/messages/unread?user_id=ghost", None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_save_toggle_and_seeker_dashboard() {
        let app = app_with(seeded_db().await);

        let saved = json_body(
            send(&app, Method::POST, "/api/v1/profiles/cv-john/save?user_id=u2", None).await,
        )
        .await;
        assert_eq!(saved["saved"], true);

        let dash = json_body(
            send(&app, Method::GET, "/api/v1/dashboard/employer?user_id=u2", None).await,
        )
        .await;
        assert_eq!(dash["saved"][0]["id"], "cv-john");

        let seeker = send(&app, Method::GET, "/api/v1/dashboard/seeker?user_id=u1", None).await;
        assert_eq!(seeker.status(), StatusCode::OK);
        assert_eq!(json_body(seeker).await["profiles"].as_array().unwrap().len(), 2);
    }
}
