use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use finvault_core::db::{Database, LibSqlUserRepository, UserRepository};
use finvault_core::models::{UserId, UserPatch, UserRecord};

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    db: Arc<Mutex<Database>>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, db: Database) -> Self {
        Self {
            config,
            db: Arc::new(Mutex::new(db)),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user).patch(patch_user));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/v1", user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
    })
}

#[derive(Debug, Deserialize)]
struct ListUsersQuery {
    email: Option<String>,
}

async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserRecord>>, AppError> {
    let db = state.db.lock().await;
    let repo = LibSqlUserRepository::new(db.connection());

    match query.email {
        Some(email) => {
            let user = repo
                .find_by_email(&email)
                .await?
                .ok_or_else(|| AppError::not_found(format!("user with email {email}")))?;
            Ok(Json(vec![user]))
        }
        None => Ok(Json(repo.list().await?)),
    }
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserRecord>, AppError> {
    let id = parse_user_id(&id)?;

    let db = state.db.lock().await;
    let repo = LibSqlUserRepository::new(db.connection());
    let user = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("user {id}")))?;
    Ok(Json(user))
}

async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<UserRecord>, AppError> {
    let id = parse_user_id(&id)?;

    let db = state.db.lock().await;
    let repo = LibSqlUserRepository::new(db.connection());
    let updated = repo.update(&id, &patch).await?;
    tracing::info!(user = %id, "Applied user patch");
    Ok(Json(updated))
}

fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("invalid user id: {raw}")))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    async fn test_state() -> (AppState, UserRecord) {
        let db = Database::open_in_memory().await.unwrap();
        let seeded = UserRecord::new("Arjun Kumar", "arjun.kumar@email.com", "secret");
        LibSqlUserRepository::new(db.connection())
            .create(&seeded)
            .await
            .unwrap();

        let config = Arc::new(AppConfig::from_env().unwrap());
        (AppState::new(config, db), seeded)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_healthz() {
        let (state, _) = test_state().await;
        let response = app_router(state)
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_user_by_id() {
        let (state, seeded) = test_state().await;
        let response = app_router(state)
            .oneshot(
                Request::get(format!("/v1/users/{}", seeded.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["email"], "arjun.kumar@email.com");
        // The credential hash never leaves the store layer
        assert!(body.get("password_hash").is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_user_invalid_id() {
        let (state, _) = test_state().await;
        let response = app_router(state)
            .oneshot(
                Request::get("/v1/users/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_get_user_missing() {
        let (state, _) = test_state().await;
        let response = app_router(state)
            .oneshot(
                Request::get(format!("/v1/users/{}", UserId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_users_by_email() {
        let (state, seeded) = test_state().await;
        let response = app_router(state)
            .oneshot(
                Request::get("/v1/users?email=ARJUN.KUMAR@EMAIL.COM")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body[0]["id"], serde_json::json!(seeded.id));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_patch_user_updates_fields() {
        let (state, seeded) = test_state().await;
        let response = app_router(state)
            .oneshot(
                Request::patch(format!("/v1/users/{}", seeded.id))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"arjun_kumar"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["username"], "arjun_kumar");
        assert_eq!(body["name"], "Arjun Kumar");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_patch_missing_user() {
        let (state, _) = test_state().await;
        let response = app_router(state)
            .oneshot(
                Request::patch(format!("/v1/users/{}", UserId::new()))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"bio":"hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
