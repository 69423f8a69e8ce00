//! # API REST
//!
//! REST API implementation for the consultas service.
//!
//! Handles:
//! - HTTP endpoints with axum (`/api/consultas`, `/health`)
//! - The frontend's static pages and assets
//! - OpenAPI documentation
//! - REST-specific concerns (JSON serialisation, CORS)
//!
//! Both deployment variants (the refreshing server and the desktop shell) build their router
//! here, so they expose the same surface and differ only in the not-found message.

#![warn(rust_2018_idioms)]

use api_shared::{ErrorRes, HealthRes, HealthService};
use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use consultas_core::{
    ConsultationRecord, CoreConfig, Diagnosis, DocumentStore, PatientSummary, Treatment,
    DESKTOP_NOT_FOUND_MESSAGE, SERVER_NOT_FOUND_MESSAGE,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;

/// Which process is serving the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    /// Web server that refreshes the document before listening.
    Server,
    /// Desktop shell that only ever reads the document.
    Desktop,
}

impl Deployment {
    /// Message returned with a 404 when the document is missing.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Deployment::Server => SERVER_NOT_FOUND_MESSAGE,
            Deployment::Desktop => DESKTOP_NOT_FOUND_MESSAGE,
        }
    }
}

/// Application state shared across REST API handlers
///
/// Holds the store for the configured document and the variant's not-found message.
/// Nothing read from the document is kept here; every request goes back to disk.
#[derive(Clone)]
pub struct AppState {
    store: DocumentStore,
    not_found_message: Arc<str>,
}

impl AppState {
    pub fn new(cfg: &CoreConfig, deployment: Deployment) -> Self {
        Self {
            store: cfg.document_store(),
            not_found_message: Arc::from(deployment.not_found_message()),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_consultations),
    components(schemas(
        HealthRes,
        ErrorRes,
        ConsultationRecord,
        PatientSummary,
        Diagnosis,
        Treatment
    ))
)]
pub struct ApiDoc;

/// Builds the full router for a deployment variant.
///
/// `/` and `/historial.html` map to the two HTML entry points in the static directory; any
/// other unmatched path is looked up in the static directory as well.
pub fn router(cfg: &CoreConfig, deployment: Deployment) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/consultas", get(list_consultations))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route_service("/", ServeFile::new(cfg.index_html()))
        .route_service("/historial.html", ServeFile::new(cfg.history_html()))
        .fallback_service(ServeDir::new(cfg.static_dir()))
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(cfg, deployment))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/consultas",
    responses(
        (status = 200, description = "Every consultation in the data file", body = [ConsultationRecord]),
        (status = 404, description = "Data file not found", body = ErrorRes),
        (status = 500, description = "Data file unreadable or not valid JSON", body = ErrorRes)
    )
)]
/// List all consultations
///
/// Reads and parses the data file on every call and returns its contents verbatim.
///
/// # Errors
/// - `404 Not Found` with the deployment's message if the data file does not exist.
/// - `500 Internal Server Error` with the raw error message for any other failure.
#[axum::debug_handler]
async fn list_consultations(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorRes>)> {
    match state.store.read_document() {
        Ok(document) => Ok(Json(document)),
        Err(e) if e.is_not_found() => {
            tracing::error!("{}", e);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorRes::new(&*state.not_found_message)),
            ))
        }
        Err(e) => {
            tracing::error!("Read consultations error: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes::new(e.to_string())),
            ))
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use consultas_core::{initialise_data, MockApiSource};
    use http_body_util::BodyExt;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_cfg(dir: &Path) -> CoreConfig {
        let static_dir = dir.join("static");
        fs::create_dir_all(static_dir.join("js")).expect("should create static dir");
        fs::write(static_dir.join("index.html"), "<h1>Inicio</h1>").expect("write index");
        fs::write(static_dir.join("historial.html"), "<h1>Historial</h1>")
            .expect("write historial");
        fs::write(static_dir.join("js").join("app.js"), "console.log(1);").expect("write js");

        CoreConfig::new(dir.join("data.json"), static_dir).expect("CoreConfig::new should succeed")
    }

    async fn request(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = request(app, uri).await;
        (status, serde_json::from_slice(&body).expect("body should be JSON"))
    }

    #[tokio::test]
    async fn test_list_returns_refreshed_records_in_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp_dir.path());
        initialise_data(&cfg, MockApiSource::new());

        let (status, body) = get_json(router(&cfg, Deployment::Server), "/api/consultas").await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .expect("body should be an array")
            .iter()
            .map(|r| r["id_consulta"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["C001", "C002", "C004"]);
        assert_eq!(body[0]["paciente"]["nombre"], "Ana García");
    }

    #[tokio::test]
    async fn test_list_missing_document_is_404_with_variant_message() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp_dir.path());

        let (status, body) = get_json(router(&cfg, Deployment::Server), "/api/consultas").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": SERVER_NOT_FOUND_MESSAGE}));

        let (status, body) = get_json(router(&cfg, Deployment::Desktop), "/api/consultas").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": DESKTOP_NOT_FOUND_MESSAGE}));
    }

    #[tokio::test]
    async fn test_list_after_document_deleted_is_404() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp_dir.path());
        initialise_data(&cfg, MockApiSource::new());
        let app = router(&cfg, Deployment::Server);

        let (status, _) = request(app.clone(), "/api/consultas").await;
        assert_eq!(status, StatusCode::OK);

        fs::remove_file(cfg.data_file()).expect("should delete data file");
        let (status, body) = get_json(app, "/api/consultas").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], SERVER_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_list_invalid_json_is_500_with_error_key() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp_dir.path());
        fs::write(cfg.data_file(), "{ not json").expect("should write data file");

        let (status, body) = get_json(router(&cfg, Deployment::Desktop), "/api/consultas").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().expect("error should be a string");
        assert!(message.starts_with("failed to deserialize data file"));
    }

    #[tokio::test]
    async fn test_list_rereads_file_on_every_request() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp_dir.path());
        let app = router(&cfg, Deployment::Server);

        fs::write(cfg.data_file(), "[1]").expect("should write data file");
        let (_, body) = get_json(app.clone(), "/api/consultas").await;
        assert_eq!(body, serde_json::json!([1]));

        fs::write(cfg.data_file(), "[2, 3]").expect("should rewrite data file");
        let (_, body) = get_json(app, "/api/consultas").await;
        assert_eq!(body, serde_json::json!([2, 3]));
    }

    #[tokio::test]
    async fn test_static_entry_points_and_assets() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp_dir.path());
        let app = router(&cfg, Deployment::Server);

        let (status, body) = request(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<h1>Inicio</h1>");

        let (status, body) = request(app.clone(), "/historial.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<h1>Historial</h1>");

        let (status, body) = request(app.clone(), "/js/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log(1);");

        let (status, _) = request(app, "/css/missing.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_and_openapi() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = test_cfg(temp_dir.path());

        let (status, body) = get_json(router(&cfg, Deployment::Desktop), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);

        let (status, body) =
            get_json(router(&cfg, Deployment::Desktop), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/api/consultas").is_some());
    }
}
