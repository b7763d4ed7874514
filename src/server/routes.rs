//! HTTP API routes
//!
//! Defines all REST API endpoints for the server. Clients resolve uploads in
//! two steps: POST the raw file to `/api/upload` to parse it, then include
//! the parsed points (plus `prefer_upload`) in `/api/points`, `/api/plot`,
//! or `/api/report` requests. Every request recomputes from its own inputs.

use crate::circle::{CircleSpec, Point};
use crate::cli::plot::PLOT_TITLE;
use crate::config::DefaultsConfig;
use crate::constants::limits;
use crate::error::Error;
use crate::format::{available_formats, FormatInfo};
use crate::render::{self, PlotOptions};
use crate::report::{build_report, ReportMeta};
use crate::server::state::AppState;
use crate::source::{self, PointsResponse, Upload};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/points", post(points_handler))
        .route("/api/upload", post(upload_handler))
        .route("/api/plot", post(plot_handler))
        .route("/api/report", post(report_handler))
        .route("/api/formats", get(formats_handler))
        .route("/api/status", get(status_handler))
        .with_state(state)
}

/// Circle parameters and upload selection shared by the POST endpoints
///
/// Unset fields fall back to the server's `[defaults]` config, the same way
/// unset CLI flags do.
#[derive(Debug, Deserialize, Default)]
pub struct PointsRequest {
    /// Circle center x
    pub center_x: Option<f64>,
    /// Circle center y
    pub center_y: Option<f64>,
    /// Circle radius
    pub radius: Option<f64>,
    /// Number of points to generate
    pub count: Option<usize>,
    /// Uploaded points previously parsed via /api/upload
    pub upload: Option<Vec<Point>>,
    /// Prefer the uploaded points over generated ones
    pub prefer_upload: Option<bool>,
}

/// Plot appearance overrides; unset fields fall back to config defaults
#[derive(Debug, Deserialize, Default)]
pub struct PlotParams {
    pub color: Option<String>,
    pub units: Option<String>,
    pub grid: Option<bool>,
    pub show_center: Option<bool>,
    pub label_indices: Option<bool>,
    pub size_px: Option<u32>,
}

impl PlotParams {
    fn merge(&self, defaults: &DefaultsConfig) -> PlotOptions {
        let base = PlotOptions::default();
        PlotOptions {
            color: self.color.clone().unwrap_or_else(|| defaults.color.clone()),
            units: self.units.clone().unwrap_or_else(|| defaults.units.clone()),
            grid: self.grid.unwrap_or(defaults.grid),
            show_center: self.show_center.unwrap_or(defaults.show_center),
            label_indices: self.label_indices.unwrap_or(defaults.label_indices),
            size_px: self.size_px.unwrap_or(base.size_px),
        }
    }
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "RENDER_ERROR" | "REPORT_ERROR" | "INTERNAL_ERROR" => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidSpec(_) => "INVALID_SPEC",
            Error::Upload(_) | Error::Csv(_) => "INVALID_UPLOAD",
            Error::Render(_) => "RENDER_ERROR",
            Error::Report(_) => "REPORT_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Run one resolve-and-select cycle from request inputs
fn build_response(
    req: &PointsRequest,
    defaults: &DefaultsConfig,
) -> Result<PointsResponse, ApiError> {
    let spec = CircleSpec::new(
        req.center_x.unwrap_or(defaults.center_x),
        req.center_y.unwrap_or(defaults.center_y),
        req.radius.unwrap_or(defaults.radius),
        req.count.unwrap_or(defaults.count),
    );
    spec.validate().map_err(ApiError::from)?;

    let upload = match &req.upload {
        Some(points) => Upload::Valid(points.clone()),
        None => Upload::Absent,
    };
    let prefer_upload = req.prefer_upload.unwrap_or(defaults.prefer_upload);
    let selection = source::select_active(&upload, prefer_upload, &spec);

    Ok(PointsResponse::new(spec, selection))
}

/// Resolve the active point set
///
/// POST /api/points
async fn points_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PointsRequest>,
) -> Result<Json<PointsResponse>, ApiError> {
    let defaults = state.defaults().await;
    Ok(Json(build_response(&req, &defaults)?))
}

/// Upload query parameters
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Original file name; the extension selects the parser
    pub filename: String,
}

/// Upload response body
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub count: usize,
    pub points: Vec<Point>,
}

/// Parse an uploaded file
///
/// POST /api/upload?filename=points.csv (raw file bytes as body)
async fn upload_handler(
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<UploadResponse>, ApiError> {
    match source::resolve(&params.filename, &body) {
        Upload::Valid(points) => Ok(Json(UploadResponse {
            filename: params.filename,
            count: points.len(),
            points,
        })),
        Upload::Invalid(reason) => Err(ApiError {
            error: reason,
            code: "INVALID_UPLOAD".to_string(),
        }),
        Upload::Absent => Err(ApiError {
            error: "no file content provided".to_string(),
            code: "INVALID_UPLOAD".to_string(),
        }),
    }
}

/// Plot request body
#[derive(Debug, Deserialize)]
pub struct PlotRequest {
    #[serde(flatten)]
    pub points: PointsRequest,
    #[serde(default)]
    pub options: PlotParams,
}

/// Render the active point set as SVG
///
/// POST /api/plot
async fn plot_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlotRequest>,
) -> Result<Response, ApiError> {
    let defaults = state.defaults().await;
    let response = build_response(&req.points, &defaults)?;
    let options = req.options.merge(&defaults);
    let center = options.show_center.then(|| response.spec.center());

    let svg = render::render_svg(&response.points, center, PLOT_TITLE, &options)
        .map_err(ApiError::from)?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

/// Report request body
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(flatten)]
    pub points: PointsRequest,
    #[serde(default)]
    pub options: PlotParams,
    pub author: Option<String>,
    pub contact: Option<String>,
    pub note: Option<String>,
}

/// Export the active point set as a PDF report
///
/// POST /api/report
async fn report_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReportRequest>,
) -> Result<Response, ApiError> {
    let (defaults, report_config) = {
        let config = state.config.read().await;
        (config.defaults.clone(), config.report.clone())
    };
    let response = build_response(&req.points, &defaults)?;
    let options = req.options.merge(&defaults);

    let meta = ReportMeta {
        author: req.author.unwrap_or(report_config.author),
        contact: req.contact.unwrap_or(report_config.contact),
        note: req.note.unwrap_or(report_config.note),
    };

    let pdf = build_report(&response, &options, &meta).map_err(ApiError::from)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"report.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response())
}

/// Formats response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

/// Available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: available_formats(),
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Upper bound on generated point count
    pub max_points: usize,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        max_points: limits::MAX_POINTS,
        uptime_secs: state.uptime_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DataSource;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(crate::config::Config::default()))
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert_eq!(status.max_points, limits::MAX_POINTS);
    }

    #[tokio::test]
    async fn test_formats_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/formats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let formats: FormatsResponse = serde_json::from_slice(&body).unwrap();

        assert!(formats.formats.iter().any(|f| f.name == "csv"));
    }

    #[tokio::test]
    async fn test_points_endpoint_generates() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(json_request(
                "/api/points",
                serde_json::json!({"radius": 1.0, "count": 4}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let points: PointsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(points.points.len(), 4);
        assert_eq!(points.source, DataSource::Generated);
        assert!(points.warning.is_none());
    }

    #[tokio::test]
    async fn test_points_endpoint_uses_config_defaults() {
        let mut config = crate::config::Config::default();
        config.defaults.radius = 2.0;
        config.defaults.count = 8;
        let app = create_router(Arc::new(AppState::new(config)));

        let response = app
            .oneshot(json_request("/api/points", serde_json::json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let points: PointsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(points.spec.radius, 2.0);
        assert_eq!(points.points.len(), 8);
    }

    #[tokio::test]
    async fn test_points_endpoint_prefers_upload() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(json_request(
                "/api/points",
                serde_json::json!({
                    "count": 4,
                    "upload": [{"x": 1.0, "y": 2.0}],
                    "prefer_upload": true
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let points: PointsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(points.source, DataSource::Uploaded);
        assert_eq!(points.points.len(), 1);
    }

    #[tokio::test]
    async fn test_points_endpoint_absent_upload_warns() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(json_request(
                "/api/points",
                serde_json::json!({"count": 4, "prefer_upload": true}),
            ))
            .await
            .unwrap();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let points: PointsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(points.source, DataSource::Generated);
        assert!(points.warning.is_some());
    }

    #[tokio::test]
    async fn test_points_endpoint_invalid_spec() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(json_request(
                "/api/points",
                serde_json::json!({"radius": -1.0}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_SPEC");
    }

    #[tokio::test]
    async fn test_upload_endpoint_valid_csv() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload?filename=data.csv")
                    .body(Body::from("X,Y\n1.0,2.0\n3.0,4.0\n"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let upload: UploadResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(upload.count, 2);
        assert_eq!(upload.points[0], Point::new(1.0, 2.0));
    }

    #[tokio::test]
    async fn test_upload_endpoint_missing_columns() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload?filename=data.csv")
                    .body(Body::from("a,b\n1.0,2.0\n"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_UPLOAD");
        assert!(error.error.contains("'x' and 'y'"));
    }

    #[tokio::test]
    async fn test_plot_endpoint_returns_svg() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(json_request(
                "/api/plot",
                serde_json::json!({"count": 8, "options": {"grid": false}}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let svg = String::from_utf8(body.to_vec()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[tokio::test]
    async fn test_plot_endpoint_zero_uploaded_points() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(json_request(
                "/api/plot",
                serde_json::json!({"upload": [], "prefer_upload": true, "count": 4}),
            ))
            .await
            .unwrap();

        // Valid empty upload renders an empty plot without error
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_report_endpoint_returns_pdf() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(json_request(
                "/api/report",
                serde_json::json!({"count": 6, "author": "Test", "note": "hello"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.starts_with(b"%PDF"));
    }
}
