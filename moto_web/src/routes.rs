//! # HTTP Routes
//!
//! - `GET /` tool index
//! - `GET /{slug}` empty form, `POST /{slug}` form with results
//! - `GET /api/tools` tool list with field schemas
//! - `POST /api/{slug}` urlencoded form in, JSON report out
//! - `POST /api/calculate` typed JSON input in, JSON report out

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use moto_core::{CalcError, CalculationItem, FieldSpec, FormValues, Report, Tool};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(templates: Tera) -> Self {
        AppState {
            templates: Arc::new(templates),
        }
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("template rendering failed: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Calc(err) => {
                let status = match err {
                    CalcError::UnknownTool { .. } => StatusCode::NOT_FOUND,
                    CalcError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, Json(ErrorBody::from(&err))).into_response()
            }
            WebError::Render(err) => {
                error!(error = ?err, "template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}

/// JSON error payload
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    error: CalcError,
}

impl From<&CalcError> for ErrorBody {
    fn from(err: &CalcError) -> Self {
        ErrorBody {
            code: err.error_code(),
            message: err.to_string(),
            error: err.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ToolSummary {
    slug: &'static str,
    title: &'static str,
    fields: &'static [FieldSpec],
}

impl From<Tool> for ToolSummary {
    fn from(tool: Tool) -> Self {
        ToolSummary {
            slug: tool.slug(),
            title: tool.title(),
            fields: tool.fields(),
        }
    }
}

/// One result row flattened for the template
#[derive(Debug, Serialize)]
struct ViewRow<'a> {
    key: &'a str,
    label: &'a str,
    text: Option<&'a str>,
    items: &'a [String],
}

fn view_rows(report: &Report) -> Vec<ViewRow<'_>> {
    report
        .rows
        .iter()
        .map(|row| ViewRow {
            key: &row.key,
            label: &row.label,
            text: row.value.as_text(),
            items: row.value.as_list().unwrap_or(&[]),
        })
        .collect()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/tools", get(list_tools))
        .route("/api/calculate", post(calculate_json))
        .route("/api/{slug}", post(run_api))
        .route("/{slug}", get(show_form).post(submit_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let tools: Vec<ToolSummary> = Tool::ALL.into_iter().map(ToolSummary::from).collect();
    let mut ctx = Context::new();
    ctx.insert("tools", &tools);
    Ok(Html(state.templates.render("index.html", &ctx)?))
}

async fn list_tools() -> Json<Vec<ToolSummary>> {
    Json(Tool::ALL.into_iter().map(ToolSummary::from).collect())
}

async fn run_api(
    Path(slug): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Json<Report>, WebError> {
    let tool = Tool::from_slug(&slug)?;
    let form = FormValues::from(fields);
    let report = tool
        .run(&form)
        .inspect_err(|e| debug!(tool = tool.slug(), error = %e, "rejected input"))?;
    info!(tool = tool.slug(), "calculated");
    Ok(Json(report))
}

async fn calculate_json(Json(item): Json<CalculationItem>) -> Json<Report> {
    info!(tool = item.tool().slug(), "calculated");
    Json(item.calculate())
}

fn render_tool(
    state: &AppState,
    tool: Tool,
    values: &FormValues,
    report: Option<&Report>,
    error: Option<&CalcError>,
) -> Result<Html<String>, WebError> {
    let mut ctx = Context::new();
    ctx.insert("tool", &ToolSummary::from(tool));
    ctx.insert("values", values);
    if let Some(report) = report {
        ctx.insert("rows", &view_rows(report));
        let outcome = report
            .text_of("viability_class")
            .or(report.text_of("compatibility_class"));
        ctx.insert("outcome", &outcome);
    }
    if let Some(error) = error {
        ctx.insert("error", &error.to_string());
    }
    Ok(Html(state.templates.render("tool.html", &ctx)?))
}

async fn show_form(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match Tool::from_slug(&slug) {
        Ok(tool) => render_tool(&state, tool, &FormValues::new(), None, None).into_response(),
        Err(_) => not_found(&slug),
    }
}

async fn submit_form(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let Ok(tool) = Tool::from_slug(&slug) else {
        return not_found(&slug);
    };
    let form = FormValues::from(fields);
    match tool.run(&form) {
        Ok(report) => {
            info!(tool = tool.slug(), "calculated");
            render_tool(&state, tool, &form, Some(&report), None).into_response()
        }
        Err(err) => {
            debug!(tool = tool.slug(), error = %err, "rejected input");
            render_tool(&state, tool, &form, None, Some(&err)).into_response()
        }
    }
}

fn not_found(slug: &str) -> Response {
    debug!(slug, "unknown tool");
    let body = format!("<h1>Not found</h1><p>No tool named {}.</p>", tera::escape_html(slug));
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(crate::templates::load().unwrap()))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_index_lists_every_tool() {
        let response = app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        for tool in Tool::ALL {
            assert!(body.contains(&format!("href=\"/{}\"", tool.slug())), "{}", tool.slug());
        }
    }

    #[tokio::test]
    async fn test_get_shows_empty_form() {
        let response = app().oneshot(get("/clutch")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("name=\"max_engine_torque\""));
        assert!(!body.contains("class=\"results\""));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_404() {
        let response = app().oneshot(get("/sidecar")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app().oneshot(form_post("/api/sidecar", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_renders_results() {
        let body = "tyre_width_mm=120&tyre_aspect_ratio=70&rim_diameter_inches=17\
                    &proposed_rim_width_inches=3.50";
        let response = app().oneshot(form_post("/rim", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("class=\"results\""));
        // Tera escapes the slashes
        assert!(html.contains("120&#x2F;70-17"));
        assert!(html.contains("outcome-ideal"));
    }

    #[tokio::test]
    async fn test_post_with_bad_input_shows_message_only() {
        let request = form_post("/clutch", "outer_diameter=wide");
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Invalid or missing input:"));
        assert!(!html.contains("class=\"results\""));
        // Submitted values are echoed back into the form
        assert!(html.contains("value=\"wide\""));
    }

    #[tokio::test]
    async fn test_api_returns_report_json() {
        let body = "max_engine_torque=60&outer_diameter=140&friction_coefficient=0.35\
                    &allowable_surface_pressure=0.25&safety_factor=1.3";
        let response = app().oneshot(form_post("/api/clutch", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let report: Report = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(report.tool, Tool::Clutch);
        assert_eq!(report.text_of("viability_class"), Some("viable"));
    }

    #[tokio::test]
    async fn test_api_invalid_input_is_422() {
        let request = form_post("/api/gearbox", "number_of_gears=-1");
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["code"], "INVALID_INPUT");
        assert!(json["message"].as_str().unwrap().starts_with("Invalid or missing input:"));
    }

    #[tokio::test]
    async fn test_api_tools_lists_schemas() {
        let response = app().oneshot(get("/api/tools")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        let tools = json.as_array().unwrap();
        assert_eq!(tools.len(), Tool::ALL.len());
        let chain = tools.iter().find(|t| t["slug"] == "chainsprocket").unwrap();
        let fields = chain["fields"].as_array().unwrap();
        let chain_type = fields.iter().find(|f| f["name"] == "chain_type").unwrap();
        assert_eq!(chain_type["kind"]["type"], "choice");
        assert_eq!(chain_type["kind"]["options"][1], "525");
    }

    #[tokio::test]
    async fn test_calculate_accepts_typed_json() {
        let body = serde_json::json!({
            "tool": "cylinder",
            "input": {
                "cylinder_bore_diameter": 80.0,
                "stroke_length": 70.0,
                "max_combustion_pressure": 6.0,
                "cylinder_material_strength": 250.0,
                "safety_factor": 5.0
            }
        })
        .to_string();
        let request = Request::builder()
            .method("POST")
            .uri("/api/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let report: Report = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(report.text_of("cylinder_wall_thickness"), Some("6.30 mm"));
    }
}
