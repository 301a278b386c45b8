use crate::infra::{parse_birth_date, AppState};
use archetype_ai::error::AppError;
use archetype_ai::triangulation::questionnaire::{trait_question_ids, MOTIVATIONAL_QUESTIONS};
use archetype_ai::triangulation::{
    validate_completeness, CategoryMatch, CompletenessReport, DetectedPatterns, InputError,
    QuestionnaireAnswers, TriangulationEngine,
};
use archetype_ai::triangulation::domain::TraitKind;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct TriangulationRequest {
    pub(crate) name: String,
    pub(crate) birth_date: String,
    pub(crate) answers: QuestionnaireAnswers,
    #[serde(default)]
    pub(crate) type_code: Option<String>,
    #[serde(default)]
    pub(crate) birth_time: Option<String>,
    /// Run the pipeline even when the questionnaire is incomplete;
    /// unanswered questions degrade to the neutral option.
    #[serde(default)]
    pub(crate) allow_partial: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct TriangulationResponse {
    pub(crate) name: String,
    pub(crate) primary: CategoryMatch,
    pub(crate) secondary: CategoryMatch,
    pub(crate) tertiary: CategoryMatch,
    pub(crate) explanation: String,
    pub(crate) framework_summary: String,
    pub(crate) completion: CompletenessReport,
    pub(crate) all_matches: Vec<CategoryMatch>,
    pub(crate) detected_patterns: DetectedPatterns,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidationRequest {
    pub(crate) answers: QuestionnaireAnswers,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionnaireView {
    pub(crate) trait_questions: Vec<TraitGroupView>,
    pub(crate) motivational_questions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TraitGroupView {
    pub(crate) trait_label: &'static str,
    pub(crate) question_ids: [&'static str; 3],
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/triangulate",
            axum::routing::post(triangulate_endpoint),
        )
        .route(
            "/api/v1/triangulate/validate",
            axum::routing::post(validate_endpoint),
        )
        .route(
            "/api/v1/questionnaire",
            axum::routing::get(questionnaire_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn triangulate_endpoint(
    Json(payload): Json<TriangulationRequest>,
) -> Result<Json<TriangulationResponse>, AppError> {
    let TriangulationRequest {
        name,
        birth_date,
        answers,
        type_code,
        birth_time,
        allow_partial,
    } = payload;

    let birth_date = parse_birth_date(&birth_date)?;

    // Completeness is caller policy: enforce it here, before the
    // engine runs, unless the client opted into a partial sheet.
    let completion = validate_completeness(&answers);
    if !completion.is_complete && !allow_partial {
        return Err(InputError::IncompleteQuestionnaire {
            missing: completion.missing_question_ids,
        }
        .into());
    }

    let result = TriangulationEngine::new().run(
        &answers,
        birth_date,
        &name,
        type_code.as_deref(),
        birth_time.as_deref(),
    );

    info!(
        primary = result.primary.id,
        percentage = result.primary.percentage,
        patterns = result.detected_patterns.len(),
        "triangulation complete"
    );

    Ok(Json(TriangulationResponse {
        name: result.display_name,
        primary: result.primary,
        secondary: result.secondary,
        tertiary: result.tertiary,
        explanation: result.explanation,
        framework_summary: result.framework_summary,
        completion,
        all_matches: result.all_matches,
        detected_patterns: result.detected_patterns,
    }))
}

pub(crate) async fn validate_endpoint(
    Json(payload): Json<ValidationRequest>,
) -> Json<CompletenessReport> {
    Json(validate_completeness(&payload.answers))
}

pub(crate) async fn questionnaire_endpoint() -> Json<QuestionnaireView> {
    let trait_questions = TraitKind::ordered()
        .into_iter()
        .map(|kind| TraitGroupView {
            trait_label: kind.label(),
            question_ids: trait_question_ids(kind),
        })
        .collect();

    let motivational_questions = MOTIVATIONAL_QUESTIONS.iter().map(|(id, _)| *id).collect();

    Json(QuestionnaireView {
        trait_questions,
        motivational_questions,
    })
}
