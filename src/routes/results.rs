use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::models::{ErrorResponse, HealthResponse, RenderResultsRequest};
use crate::render::{build_context, ResultsRenderer};
use crate::services::DownloadLinkResolver;

/// Application state shared across all handlers
///
/// Everything here is immutable after startup, so handlers stay
/// re-entrant and concurrent renders need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<ResultsRenderer>,
    pub resolver: Arc<dyn DownloadLinkResolver>,
}

/// Configure all results-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/results/render", web::post().to(render_results));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Render the results page for one pre-computed matching context
///
/// POST /api/v1/results/render
///
/// Request body: the matching context produced by the screening pipeline:
/// ```json
/// {
///   "minExperience": 3,
///   "resumes": [
///     {
///       "filename": "alice.pdf",
///       "score": 0.92,
///       "experience": 5,
///       "experienceMet": true,
///       "foundSections": { "python": ["...context snippet..."] }
///     }
///   ]
/// }
/// ```
///
/// Returns the complete results page as `text/html`. Validation failures
/// return 400 with a JSON error body; a template failure returns 500.
async fn render_results(
    state: web::Data<AppState>,
    req: web::Json<RenderResultsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for render request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_failed",
            errors.to_string(),
            400,
        ));
    }

    let render_id = uuid::Uuid::new_v4();

    let context = match build_context(req.into_inner()) {
        Ok(context) => context,
        Err(e) => {
            tracing::warn!("Rejected matching context for render {}: {}", render_id, e);
            return HttpResponse::BadRequest().json(ErrorResponse::new(e.label(), e.to_string(), 400));
        }
    };

    tracing::info!(
        "Rendering results page {}: {} resumes, min experience {} years",
        render_id,
        context.resumes.len(),
        context.min_experience
    );

    match state.renderer.render(&context, state.resolver.as_ref()) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            tracing::error!("Failed to render results page {}: {}", render_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.label(), e.to_string(), 500))
        }
    }
}
