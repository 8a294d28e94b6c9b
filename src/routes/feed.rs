use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;

use crate::core::rank_feed;
use crate::models::{ErrorResponse, HealthResponse, OrderFeedRequest, OrderFeedResponse};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub max_candidates: usize,
}

/// Configure all feed-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/feed/order", web::post().to(order_feed));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Order feed endpoint
///
/// POST /api/v1/feed/order
///
/// Request body:
/// ```json
/// {
///   "viewer": { "userId": "string", "bio": "string", "age": 30, "sex": "male", "preference": "female" },
///   "candidates": [{ "userId": "string", "name": "string", "age": 28, "sex": "female",
///                    "preference": "any", "checkedInAt": "2024-05-01T21:30:00Z" }],
///   "seed": "string",
///   "now": "2024-05-01T22:00:00Z"
/// }
/// ```
async fn order_feed(
    state: web::Data<AppState>,
    req: web::Json<OrderFeedRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4().to_string();

    if let Err(e) = req.check(state.max_candidates) {
        tracing::info!(request_id = %request_id, "Rejected feed request: {}", e);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: e.to_string(),
            status_code: 400,
        });
    }

    let OrderFeedRequest { viewer, candidates, seed, now } = req.into_inner();
    let now = now.unwrap_or_else(Utc::now);

    tracing::info!(
        request_id = %request_id,
        "Ordering feed for viewer {} over {} candidates",
        viewer.user_id,
        candidates.len()
    );
    tracing::debug!(request_id = %request_id, seed = %seed, now = %now, "Ranking inputs");

    let ranking = match web::block(move || rank_feed(&viewer, &candidates, &seed, now)).await {
        Ok(ranking) => ranking,
        Err(e) => {
            tracing::error!(request_id = %request_id, "Ranking task failed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to order feed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let response = OrderFeedResponse {
        request_id,
        eligible_count: ranking.eligible_count(),
        total_candidates: ranking.total_candidates,
        candidates: ranking.candidates,
    };

    tracing::info!(
        request_id = %response.request_id,
        "Returning {} of {} candidates",
        response.eligible_count,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}
