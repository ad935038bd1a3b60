use crate::models::{
    BadgeCountResponse, BadgeQuery, ErrorResponse, FindMatchesRequest, FindMatchesResponse,
    HealthResponse, ItemCategory,
};
use crate::routes::AppState;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/notifications/badge", web::get().to(notification_badge));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "title": "string",
///   "description": "string",
///   "category": "lost|found",
///   "limit": 20
/// }
/// ```
///
/// The item detail view calls this on every render; results come from a
/// fresh scan of the opposite-category pool, never a cache.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Finding matches for {} report: {}",
        req.category.as_str(),
        req.title
    );

    let pool = match state.store.list_active(req.category.counterpart()).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to load candidate pool: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load candidate pool".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let mut result =
        state
            .matcher
            .find_matches(&req.title, &req.description, req.category, pool);

    // Cap limit at 100 to keep responses bounded
    if let Some(limit) = req.limit {
        result.matches.truncate(limit.min(100) as usize);
    }

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        result.matches.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}

/// Notification badge endpoint
///
/// GET /api/v1/notifications/badge?userId={userId}
///
/// Sums the unread-message count with the qualifying-match counts of each of
/// the user's own active items, lost and found separately. Every per-item
/// count comes from its own fresh pool scan.
async fn notification_badge(
    state: web::Data<AppState>,
    query: web::Query<BadgeQuery>,
) -> impl Responder {
    let user_id = query.user_id;

    let unread_count = match state.store.count_unread_messages(user_id).await {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Failed to count unread messages for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to count unread messages".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let mut matched_items = 0usize;

    for category in [ItemCategory::Lost, ItemCategory::Found] {
        let own_items = match state.store.list_active_for_user(user_id, category).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("Failed to list {} items for {}: {}", category.as_str(), user_id, e);
                return HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to list user items".to_string(),
                    message: e.to_string(),
                    status_code: 500,
                });
            }
        };

        for item in &own_items {
            let pool = match state.store.list_active(category.counterpart()).await {
                Ok(pool) => pool,
                Err(e) => {
                    tracing::error!("Failed to load candidate pool: {}", e);
                    return HttpResponse::InternalServerError().json(ErrorResponse {
                        error: "Failed to load candidate pool".to_string(),
                        message: e.to_string(),
                        status_code: 500,
                    });
                }
            };

            let result =
                state
                    .matcher
                    .find_matches(&item.title, &item.description, category, pool);
            matched_items += result.matches.len();
        }
    }

    let total_notifications = unread_count + matched_items as i64;

    tracing::debug!(
        "Badge for user {}: {} unread, {} matched items",
        user_id,
        unread_count,
        matched_items
    );

    HttpResponse::Ok().json(BadgeCountResponse {
        unread_count,
        matched_items,
        total_notifications,
    })
}
