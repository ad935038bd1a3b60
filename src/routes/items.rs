use crate::core::compose_notification;
use crate::models::{
    ErrorResponse, FindMatchesResponse, ItemCategory, ReportItemRequest, ReportItemResponse,
};
use crate::routes::AppState;
use crate::services::{NewItem, StoreError};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure item-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/items/report", web::post().to(report_item))
        .route(
            "/items/{category}/{id}/matches",
            web::get().to(item_matches),
        );
}

/// Report submission endpoint
///
/// POST /api/v1/items/report
///
/// Persists the report, then immediately scans the opposite-category pool
/// and, when anything clears the threshold, attaches the synthesized
/// notification payload for the submitting user. The notification is not
/// stored anywhere.
async fn report_item(
    state: web::Data<AppState>,
    req: web::Json<ReportItemRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for report_item request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let category = req.category;

    let item = match state
        .store
        .insert_item(NewItem {
            category,
            title: req.title,
            description: req.description,
            location: req.location,
            contact_info: req.contact_info,
            reported_on: req.reported_on,
            owner_id: req.user_id,
        })
        .await
    {
        Ok(item) => item,
        Err(StoreError::NotFound(what)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: what,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to store item report: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store item report".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::info!(
        "Stored {} item {} ({}), scanning for matches",
        category.as_str(),
        item.id,
        item.title
    );

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

    let result = state
        .matcher
        .find_matches(&item.title, &item.description, category, pool);

    let notification = compose_notification(category, &result.matches);

    tracing::info!(
        "Item {} has {} matching counterpart(s)",
        item.id,
        result.matches.len()
    );

    HttpResponse::Ok().json(ReportItemResponse {
        item,
        matches_found: result.matches.len(),
        notification,
    })
}

/// Item detail matches endpoint
///
/// GET /api/v1/items/{category}/{id}/matches
///
/// Re-runs the match scan for an existing item on every call, so the detail
/// view always shows a live ranking.
async fn item_matches(
    state: web::Data<AppState>,
    path: web::Path<(String, i64)>,
) -> impl Responder {
    let (category_raw, item_id) = path.into_inner();

    let category: ItemCategory = match category_raw.parse() {
        Ok(category) => category,
        Err(_) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid category".to_string(),
                message: "Category must be one of: lost, found".to_string(),
                status_code: 400,
            });
        }
    };

    let item = match state.store.get_item(category, item_id).await {
        Ok(item) => item,
        Err(StoreError::NotFound(what)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: what,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch item {}: {}", item_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch item".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

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

    let result = state
        .matcher
        .find_matches(&item.title, &item.description, category, pool);

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}
