use actix_web::HttpResponse;
use serde_json::json;

/// GET /
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true }))
}
