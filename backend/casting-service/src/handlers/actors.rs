//! Actor CRUD handlers.
//!
//! Each protected handler runs the authorization gate before anything
//! else, including body parsing: a request with a bad credential gets its
//! 401/403 even when the payload is also broken.

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use super::auth_header;
use crate::app_state::AppState;
use crate::db::actor_repo;
use crate::error::{ApiError, Result};
use crate::models::ActorPayload;

/// GET /actors
pub async fn list_actors(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    state.gate.require(auth_header(&req), "get:actors").await?;

    let actors = actor_repo::list(&state.pool).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "actors": actors,
    })))
}

/// POST /actors
pub async fn create_actor(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    state.gate.require(auth_header(&req), "post:actors").await?;

    let payload: ActorPayload =
        serde_json::from_slice(&body).map_err(|_| ApiError::BadRequest)?;
    let (name, age, gender) = match (payload.name, payload.age, payload.gender) {
        (Some(name), Some(age), Some(gender)) => (name, age, gender),
        _ => return Err(ApiError::Unprocessable),
    };

    let actor = actor_repo::insert(&state.pool, &name, age, &gender).await?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "name": actor.name,
        "age": actor.age,
        "gender": actor.gender,
    })))
}

/// PATCH /actors/{actor_id}
///
/// Replies 201 on success; kept for compatibility with the service this
/// API replaces.
pub async fn update_actor(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    state.gate.require(auth_header(&req), "patch:actors").await?;

    let id = path.into_inner();
    actor_repo::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let payload: ActorPayload =
        serde_json::from_slice(&body).map_err(|_| ApiError::BadRequest)?;
    let (name, age, gender) = match (payload.name, payload.age, payload.gender) {
        (Some(name), Some(age), Some(gender)) => (name, age, gender),
        _ => return Err(ApiError::BadRequest),
    };

    let actor = actor_repo::update(&state.pool, id, &name, age, &gender)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "name": actor.name,
        "age": actor.age,
        "gender": actor.gender,
    })))
}

/// DELETE /actors/{actor_id}
pub async fn delete_actor(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    state
        .gate
        .require(auth_header(&req), "delete:actors")
        .await?;

    let id = path.into_inner();
    let actor = actor_repo::delete(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "name": actor.name,
        "delete": id,
    })))
}
