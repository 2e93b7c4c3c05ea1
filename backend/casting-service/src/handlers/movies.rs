//! Movie CRUD handlers, mirroring the actor routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use super::auth_header;
use crate::app_state::AppState;
use crate::db::movie_repo;
use crate::error::{ApiError, Result};
use crate::models::MoviePayload;

/// GET /movies
pub async fn list_movies(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    state.gate.require(auth_header(&req), "get:movies").await?;

    let movies = movie_repo::list(&state.pool).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "movies": movies,
    })))
}

/// POST /movies
pub async fn create_movie(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    state.gate.require(auth_header(&req), "post:movies").await?;

    let payload: MoviePayload =
        serde_json::from_slice(&body).map_err(|_| ApiError::BadRequest)?;
    let (title, release_date) = match (payload.title, payload.release_date) {
        (Some(title), Some(release_date)) => (title, release_date),
        _ => return Err(ApiError::Unprocessable),
    };

    let movie = movie_repo::insert(&state.pool, &title, release_date).await?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "title": movie.title,
        "release_date": movie.release_date,
    })))
}

/// PATCH /movies/{movie_id}
///
/// Replies 201 on success, matching the actor route.
pub async fn update_movie(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    state.gate.require(auth_header(&req), "patch:movies").await?;

    let id = path.into_inner();
    movie_repo::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let payload: MoviePayload =
        serde_json::from_slice(&body).map_err(|_| ApiError::BadRequest)?;
    let (title, release_date) = match (payload.title, payload.release_date) {
        (Some(title), Some(release_date)) => (title, release_date),
        _ => return Err(ApiError::BadRequest),
    };

    let movie = movie_repo::update(&state.pool, id, &title, release_date)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "title": movie.title,
        "release_date": movie.release_date,
    })))
}

/// DELETE /movies/{movie_id}
pub async fn delete_movie(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    state
        .gate
        .require(auth_header(&req), "delete:movies")
        .await?;

    let id = path.into_inner();
    let movie = movie_repo::delete(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "title": movie.title,
        "delete": id,
    })))
}
