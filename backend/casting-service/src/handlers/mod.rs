mod actors;
mod health;
mod movies;

pub use actors::{create_actor, delete_actor, list_actors, update_actor};
pub use health::home;
pub use movies::{create_movie, delete_movie, list_movies, update_movie};

use actix_web::http::header;
use actix_web::HttpRequest;

/// Raw `Authorization` header value, if any. Handed to the gate as-is so
/// shape validation stays in one place.
pub(crate) fn auth_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}
