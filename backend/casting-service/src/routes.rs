//! Route configuration.

use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home))
        .service(
            web::scope("/actors")
                .route("", web::get().to(handlers::list_actors))
                .route("", web::post().to(handlers::create_actor))
                .route("/{actor_id}", web::patch().to(handlers::update_actor))
                .route("/{actor_id}", web::delete().to(handlers::delete_actor)),
        )
        .service(
            web::scope("/movies")
                .route("", web::get().to(handlers::list_movies))
                .route("", web::post().to(handlers::create_movie))
                .route("/{movie_id}", web::patch().to(handlers::update_movie))
                .route("/{movie_id}", web::delete().to(handlers::delete_movie)),
        );
}
