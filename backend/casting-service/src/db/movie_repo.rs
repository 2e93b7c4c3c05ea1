use sqlx::PgPool;

use crate::models::Movie;

pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<Movie>> {
    sqlx::query_as::<_, Movie>("SELECT id, title, release_date FROM movies ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> sqlx::Result<Option<Movie>> {
    sqlx::query_as::<_, Movie>("SELECT id, title, release_date FROM movies WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, title: &str, release_date: i32) -> sqlx::Result<Movie> {
    sqlx::query_as::<_, Movie>(
        "INSERT INTO movies (title, release_date) VALUES ($1, $2) \
         RETURNING id, title, release_date",
    )
    .bind(title)
    .bind(release_date)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    title: &str,
    release_date: i32,
) -> sqlx::Result<Option<Movie>> {
    sqlx::query_as::<_, Movie>(
        "UPDATE movies SET title = $1, release_date = $2 WHERE id = $3 \
         RETURNING id, title, release_date",
    )
    .bind(title)
    .bind(release_date)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i32) -> sqlx::Result<Option<Movie>> {
    sqlx::query_as::<_, Movie>(
        "DELETE FROM movies WHERE id = $1 RETURNING id, title, release_date",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
