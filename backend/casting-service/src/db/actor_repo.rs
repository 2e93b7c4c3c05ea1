use sqlx::PgPool;

use crate::models::Actor;

pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<Actor>> {
    sqlx::query_as::<_, Actor>("SELECT id, name, age, gender FROM actors ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> sqlx::Result<Option<Actor>> {
    sqlx::query_as::<_, Actor>("SELECT id, name, age, gender FROM actors WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, name: &str, age: i32, gender: &str) -> sqlx::Result<Actor> {
    sqlx::query_as::<_, Actor>(
        "INSERT INTO actors (name, age, gender) VALUES ($1, $2, $3) \
         RETURNING id, name, age, gender",
    )
    .bind(name)
    .bind(age)
    .bind(gender)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    name: &str,
    age: i32,
    gender: &str,
) -> sqlx::Result<Option<Actor>> {
    sqlx::query_as::<_, Actor>(
        "UPDATE actors SET name = $1, age = $2, gender = $3 WHERE id = $4 \
         RETURNING id, name, age, gender",
    )
    .bind(name)
    .bind(age)
    .bind(gender)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i32) -> sqlx::Result<Option<Actor>> {
    sqlx::query_as::<_, Actor>(
        "DELETE FROM actors WHERE id = $1 RETURNING id, name, age, gender",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
