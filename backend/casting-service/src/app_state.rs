use auth_core::AuthGate;
use sqlx::PgPool;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub gate: AuthGate,
}
