//! Casting agency REST backend.
//!
//! Manages actors and movies behind role-based access control: every
//! mutating or listing route declares one permission string and the
//! `auth-core` gate is invoked before the operation runs.

pub mod app_state;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
