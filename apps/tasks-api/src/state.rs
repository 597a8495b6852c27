//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.

use axum_helpers::JwtAuth;
use database::postgres::DatabaseConnection;

/// Shared application state.
///
/// Cloned per handler; all fields are cheap Arc or Arc-backed clones.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: DatabaseConnection,
    /// Stateless JWT verifier shared by the auth middleware
    pub jwt_auth: JwtAuth,
}
