use axum::{Router, middleware};
use axum_helpers::jwt_auth_middleware;

pub mod health;
pub mod tasks;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Every task route requires a verified JWT; the middleware injects the
/// claims that the handlers' `AuthUser` extractor reads.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(
        "/tasks",
        tasks::router(state).layer(middleware::from_fn_with_state(
            state.jwt_auth.clone(),
            jwt_auth_middleware,
        )),
    )
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
