pub mod audit;
pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
pub use auth::{AuthUser, JwtAuth, JwtClaims, JwtConfig, jwt_auth_middleware};
pub use errors::{ApiResponse, AppError, ErrorCode};
pub use extractors::{UuidPath, ValidatedJson};
pub use http::{cors_layer_from_env, security_headers};
pub use server::{
    HealthResponse, ShutdownCoordinator, coordinated_shutdown, create_app, create_production_app,
    create_router, health_router, shutdown_signal,
};
