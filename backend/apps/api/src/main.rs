//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::config::TOKEN_SECRET_LEN;
use auth::presentation::middleware::AuthGateState;
use auth::{AuthConfig, PgUserRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use plants::{PgPlantRepository, plant_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bootstrap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,plants=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Idempotent schema setup before serving
    bootstrap::ensure_schema(&pool).await?;

    // Token signing configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        AuthConfig::new(parse_token_secret(&secret_b64)?)
    };

    let gate = AuthGateState::new(Arc::new(auth_config.clone()));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .merge(auth_router(PgUserRepository::new(pool.clone()), auth_config))
        .merge(plant_router(PgPlantRepository::new(pool.clone()), gate))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Decode the base64 token secret, rejecting anything but the exact length
fn parse_token_secret(secret_b64: &str) -> anyhow::Result<[u8; TOKEN_SECRET_LEN]> {
    let bytes = Engine::decode(&general_purpose::STANDARD, secret_b64)?;
    let len = bytes.len();
    bytes.as_slice().try_into().map_err(|_| {
        anyhow::anyhow!("TOKEN_SECRET must decode to exactly {TOKEN_SECRET_LEN} bytes (got {len})")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_secret_roundtrip() {
        let b64 = general_purpose::STANDARD.encode([7u8; TOKEN_SECRET_LEN]);
        assert_eq!(parse_token_secret(&b64).unwrap(), [7u8; TOKEN_SECRET_LEN]);
    }

    #[test]
    fn test_parse_token_secret_wrong_length() {
        let b64 = general_purpose::STANDARD.encode([7u8; 16]);
        let err = parse_token_secret(&b64).unwrap_err();
        assert!(err.to_string().contains("32 bytes"));
    }

    #[test]
    fn test_parse_token_secret_invalid_base64() {
        assert!(parse_token_secret("not base64!!!").is_err());
    }
}
