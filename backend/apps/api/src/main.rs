//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors render through
//! each crate's own error type.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use auth::domain::repository::RevocationRegistry;
use auth::{AuthConfig, AuthGate, PgAuthRepository, RedisRevocationRegistry, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use platform::secret::SecretKey;
use sqlx::postgres::PgPoolOptions;
use submission::{PgSubmissionRepository, SubmissionConfig, submission_router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,submission=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_store = PgAuthRepository::new(pool.clone());

    // Startup cleanup: errors here should not prevent server startup
    if let Err(e) = auth_store.cleanup_expired().await {
        tracing::warn!(error = %e, "Revocation cleanup failed, continuing anyway");
    }

    let auth_config = Arc::new(load_auth_config()?);
    let submission_config = load_submission_config()?;
    let submissions = PgSubmissionRepository::new(pool.clone());

    // Revocation backend: Redis when configured, PostgreSQL otherwise
    let app = match env::var("REDIS_URL").ok().filter(|url| !url.is_empty()) {
        Some(url) => {
            let registry = RedisRevocationRegistry::connect(&url)
                .await
                .context("failed to connect to Redis")?;
            tracing::info!("Using Redis revocation registry");
            build_app(auth_store, registry, auth_config, submissions, submission_config)
        }
        None => {
            tracing::info!("Using PostgreSQL revocation registry");
            let registry = auth_store.clone();
            build_app(auth_store, registry, auth_config, submissions, submission_config)
        }
    };

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    // Start server
    let addr = env::var("BIND_ADDR")
        .ok()
        .map(|a| SocketAddr::from_str(&a))
        .transpose()
        .context("BIND_ADDR is not a socket address")?
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 31113)));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app<R>(
    users: PgAuthRepository,
    registry: R,
    auth_config: Arc<AuthConfig>,
    submissions: PgSubmissionRepository,
    submission_config: SubmissionConfig,
) -> Router
where
    R: RevocationRegistry + Send + Sync + 'static,
{
    let gate = AuthGate::new(Arc::new(users), Arc::new(registry), auth_config);

    Router::new()
        .nest("/api/auth", auth_router(gate.clone()))
        .nest(
            "/api/submissions",
            submission_router(submissions, submission_config, gate),
        )
}

fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("TOKEN_SIGNING_KEY") {
        Ok(encoded) => {
            let key = SecretKey::from_base64(&encoded).context("TOKEN_SIGNING_KEY is invalid")?;
            AuthConfig::with_signing_key(key)
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("TOKEN_SIGNING_KEY not set, using a random development key");
            AuthConfig::development()
        }
        Err(_) => anyhow::bail!("TOKEN_SIGNING_KEY must be set in production"),
    };

    if let Some(secs) = env_parse::<u64>("TOKEN_TTL_SECS")? {
        config.token_ttl = Duration::from_secs(secs);
    }
    if let Some(ms) = env_parse::<u64>("STORE_TIMEOUT_MS")? {
        config.store_timeout = Duration::from_millis(ms);
    }

    Ok(config)
}

fn load_submission_config() -> anyhow::Result<SubmissionConfig> {
    match env::var("JUDGE_SECRET") {
        Ok(secret) => {
            let secret = SecretKey::from_bytes(secret.into_bytes())
                .context("JUDGE_SECRET is too short")?;
            Ok(SubmissionConfig::with_judge_secret(secret))
        }
        Err(_) => {
            tracing::warn!("JUDGE_SECRET not set, judge reports will be refused");
            Ok(SubmissionConfig::default())
        }
    }
}

fn env_parse<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(name)
        .ok()
        .map(|raw| raw.parse::<T>().with_context(|| format!("{name} is invalid")))
        .transpose()
}

fn cors_layer() -> CorsLayer {
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
