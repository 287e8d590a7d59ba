// Shipping configuration API server
// Tenant-scoped, role-gated management of shipping origin and package templates

mod config;
mod error;
mod handlers;
mod middleware;
mod routes;

use anyhow::Context;
use config::{Config, LogFormat};
use dotenvy::dotenv;
use shipping_auth::{Authenticator, JwtService};
use shipping_authz::{Authorizer, CachedGroupSource, GroupAuthorizer};
use shipping_database::{Database, MerchantStoreRepository, UserGroupRepository};
use shipping_facade::{ShippingFacade, ShippingService};
use shipping_tenant::StoreResolver;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Collaborators shared by every request
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator>,
    pub authorizer: Arc<dyn Authorizer>,
    pub stores: Arc<dyn StoreResolver>,
    pub shipping: Arc<dyn ShippingFacade>,
    pub default_store_code: String,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,shipping_api=debug,tower_http=debug".into());

    match format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env();
    init_tracing(config.log_format);

    tracing::info!("🚚 Starting shipping configuration API");
    tracing::info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("🔌 Server: {}:{}", config.server_host, config.server_port);

    // Initialize database
    tracing::info!("🗄️  Connecting to database...");
    let database = Database::new(config.database.clone())
        .await
        .context("Failed to connect to database")?;
    database.ping().await.context("Database ping failed")?;
    if config.run_migrations {
        database.migrate().await.context("Failed to run migrations")?;
        tracing::info!("✅ Migrations applied");
    }
    tracing::info!("✅ Database connected");

    let jwt_service = JwtService::from_env().context("Failed to initialize JWT service")?;
    tracing::info!("🔐 JWT service initialized");

    // Role lookups go through Redis when it is configured
    let groups = UserGroupRepository::new(database.pool().clone());
    let authorizer: Arc<dyn Authorizer> = match config.cache.clone() {
        Some(cache_config) => {
            tracing::info!("⚡ Connecting to Redis...");
            let ttl = cache_config.group_ttl_seconds;
            let cache = shipping_cache::Cache::new(cache_config)
                .await
                .context("Failed to connect to Redis")?;
            cache.ping().await.context("Redis ping failed")?;
            tracing::info!("✅ Redis connected, group lookups cached for {}s", ttl);
            Arc::new(GroupAuthorizer::new(CachedGroupSource::new(groups, cache, ttl)))
        }
        None => {
            tracing::warn!("⚡ Group cache disabled (REDIS_URL unset or GROUP_CACHE_TTL_SECONDS=0)");
            Arc::new(GroupAuthorizer::new(groups))
        }
    };
    tracing::info!("🛡️  Authorizer initialized");

    let state = Arc::new(AppState {
        authenticator: Arc::new(jwt_service),
        authorizer,
        stores: Arc::new(MerchantStoreRepository::new(database.pool().clone())),
        shipping: Arc::new(ShippingService::new(database.clone())),
        default_store_code: config.default_store_code.clone(),
    });

    // Create router
    let app = routes::create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    tracing::info!("📡 Routes configured:");
    tracing::info!("   GET  /health");
    for route in routes::SHIPPING_ROUTES {
        tracing::info!("   {:<6} {} ({})", route.method.as_str(), route.path, route.operation);
    }

    // Start server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("✅ Server ready at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
