//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where the database, the upstream clients
//! and the core services are wired together.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use orbitdash_core::{
    AstroPort, CacheSettings, DashboardCore, JwstPort, Ports, TelemetryPort, database_path,
};
use orbitdash_db::{DbFactory, seed_default_pages, setup_database};
use orbitdash_upstream::{DefaultAstroClient, DefaultIssClient, DefaultJwstClient, UpstreamConfig};

/// CORS configuration for the `/api` routes.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` file holding the CMS pages.
    pub database_path: PathBuf,
    /// Upstream endpoints and credentials.
    pub upstream: UpstreamConfig,
    /// Feed cache lifetimes.
    pub cache: CacheSettings,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Insert the default pages into an empty database.
    pub seed_pages: bool,
}

impl ServerConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_path: database_path()?,
            upstream: UpstreamConfig::default(),
            cache: CacheSettings::default(),
            cors: CorsConfig::default(),
            seed_pages: true,
        })
    }

    /// Set CORS to allow specific origins. An empty list keeps `AllowAll`.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<DashboardCore>,
}

impl AxumContext {
    pub const fn new(core: Arc<DashboardCore>) -> Self {
        Self { core }
    }
}

/// Open the database, build the upstream clients and assemble the core.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "orbitdash.bootstrap",
        database_path = %config.database_path.display(),
        iss = config.upstream.iss_base_url(),
        jwst = config.upstream.jwst_base_url(),
        astro = config.upstream.astro_base_url(),
        "Axum bootstrap resolved configuration"
    );

    // 1. Database with schema, optionally seeded
    let pool = setup_database(&config.database_path).await?;
    if config.seed_pages {
        let seeded = seed_default_pages(&pool).await?;
        if seeded > 0 {
            tracing::info!(target: "orbitdash.bootstrap", seeded, "seeded default pages");
        }
    }
    let pages = DbFactory::build_pages(pool);

    // 2. Upstream clients
    if !config.upstream.has_jwst_key() {
        tracing::warn!(target: "orbitdash.bootstrap", "JWST_API_KEY not set; the JWST feed will answer 503");
    }
    if !config.upstream.has_astro_credentials() {
        tracing::warn!(target: "orbitdash.bootstrap", "Astronomy API credentials not set; events will answer 503");
    }
    let telemetry: Arc<dyn TelemetryPort> = Arc::new(
        DefaultIssClient::new(&config.upstream).context("failed to build telemetry client")?,
    );
    let jwst: Arc<dyn JwstPort> =
        Arc::new(DefaultJwstClient::new(&config.upstream).context("failed to build JWST client")?);
    let astro: Arc<dyn AstroPort> = Arc::new(
        DefaultAstroClient::new(&config.upstream).context("failed to build astronomy client")?,
    );

    // 3. Core
    let ports = Ports::new(telemetry, jwst, astro, pages);
    let core = Arc::new(DashboardCore::new(ports, &config.cache));

    Ok(AxumContext::new(core))
}

/// Start the web server and run until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    tracing::info!("orbitdash listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("orbitdash stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
