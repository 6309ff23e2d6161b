//! Serve command handler.

use std::path::PathBuf;

use anyhow::Result;
use orbitdash_axum::{CorsConfig, ServerConfig, start_server};
use orbitdash_core::CacheSettings;
use orbitdash_upstream::UpstreamConfig;

use crate::commands::ServeArgs;

/// Build the server configuration from the command line.
pub fn server_config(args: ServeArgs, database_path: PathBuf) -> ServerConfig {
    let mut upstream = UpstreamConfig::new()
        .with_optional_jwst_api_key(args.jwst_key)
        .with_astro_credentials(args.astro_app_id, args.astro_app_secret);
    if let Some(url) = args.iss_url {
        upstream = upstream.with_iss_base_url(url);
    }
    if let Some(url) = args.jwst_url {
        upstream = upstream.with_jwst_base_url(url);
    }
    if let Some(url) = args.astro_url {
        upstream = upstream.with_astro_base_url(url);
    }

    ServerConfig {
        host: args.host,
        port: args.port,
        database_path,
        upstream,
        cache: CacheSettings::from_secs(
            args.jwst_cache_seconds,
            args.astro_cache_seconds,
            args.osdr_cache_seconds,
        ),
        cors: CorsConfig::AllowAll,
        seed_pages: !args.no_seed,
    }
    .with_allowed_origins(args.allow_origin)
}

/// Run the web server until Ctrl-C.
pub async fn execute(args: ServeArgs, database_path: PathBuf) -> Result<()> {
    let config = server_config(args, database_path);
    println!();
    println!("  orbitdash starting...");
    println!("  Local: http://localhost:{}/dashboard", config.port);
    println!("  Press Ctrl+C to stop");
    println!();
    start_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use clap::Parser;
    use std::time::Duration;

    fn serve_args(extra: &[&str]) -> ServeArgs {
        let mut argv = vec!["orbitdash", "serve"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Some(Commands::Serve(args)) => args,
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn flags_reach_server_config() {
        let args = serve_args(&[
            "--host",
            "127.0.0.1",
            "--port",
            "9999",
            "--iss-url",
            "http://iss.local:3000",
            "--jwst-key",
            "k",
            "--astro-app-id",
            "id",
            "--astro-app-secret",
            "secret",
            "--allow-origin",
            "http://ui.local",
            "--osdr-cache-seconds",
            "5",
            "--no-seed",
        ]);
        let config = server_config(args, PathBuf::from("/tmp/x.db"));

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9999);
        assert_eq!(config.upstream.iss_base_url(), "http://iss.local:3000");
        assert!(config.upstream.has_jwst_key());
        assert!(config.upstream.has_astro_credentials());
        assert_eq!(config.cache.osdr_ttl, Duration::from_secs(5));
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o.len() == 1));
        assert!(!config.seed_pages);
    }
}
