//! Main commands enum and subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve(ServeArgs),

    /// Manage the pages served under /page/{slug}
    Pages {
        #[command(subcommand)]
        command: PageCommand,
    },

    /// Show resolved paths
    Paths,
}

/// Options for `orbitdash serve`. Every option can also come from the
/// environment (or a `.env` file).
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "ORBITDASH_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ORBITDASH_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the ISS telemetry service
    #[arg(long, env = "RUST_BASE")]
    pub iss_url: Option<String>,

    /// Base URL of the JWST API
    #[arg(long, env = "JWST_HOST")]
    pub jwst_url: Option<String>,

    /// JWST API key
    #[arg(long, env = "JWST_API_KEY", hide_env_values = true)]
    pub jwst_key: Option<String>,

    /// Base URL of the Astronomy API
    #[arg(long, env = "ASTRO_BASE_URL")]
    pub astro_url: Option<String>,

    /// Astronomy API application id
    #[arg(long, env = "ASTRO_APP_ID")]
    pub astro_app_id: Option<String>,

    /// Astronomy API application secret
    #[arg(long, env = "ASTRO_APP_SECRET", hide_env_values = true)]
    pub astro_app_secret: Option<String>,

    /// Origin allowed to call /api (repeatable; default: any)
    #[arg(long = "allow-origin")]
    pub allow_origin: Vec<String>,

    /// Seconds to keep a JWST feed page
    #[arg(long, env = "JWST_CACHE_SECONDS")]
    pub jwst_cache_seconds: Option<u64>,

    /// Seconds to keep astronomy events
    #[arg(long, env = "ASTRO_CACHE_SECONDS")]
    pub astro_cache_seconds: Option<u64>,

    /// Seconds to keep the OSDR listing
    #[arg(long, env = "OSDR_CACHE_SECONDS")]
    pub osdr_cache_seconds: Option<u64>,

    /// Do not insert the default pages into an empty database
    #[arg(long)]
    pub no_seed: bool,
}

/// CMS page management.
#[derive(Subcommand, Debug)]
pub enum PageCommand {
    /// List stored pages
    List,

    /// Print one page
    Show {
        /// Page slug
        slug: String,
    },

    /// Create or replace a page
    Put {
        /// Page slug (lowercase letters, digits, '-' and '_')
        slug: String,
        /// Page title
        #[arg(long)]
        title: String,
        /// HTML body
        #[arg(long, conflicts_with = "file")]
        body: Option<String>,
        /// Read the HTML body from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Delete a page
    Remove {
        /// Page slug
        slug: String,
    },
}
