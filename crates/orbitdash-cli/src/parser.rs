//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Space dashboard: ISS telemetry, JWST imagery, astronomy events and
/// OSDR datasets behind one web UI.
#[derive(Parser)]
#[command(name = "orbitdash")]
#[command(about = "Serve the orbitdash space dashboard and manage its pages")]
#[command(version)]
pub struct Cli {
    /// `SQLite` database holding the CMS pages
    #[arg(long = "db", env = "ORBITDASH_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::PageCommand;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["orbitdash", "--verbose", "--db", "/tmp/o.db", "paths"]);
        assert!(cli.verbose);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/o.db")));
        assert!(matches!(cli.command, Some(Commands::Paths)));
    }

    #[test]
    fn test_serve_args() {
        let cli = Cli::parse_from([
            "orbitdash",
            "serve",
            "--port",
            "9090",
            "--iss-url",
            "http://localhost:3000",
            "--allow-origin",
            "http://a.example",
            "--allow-origin",
            "http://b.example",
            "--jwst-cache-seconds",
            "0",
            "--no-seed",
        ]);
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, 9090);
        assert_eq!(args.iss_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(args.allow_origin.len(), 2);
        assert_eq!(args.jwst_cache_seconds, Some(0));
        assert!(args.no_seed);
    }

    #[test]
    fn test_page_put_requires_title() {
        assert!(Cli::try_parse_from(["orbitdash", "pages", "put", "news"]).is_err());

        let cli = Cli::parse_from([
            "orbitdash", "pages", "put", "news", "--title", "News", "--body", "<p>hi</p>",
        ]);
        let Some(Commands::Pages {
            command: PageCommand::Put { slug, title, body, file },
        }) = cli.command
        else {
            panic!("expected pages put");
        };
        assert_eq!(slug, "news");
        assert_eq!(title, "News");
        assert_eq!(body.as_deref(), Some("<p>hi</p>"));
        assert!(file.is_none());
    }

    #[test]
    fn test_page_put_body_and_file_conflict() {
        let result = Cli::try_parse_from([
            "orbitdash", "pages", "put", "news", "--title", "News", "--body", "x", "--file", "y",
        ]);
        assert!(result.is_err());
    }
}
