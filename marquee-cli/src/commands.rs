//! CLI command implementations

use std::sync::Arc;

use anyhow::Context;
use clap::Subcommand;
use marquee_core::config::{MarqueeConfig, OmdbConfig};
use marquee_core::provider::MovieProvider;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};
use marquee_search::{DevelopmentProvider, OmdbProvider};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// OMDb API key (falls back to the OMDB_API_KEY environment variable)
        #[arg(long)]
        api_key: Option<String>,
        /// Use the canned development catalog instead of the OMDb API
        #[arg(long)]
        demo: bool,
        /// Console log level
        #[arg(long, default_value = "info")]
        log_level: CliLogLevel,
    },
    /// Search the catalog once and print the matches
    Search {
        /// Title query
        query: String,
        /// OMDb API key (falls back to the OMDB_API_KEY environment variable)
        #[arg(long)]
        api_key: Option<String>,
        /// Use the canned development catalog instead of the OMDb API
        #[arg(long)]
        demo: bool,
    },
    /// Fetch details for one title and print them
    Detail {
        /// IMDb identifier (e.g. tt0133093)
        imdb_id: String,
        /// OMDb API key (falls back to the OMDB_API_KEY environment variable)
        #[arg(long)]
        api_key: Option<String>,
        /// Use the canned development catalog instead of the OMDb API
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            api_key,
            demo,
            log_level,
        } => serve(host, port, api_key, demo, log_level).await,
        Commands::Search {
            query,
            api_key,
            demo,
        } => search_once(query, api_key, demo).await,
        Commands::Detail {
            imdb_id,
            api_key,
            demo,
        } => detail_once(imdb_id, api_key, demo).await,
    }
}

/// Start the web server for the search UI and API access
async fn serve(
    host: String,
    port: u16,
    api_key: Option<String>,
    demo: bool,
    log_level: CliLogLevel,
) -> anyhow::Result<()> {
    init_tracing(log_level.as_tracing_level(), None)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let mut config = MarqueeConfig::default();
    config.omdb = omdb_config(api_key);
    config.server.bind_address = host.clone();
    config.server.port = port;

    println!("Starting Marquee web server...");
    println!("URL: http://{host}:{port}");
    if demo {
        println!("Mode: Demo (using the canned catalog)");
    } else if config.omdb.api_key.is_none() {
        println!("Note: no OMDb API key configured; requests may be rejected");
    }
    println!("{:-<50}", "");
    println!("Search page: http://{host}:{port}/");
    println!("API: http://{host}:{port}/api/*");
    println!();
    println!("Press Ctrl+C to stop the server");

    let provider = build_provider(&config.omdb, demo);
    marquee_web::run_server(config, provider)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))
}

/// Search the catalog once and print the matches
async fn search_once(query: String, api_key: Option<String>, demo: bool) -> anyhow::Result<()> {
    let provider = build_provider(&omdb_config(api_key), demo);

    let results = provider
        .search(&query)
        .await
        .with_context(|| format!("search for '{query}' failed"))?;

    if results.is_empty() {
        println!("No matches for '{query}'.");
        return Ok(());
    }

    println!("{} match(es) for '{query}':", results.len());
    for movie in &results {
        println!("  {}  {} ({})", movie.imdb_id, movie.title, movie.year);
    }

    Ok(())
}

/// Fetch details for one title and print them
async fn detail_once(imdb_id: String, api_key: Option<String>, demo: bool) -> anyhow::Result<()> {
    let provider = build_provider(&omdb_config(api_key), demo);

    let detail = provider
        .detail(&imdb_id)
        .await
        .with_context(|| format!("detail lookup for '{imdb_id}' failed"))?;

    println!("{} ({})", detail.title, detail.year);
    if let Some(genre) = &detail.genre {
        println!("Genre: {genre}");
    }
    if let Some(runtime) = &detail.runtime {
        println!("Runtime: {runtime}");
    }
    if let Some(rating) = detail.rating {
        println!("IMDb rating: {rating}/10");
    }
    if let Some(plot) = &detail.plot {
        println!();
        println!("{plot}");
    }

    Ok(())
}

/// Resolve OMDb configuration from the flag or the environment
fn omdb_config(api_key: Option<String>) -> OmdbConfig {
    match api_key {
        Some(key) => OmdbConfig {
            api_key: Some(key),
            ..OmdbConfig::default()
        },
        None => OmdbConfig::from_env(),
    }
}

/// Build the catalog provider for the chosen mode
fn build_provider(omdb: &OmdbConfig, demo: bool) -> Arc<dyn MovieProvider> {
    if demo {
        Arc::new(DevelopmentProvider::new())
    } else {
        Arc::new(OmdbProvider::new(omdb.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_flag_overrides_environment() {
        let config = omdb_config(Some("285a71f6".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("285a71f6"));
    }

    #[tokio::test]
    async fn demo_search_prints_without_network() {
        let result = search_once("matrix".to_string(), None, true).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn demo_detail_prints_without_network() {
        let result = detail_once("tt0133093".to_string(), None, true).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn demo_detail_for_unknown_id_fails() {
        let result = detail_once("tt0000000".to_string(), None, true).await;
        assert!(result.is_err());
    }
}
