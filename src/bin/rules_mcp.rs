//! Rules MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes a directory of markdown
//! coding rules as lookup and search tools for MCP clients.

use clap::Parser;
use rules_mcp::core::config::Config;
use rules_mcp::core::services::Services;
use rules_mcp::core::xdg::XdgDirs;
use rules_mcp::mcp::McpServer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rules-mcp", version, about = "MCP server for coding rule documents")]
struct Args {
    /// Config file (falls back to the XDG config file)
    #[arg(long, env = "RULES_MCP_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Rules directory (overrides config and RULES_MCP_RULES_DIR)
    #[arg(long, value_name = "DIR")]
    rules_dir: Option<PathBuf>,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rules_mcp=info"));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_env_filter(filter)
        .with_ansi(false);

    match std::env::var("RULES_MCP_LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.compact().init(),
    }
}

fn load_config(args: &Args, xdg: &XdgDirs) -> rules_mcp::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.resolve_rules_dir(xdg);
            config.merge_env();
            config
        }
        None => Config::load_with_xdg(xdg)?,
    };

    if let Some(dir) = &args.rules_dir {
        config.rules.dir = dir.clone();
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging();

    let xdg = XdgDirs::new();
    if let Err(e) = xdg.ensure_dirs_exist() {
        tracing::warn!("Failed to create XDG config directory: {}", e);
    }
    xdg.log_paths();

    let config = load_config(&args, &xdg).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    let services = match Services::new(config) {
        Ok(services) => Arc::new(services),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Failed to load rules: {e}");
            std::process::exit(1);
        }
    };

    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
