//! Backoffice Web Server
//!
//! Serves the admin pages with permission-gated create modals.

use clap::Parser;

use backoffice_core::{init_logging, BackofficeConfig};
use backoffice_web::server::BackofficeServerBuilder;
use backoffice_web::WebConfig;

/// Backoffice Web Server - admin interface with RBAC-gated actions
#[derive(Parser)]
#[command(name = "backoffice-web")]
#[command(about = "Admin web interface for Backoffice")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Server port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable development mode
    #[arg(long)]
    dev: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Load environment variables
    dotenvy::dotenv().ok();

    // File config wins over env defaults; flags win over both
    let core_config = match &args.config {
        Some(path) => match BackofficeConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Failed to load config file: {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let logging = core_config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&logging) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let mut config = match &core_config {
        Some(core) => WebConfig::from_core(core),
        None => WebConfig::from_env(),
    };

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.dev {
        config.dev_mode = true;
    }

    let server = match BackofficeServerBuilder::new().with_config(config).build() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to build server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        eprintln!("Server failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["backoffice-web"]);
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert!(!args.dev);

        let args = Args::parse_from([
            "backoffice-web",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--dev",
        ]);
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(3000));
        assert!(args.dev);
    }
}
