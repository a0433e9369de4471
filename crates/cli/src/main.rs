use catchall_api::AppState;
use catchall_domain::{CliOverrides, StorageBackend};
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "catchall")]
#[command(version)]
#[command(about = "Catch-all domain detection from delivery and bounce events")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Storage backend (sqlite, memory)
    #[arg(long)]
    backend: Option<StorageBackend>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        backend: cli.backend,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting catch-all detection service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        backend = %config.database.backend,
        bind_address = %config.server.bind_address,
        web_port = config.server.web_port,
        "Configuration loaded"
    );

    let repos = di::Repositories::new(&config).await?;
    let use_cases = di::UseCases::new(&repos, &config.store);

    let app_state = AppState {
        record_delivered: use_cases.record_delivered,
        record_bounced: use_cases.record_bounced,
        get_domain_status: use_cases.get_domain_status,
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_backend_flag_is_parsed() {
        let cli = Cli::parse_from(["catchall", "--backend", "memory", "-w", "9000"]);

        assert_eq!(cli.backend, Some(StorageBackend::Memory));
        assert_eq!(cli.web_port, Some(9000));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(Cli::try_parse_from(["catchall", "--backend", "postgres"]).is_err());
    }
}
