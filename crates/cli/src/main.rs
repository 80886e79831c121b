use clap::Parser;
use dyndns_api::{
    state::{AliasUseCases, HostUseCases},
    AppState,
};
use dyndns_application::use_cases::ResolverSettings;
use dyndns_domain::CliOverrides;
use dyndns_infrastructure::dns::{DnsMessageHandler, ListenerTimeouts};
use dyndns_jobs::{JobRunner, UpdateLogRetentionJob};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dyndns")]
#[command(version)]
#[command(about = "dyndns - authoritative DNS server with a dynamic update endpoint")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Authoritative zones, comma separated, in match order
    #[arg(short = 'z', long, value_delimiter = ',')]
    zones: Vec<String>,

    /// Nameserver published in SOA records
    #[arg(long)]
    parent_ns: Option<String>,

    /// Address served at zone apexes; skips discovery
    #[arg(long)]
    external_ip: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
        zones: (!cli.zones.is_empty()).then_some(cli.zones),
        parent_ns: cli.parent_ns,
        external_ip: cli.external_ip,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dyndns v{}", env!("CARGO_PKG_VERSION"));

    let zones = Arc::new(config.dns.zone_matcher());
    for (outer, inner) in zones.overlapping_zones() {
        warn!(%outer, %inner, "Overlapping zones configured; the first listed wins");
    }
    info!(zones = ?zones.zones(), "Serving zones");

    let pool = bootstrap::init_database(&config.database).await?;
    let apex_ip = bootstrap::resolve_apex_ip(&config.dns).await?;

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(
        &repos,
        zones.clone(),
        ResolverSettings {
            apex_ip,
            parent_ns: Arc::from(config.dns.parent_ns.as_str()),
            default_ttl: config.dns.default_ttl,
        },
    );

    let shutdown = CancellationToken::new();

    let mut job_runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    if config.jobs.clear_log_interval_days > 0 {
        job_runner = job_runner.with_update_log_retention(
            UpdateLogRetentionJob::new(
                use_cases.cleanup_update_logs.clone(),
                config.jobs.clear_log_interval_days,
            )
            .with_interval(config.jobs.retention_check_interval_secs),
        );
    }
    let job_handles = job_runner.start();

    let app_state = AppState {
        hosts: HostUseCases {
            get_hosts: use_cases.get_hosts,
            create_host: use_cases.create_host,
            update_host: use_cases.update_host,
            delete_host: use_cases.delete_host,
        },
        aliases: AliasUseCases {
            get_aliases: use_cases.get_aliases,
            create_alias: use_cases.create_alias,
            delete_alias: use_cases.delete_alias,
        },
        get_update_logs: use_cases.get_update_logs,
        update_ip: use_cases.update_ip,
        zones,
        default_ttl: config.dns.default_ttl,
        api_key: config.server.api_key.as_deref().map(Arc::from),
    };

    let bind_ip: IpAddr = config.server.bind_address.trim().parse()?;
    let dns_addr = SocketAddr::new(bind_ip, config.server.dns_port);
    let dns_handler = DnsMessageHandler::new(use_cases.assembler);
    let timeouts =
        ListenerTimeouts::from_millis(config.dns.read_timeout_ms, config.dns.write_timeout_ms);

    let dns_task = tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if let Err(e) = server::start_dns_server(dns_addr, dns_handler, timeouts, shutdown).await
            {
                error!(error = %e, "DNS server error");
            }
        }
    });

    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);
    let web_task = tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if let Err(e) = server::start_web_server(web_addr, app_state, shutdown).await {
                error!(error = %e, "Web server error");
            }
        }
    });

    shutdown_signal().await;
    shutdown.cancel();

    let _ = dns_task.await;
    let _ = web_task.await;
    for handle in job_handles {
        let _ = handle.await;
    }

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C"),
            Err(e) => {
                error!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM");
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
