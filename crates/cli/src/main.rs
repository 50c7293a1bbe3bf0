use anyhow::Context;
use clap::Parser;
use ferrous_mdns_application::ports::AliasRepository;
use ferrous_mdns_domain::CliOverrides;
use ferrous_mdns_infrastructure::mdns::UdpMulticastTransport;
use ferrous_mdns_jobs::JobRunner;
use std::net::IpAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-mdns")]
#[command(version)]
#[command(about = "Ferrous mDNS - answers multicast DNS queries for local host aliases")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Address of the interface to join the multicast group on
    #[arg(short = 'i', long, value_name = "ADDR")]
    interface: Option<String>,

    /// Use the IPv6 group ff02::fb
    #[arg(long)]
    ipv6: bool,

    /// Alias file, one alias per line
    #[arg(long, value_name = "FILE")]
    alias_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        interface: cli.interface.clone(),
        ipv6: cli.ipv6,
        alias_file: cli.alias_file.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous mDNS v{}", env!("CARGO_PKG_VERSION"));

    let interface_addr: IpAddr = match &config.server.interface {
        Some(addr) => addr
            .parse()
            .with_context(|| format!("invalid interface address '{}'", addr))?,
        None => bootstrap::detect_interface_addr(config.server.ipv6)?,
    };

    let (socket, group) = server::create_multicast_socket(interface_addr, config.server.port)?;
    let transport = Arc::new(UdpMulticastTransport::new(socket, group));

    let shutdown = CancellationToken::new();
    let services = di::MdnsServices::new(&config, transport, interface_addr, shutdown.clone());

    match services.reload_aliases.execute().await {
        Ok(0) => warn!("No aliases configured, only observing the network"),
        Ok(count) => info!(aliases = count, "Aliases loaded"),
        Err(e) => return Err(e).context("loading aliases"),
    }
    for alias in services.aliases.aliases() {
        info!(hostname = alias.hostname(), addresses = ?alias.addresses(), "Serving alias");
    }

    let reload_job = services.reload_job();
    server::spawn_signal_handlers(shutdown.clone(), reload_job.trigger());
    let jobs = JobRunner::new()
        .with_alias_reload(reload_job)
        .with_shutdown_token(shutdown.clone())
        .start();

    let result = services.service().run().await;

    shutdown.cancel();
    for job in jobs {
        let _ = job.await;
    }

    match result {
        Ok(()) => {
            info!("Ferrous mDNS shutdown complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Ferrous mDNS stopped on socket failure");
            Err(e.into())
        }
    }
}
