//! ldpfs server binary

use clap::Parser;
use ldpfs::{HttpServer, PrefixTable, ServerConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ldpfs", version, about = "Publish a directory tree as LDP containers")]
struct Cli {
    /// Workspace root to publish
    #[arg(value_name = "WORKSPACE", default_value = "./workspace")]
    workspace: PathBuf,

    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    address: String,

    /// Port
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Base site identifier to advertise instead of the Host header
    #[arg(long, env = "LDPFS_EXTERNAL_BASE")]
    external_base: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ServerConfig {
        address: cli.address,
        port: cli.port,
        workspace: cli.workspace,
        external_base: cli.external_base,
    };

    info!(
        "ldpfs v{} mounting workspace {}",
        ldpfs::version(),
        config.workspace.display()
    );

    let server = HttpServer::new(config, PrefixTable::with_defaults());
    server.start().await?;
    Ok(())
}
