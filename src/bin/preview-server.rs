use clap::Parser;
use deezer_preview::api::API_BASE_URL;
use deezer_preview::logging::init_logging;
use deezer_preview::server::{self, ServerConfig, DEFAULT_BIND};
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "preview-server")]
#[command(about = "Resolve Deezer track ids to preview URLs over HTTP", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "PREVIEW_BIND", default_value = DEFAULT_BIND)]
    bind: SocketAddr,

    /// Deezer API base URL
    #[arg(long, env = "DEEZER_API_BASE", default_value = API_BASE_URL)]
    api_base: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();

    server::serve(ServerConfig {
        bind: cli.bind,
        api_base: cli.api_base,
    })
    .await?;

    Ok(())
}
