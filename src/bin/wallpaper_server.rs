//! HTTP server generating full-year calendar wallpaper PNGs.

use clap::Parser;
use tracing::info;
use yearwall::server::{run_server, ServerArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Calendar wallpaper image server")]
struct Args {
    #[command(flatten)]
    server: ServerArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("Starting wallpaper server...");
    run_server(args.server).await
}
