use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inspection-ingest")]
#[command(about = "Extracts inspection assets into blob storage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Server(ServerArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServerArgs {
    /// Address to bind to, overriding server.bind_addr
    #[arg(long)]
    pub address: Option<SocketAddr>,

    /// Configuration file, overriding INGEST_CONFIG
    #[arg(long)]
    pub config: Option<PathBuf>,
}
