// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Roster contributors

//! roster-server: JSON request/response server for the roster employee store.
//!
//! Accepts TCP connections and speaks the newline-delimited JSON protocol
//! defined in roster-core: one request per line, one response per line.

mod server;
mod state;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use state::ServerState;

/// roster-server: Employee records service
#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "JSON request/response server for employee records")]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1:7810")]
    bind: SocketAddr,

    /// Directory for database storage
    #[arg(short, long, default_value = ".")]
    data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = ServerState::new(&args.data)?;
    info!("Store opened in {}", args.data.display());

    server::run(args.bind, state).await
}
