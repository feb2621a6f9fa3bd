use anyhow::Result;
use axum::{Router, routing::get};
use clap::Parser;
use periscope_server::{RoomRelay, SignalingService, ws_handler};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// WebSocket relay brokering peer connection setup between a host and its viewers.
#[derive(Parser)]
#[command(name = "periscope-server", version)]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let (room_cmd_tx, room_cmd_rx) = mpsc::channel(100);
    let service = SignalingService::new(room_cmd_tx);

    let relay = RoomRelay::new(room_cmd_rx, Arc::new(service.clone()));
    tokio::spawn(relay.run());

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .with_state(service);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Signaling server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
