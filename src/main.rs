use anyhow::Context;
use jotter::service::NoteService;
use jotter::setup::{arguments, logging};
use jotter::store::MemoryStore;
use jotter::web::{self, AppState};
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the logger so RUST_LOG can come from there
    dotenv::dotenv().ok();
    logging::setup_log();

    let args = arguments::handle_args();

    let service = NoteService::new(Box::new(MemoryStore::new()));
    let state = Arc::new(AppState { service });
    let app = web::router(state);

    let addr = args.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed binding to {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
