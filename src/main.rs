use std::sync::Arc;
use tokio::sync::Notify;

use qr_webserver::config::{AppState, Config};
use qr_webserver::qr::raster;
use qr_webserver::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // First CLI argument overrides the config file path (without extension)
    let cfg = match std::env::args().nth(1) {
        Some(config_path) => Config::load_from(&config_path)?,
        None => Config::load()?,
    };
    logger::init(&cfg.logging)?;

    // Build the Tokio runtime with the configured worker count
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Rasterizer resources are loaded once, before the first request
    raster::init(cfg.qr.load_system_fonts);
    let state = Arc::new(AppState::new(&cfg));

    let listener = server::bind_listener(addr)?;
    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown))?;

    logger::log_server_start(&listener.local_addr()?, &cfg);
    server::start_server_loop(listener, state, shutdown).await?;
    Ok(())
}
