mod cli;
mod content;
mod shell;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("casement=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "casement=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Casement v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let mut config = match &args.config {
        Some(path) => casement_config::toml_loader::load_from_path(std::path::Path::new(path))
            .unwrap_or_else(|e| {
                tracing::warn!("Config load failed, using defaults: {e}");
                casement_config::CasementConfig::default()
            }),
        None => casement_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            casement_config::CasementConfig::default()
        }),
    };

    // CLI overrides
    if let Some(title) = args.title {
        config.window.title = title;
    }
    if let Some(url) = args.url {
        tracing::info!("Using page URL override: {url}");
        config.page.url = Some(url);
    }

    // Create event loop and run
    let event_loop = match EventLoop::<shell::ShellEvent>::with_user_event().build() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("failed to create event loop: {e}");
            return;
        }
    };
    let proxy = event_loop.create_proxy();
    let mut app = shell::ShellApp::new(config, proxy);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
