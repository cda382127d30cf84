use tracing_subscriber::EnvFilter;

/// Sends log output to stderr so stdout only carries workflow commands.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = installed {
        log::debug!("Keeping the existing log subscriber: {}", e);
    }
}
