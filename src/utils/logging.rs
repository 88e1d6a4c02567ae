use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    // RUST_LOG overrides the default level, e.g. RUST_LOG=lms=debug
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in aggregated logs.
        .with_ansi(false)
        .json()
        .init();
}
