use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness; safe to call from every test
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
