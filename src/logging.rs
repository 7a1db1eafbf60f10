use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Install a fmt subscriber routed through the test writer.
///
/// Safe to call from every test: only the first call installs anything.
pub fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_test_writer()
        .try_init();
}
