use tracing_subscriber::fmt;

/// Install a stderr subscriber when `verbose`; a no-op otherwise or when a
/// subscriber is already set.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }
    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
