#![forbid(unsafe_code)]

use tracing_subscriber::filter::LevelFilter;

/// Install a terse stdout subscriber for the example binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_target(false)
        .compact()
        .init();
}
