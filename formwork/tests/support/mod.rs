use simplelog::{Config, LevelFilter, TestLogger};

/// Install the test logger once per test binary; later calls are no-ops.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
