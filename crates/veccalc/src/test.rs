use log::LevelFilter;

/// Routes log output of this crate to the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .is_test(true)
        .filter(Some(env!("CARGO_PKG_NAME")), LevelFilter::Trace)
        .parse_default_env()
        .try_init()
        .ok();
}
