#![cfg(feature = "std")]

use broadside::init_logging;
use log::LevelFilter;

#[test]
fn test_init_logging_defaults_to_warn() {
    init_logging();
    // a second call keeps the installed logger
    init_logging();
    if std::env::var("BROADSIDE_LOG").is_err() {
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }
    log::warn!("logger installed");
}
