use kiln_domain::flags::Flags;
use kiln_logger::{LevelFilter, Logger};
use tracing::Level;

#[test]
fn default_flags_keep_only_warnings() {
    let logger = Logger::builder()
        .name("kiln-quiet")
        .flags(Flags::DEFAULTS)
        // explicit filter so RUST_LOG cannot interfere
        .env_filter("walkdir=error")
        .init()
        .expect("logger should initialize");

    assert_eq!(logger.level(), LevelFilter::WARN);
    assert!(tracing::enabled!(Level::WARN));
    assert!(!tracing::enabled!(Level::INFO));
    assert!(!tracing::enabled!(target: "kiln::trace", Level::INFO));
}
