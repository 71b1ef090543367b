// Integration tests

// Initialize logger for tests when logging feature is enabled
#[cfg(feature = "logging")]
#[ctor::ctor]
fn init() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

mod mocks;

mod cache_test;
mod config_test;
mod connection_test;
mod credential_test;
mod factory_test;
mod lock_test;
