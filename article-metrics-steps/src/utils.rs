use {
    tracing::Level,
    tracing_subscriber::{prelude::*, filter::filter_fn},
};

// html parsing and http crates are chatty below info
const QUIET_TARGETS: &[&str] = &["html5ever", "selectors", "hyper", "reqwest"];

pub fn init_logging() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish()
        .with(filter_fn(|metadata| {
            if QUIET_TARGETS.iter().any(|target| metadata.target().starts_with(target)) {
                metadata.level() <= &Level::WARN
            } else {
                true
            }
        }))
        .init();
}
