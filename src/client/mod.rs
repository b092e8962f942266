pub mod feed;
pub mod fetch;
pub mod poller;

pub use feed::{ConnectionStatus, SnapshotFeed};
pub use fetch::fetch_snapshots;
pub use poller::run_polling;

#[cfg(feature = "desktop")]
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
