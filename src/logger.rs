use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログ初期化（`RUST_LOG` があればそちらを優先）
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "pdf_image_mapper=debug"
    } else {
        "pdf_image_mapper=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
