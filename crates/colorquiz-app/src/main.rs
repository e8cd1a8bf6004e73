//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    use clap::Parser;
    use colorquiz_app::{App, AppConfig, AppError, Args};

    env_logger::init();
    log::info!("Starting Color Quiz");

    let result = AppConfig::from_args(Args::parse())
        .map_err(AppError::from)
        .and_then(App::run);

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("colorquiz: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
