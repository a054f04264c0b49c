use swipe_deck_demo::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("swipe_deck_demo", LevelFilter::Debug)
        .filter_module("swipe_deck_core", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::warn!("RUST_LOG not set, falling back to default log filters");
    } else {
        env_logger::init();
        log::warn!("Initialized logger from env");
    }

    let config = AppConfig::from_environment();

    app::application(config).run()
}
