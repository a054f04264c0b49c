use std::sync::Arc;

use iced::{Application, Program as IcedProgram, Settings, Theme};

use crate::messages::Message;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the demo application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<
    impl IcedProgram<State = State, Message = Message, Theme = Theme>,
> {
    let window_size =
        iced::Size::new(config.window_width, config.window_height);
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Swipe Deck")
    .subscription(subscriptions::subscription)
    .window(iced::window::Settings {
        size: window_size,
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("swipe-deck".to_string());
    settings.antialiasing = true;
    settings
}
