//! Screen controllers for the application.
//!
//! Each screen implements the `Screen` trait, owns its own state and
//! handles both rendering and events. Screens never touch the navigation
//! stack directly; they return a [`ScreenAction`] for the navigator to
//! apply.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Navigator                        │    │
//! │  │  stack: [MainMenu, Settings, ...]              │    │
//! │  │  top.handle_event(...) -> ScreenAction         │    │
//! │  │  apply(action): push / pop / replace / swap    │    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                        │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Trait                     │    │
//! │  │  - set_up / show / hide / dispose              │    │
//! │  │  - render(frame, area, context)                │    │
//! │  │  - handle_event(event, context) -> Action      │    │
//! │  └────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod about;
pub mod game;
pub mod main_menu;
pub mod screen_trait;
pub mod settings;
pub mod statistics;
pub mod tutorial;

pub use about::AboutScreen;
pub use game::GameScreen;
pub use main_menu::MainMenuScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
pub use settings::SettingsScreen;
pub use statistics::StatisticsScreen;
pub use tutorial::TutorialScreen;

use crate::navigator::Navigator;

/// Register a factory for every screen in the game
pub fn register_all(navigator: &mut Navigator) {
    navigator.register(ScreenId::MainMenu, || -> Box<dyn Screen> {
        Box::new(MainMenuScreen::new())
    });
    navigator.register(ScreenId::Game, || -> Box<dyn Screen> { Box::new(GameScreen::new()) });
    navigator.register(ScreenId::Statistics, || -> Box<dyn Screen> {
        Box::new(StatisticsScreen::new())
    });
    navigator.register(ScreenId::Settings, || -> Box<dyn Screen> {
        Box::new(SettingsScreen::new())
    });
    navigator.register(ScreenId::About, || -> Box<dyn Screen> { Box::new(AboutScreen::new()) });
    navigator.register(ScreenId::Tutorial, || -> Box<dyn Screen> {
        Box::new(TutorialScreen::new())
    });
}
