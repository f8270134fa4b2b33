use crate::config::Config;
use crate::navigator::{NavStatus, Navigator};
use crate::preferences::{keys, FilePreferences};
use crate::screens::{self, ScreenId};
use crate::services::{Services, TerminalBell};
use crate::styles::init_theme;
use crate::tui::Tui;
use crate::utils::windowed_area;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Main application state
pub struct App {
    tui: Tui,
    navigator: Navigator,
    services: Services,
}

impl App {
    pub fn new(config: &Config, preferences_path: &Path) -> Result<Self> {
        init_theme(config.theme_type());

        let prefs = FilePreferences::load(preferences_path)
            .context("Failed to load preferences")?;
        let services = Services::new(
            Box::new(prefs),
            Box::new(TerminalBell),
            config.keymap.clone(),
            config.board_size,
        );

        let mut navigator = Navigator::new();
        screens::register_all(&mut navigator);

        Ok(Self {
            tui: Tui::new()?,
            navigator,
            services,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.navigator
            .start(ScreenId::MainMenu, &mut self.services.context())?;

        // Main event loop
        loop {
            self.draw()?;

            // Poll for events with 250ms timeout so the game clock keeps ticking
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                let status = self
                    .navigator
                    .handle_event(event, &mut self.services.context())?;
                if status == NavStatus::Exit {
                    break;
                }
            }
        }

        self.services.prefs.flush()?;
        self.tui.exit()?;
        info!("Exited from {:?}", self.navigator.current());
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let fullscreen = self.services.prefs.get_boolean(keys::FULLSCREEN);
        let navigator = &mut self.navigator;
        let ctx = self.services.render_context();
        let mut result = Ok(());

        self.tui.terminal_mut().draw(|frame| {
            let area = windowed_area(frame.area(), fullscreen);
            result = navigator.render(frame, area, &ctx);
        })?;
        result
    }
}
