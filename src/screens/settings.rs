//! Settings screen for the player's preferences.
//!
//! Toggles are read from the preferences when the screen is shown and
//! written back, then flushed, as soon as they change.

use crate::components::{Footer, Header};
use crate::dialog::{ConfirmDialog, DialogOutcome, Modal};
use crate::keymap::Action;
use crate::preferences::{keys, PreferencesStore};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use crate::services::SoundCode;
use crate::stats::Statistics;
use crate::utils::{center_rect, create_standard_layout};
use crate::widgets::{Menu, MenuItem, MenuState, Skin};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::info;

/// Available settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Fullscreen,
    Sound,
    OfferTutorial,
    ResetStatistics,
}

impl SettingItem {
    pub const ALL: [SettingItem; 4] = [
        SettingItem::Fullscreen,
        SettingItem::Sound,
        SettingItem::OfferTutorial,
        SettingItem::ResetStatistics,
    ];

    fn label_key(self) -> &'static str {
        match self {
            SettingItem::Fullscreen => "settings.fullscreen",
            SettingItem::Sound => "settings.sound",
            SettingItem::OfferTutorial => "settings.tutorial",
            SettingItem::ResetStatistics => "settings.reset_stats",
        }
    }

    fn style(self) -> &'static str {
        match self {
            SettingItem::ResetStatistics => "danger",
            _ => "toggle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsDialog {
    ResetStatistics,
}

/// Current values of the toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Toggles {
    fullscreen: bool,
    sound: bool,
    offer_tutorial: bool,
}

impl Toggles {
    fn read(prefs: &dyn PreferencesStore) -> Self {
        Self {
            fullscreen: prefs.get_boolean(keys::FULLSCREEN),
            sound: prefs.get_boolean_or(keys::SOUND, true),
            offer_tutorial: !prefs.get_boolean(keys::TUTORIAL_ASKED),
        }
    }
}

#[derive(Default)]
pub struct SettingsScreen {
    labels: Vec<String>,
    on_off: (String, String),
    toggles: Toggles,
    state: MenuState,
    modal: Modal<SettingsDialog>,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Vec<MenuItem> {
        SettingItem::ALL
            .iter()
            .zip(&self.labels)
            .map(|(item, label)| {
                let value = match item {
                    SettingItem::Fullscreen => Some(self.toggles.fullscreen),
                    SettingItem::Sound => Some(self.toggles.sound),
                    SettingItem::OfferTutorial => Some(self.toggles.offer_tutorial),
                    SettingItem::ResetStatistics => None,
                };
                let button = Skin::button(item.style(), label.clone());
                match value {
                    Some(true) => button.info(self.on_off.0.clone()),
                    Some(false) => button.info(self.on_off.1.clone()),
                    None => button,
                }
            })
            .collect()
    }

    fn activate(&mut self, item: SettingItem, ctx: &mut ScreenContext) -> Result<()> {
        ctx.play(SoundCode::Click);
        match item {
            SettingItem::Fullscreen => {
                ctx.prefs.put_boolean(keys::FULLSCREEN, !self.toggles.fullscreen);
            }
            SettingItem::Sound => {
                ctx.prefs.put_boolean(keys::SOUND, !self.toggles.sound);
            }
            SettingItem::OfferTutorial => {
                ctx.prefs
                    .put_boolean(keys::TUTORIAL_ASKED, self.toggles.offer_tutorial);
            }
            SettingItem::ResetStatistics => {
                self.modal.open(
                    ConfirmDialog::confirm(
                        SettingsDialog::ResetStatistics,
                        ctx.text("settings.reset_stats.title"),
                        ctx.text("settings.reset_stats.body"),
                    )
                    .destructive(),
                );
                return Ok(());
            }
        }
        ctx.prefs.flush()?;
        self.toggles = Toggles::read(&*ctx.prefs);
        info!("Setting changed: {:?} -> {:?}", item, self.toggles);
        Ok(())
    }

    fn on_dialog(
        &mut self,
        purpose: SettingsDialog,
        outcome: DialogOutcome,
        ctx: &mut ScreenContext,
    ) -> Result<()> {
        match (purpose, outcome) {
            (SettingsDialog::ResetStatistics, DialogOutcome::Confirmed) => {
                Statistics::reset(&mut *ctx.prefs);
                ctx.prefs.flush()?;
                info!("Statistics reset");
            }
            (SettingsDialog::ResetStatistics, DialogOutcome::Cancelled) => {}
        }
        Ok(())
    }
}

impl Screen for SettingsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Settings
    }

    fn set_up(&mut self, ctx: &mut ScreenContext) {
        self.labels = SettingItem::ALL
            .iter()
            .map(|item| ctx.text(item.label_key()))
            .collect();
        self.on_off = (ctx.text("settings.on"), ctx.text("settings.off"));
        self.state = MenuState::new();
    }

    fn show(&mut self, ctx: &mut ScreenContext) {
        self.toggles = Toggles::read(&*ctx.prefs);
    }

    fn dispose(&mut self) {
        self.labels.clear();
        self.modal.close();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 3, 2);

        Header::render(
            frame,
            header_chunk,
            &ctx.text("settings.title"),
            &ctx.text("settings.description"),
        )?;

        let menu = Menu::new(self.items());
        let menu_area = center_rect(content_chunk, 44, menu.card_height());
        frame.render_stateful_widget(menu, menu_area, &mut self.state);

        let footer_text = format!(
            "Navigate: {} | Change: {} | Back: {}",
            ctx.keymap.navigation_display(),
            ctx.keymap.key_for(Action::Confirm),
            ctx.keymap.key_for(Action::Cancel),
        );
        Footer::render(frame, footer_chunk, &footer_text)?;

        self.modal.render(frame, area, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let action = ctx.action_for(&event);

        if self.modal.is_open() {
            if let Some((purpose, outcome)) = self.modal.handle(action) {
                self.on_dialog(purpose, outcome, ctx)?;
            }
            return Ok(ScreenAction::None);
        }

        let Some(action) = action else {
            return Ok(ScreenAction::None);
        };
        match action {
            Action::MoveUp => self.state.select_previous(SettingItem::ALL.len()),
            Action::MoveDown => self.state.select_next(SettingItem::ALL.len()),
            Action::Confirm | Action::Toggle => {
                let selected = self
                    .state
                    .selected()
                    .and_then(|i| SettingItem::ALL.get(i).copied());
                if let Some(item) = selected {
                    self.activate(item, ctx)?;
                }
            }
            Action::Cancel | Action::Quit => {
                ctx.play(SoundCode::Back);
                return Ok(ScreenAction::Pop);
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn has_modal(&self) -> bool {
        self.modal.is_open()
    }
}
