//! Main menu screen, the root of the navigation stack.
//!
//! Entries are a dispatch table: each one names its label, button style
//! and what activating it does. Until the player has answered it, the
//! tutorial offer pops up every time the menu is shown. The Exit entry is
//! only offered in fullscreen mode; Esc quits either way.

use crate::components::{Footer, Header};
use crate::dialog::{ConfirmDialog, DialogOutcome, Modal};
use crate::keymap::Action;
use crate::preferences::keys;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use crate::services::SoundCode;
use crate::utils::{center_rect, create_standard_layout};
use crate::widgets::{Menu, MenuItem, MenuState, Skin};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::{debug, info};

/// Screens torn down whenever a new game starts
pub const PLAY_EVICTS: [ScreenId; 3] = [ScreenId::About, ScreenId::Settings, ScreenId::Statistics];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Play,
    Open(ScreenId),
    Exit,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub label_key: &'static str,
    pub style: &'static str,
    pub command: MenuCommand,
    /// Played when the entry is activated
    pub sound: SoundCode,
}

pub static ENTRIES: [MenuEntry; 5] = [
    MenuEntry {
        label_key: "menu.play",
        style: "greenPlay",
        command: MenuCommand::Play,
        sound: SoundCode::Click,
    },
    MenuEntry {
        label_key: "menu.statistics",
        style: "stats",
        command: MenuCommand::Open(ScreenId::Statistics),
        sound: SoundCode::Click,
    },
    MenuEntry {
        label_key: "menu.settings",
        style: "settings",
        command: MenuCommand::Open(ScreenId::Settings),
        sound: SoundCode::Click,
    },
    MenuEntry {
        label_key: "menu.about",
        style: "about",
        command: MenuCommand::Open(ScreenId::About),
        sound: SoundCode::Click,
    },
    MenuEntry {
        label_key: "menu.exit",
        style: "exit",
        command: MenuCommand::Exit,
        sound: SoundCode::Back,
    },
];

/// Questions the main menu can ask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuDialog {
    TutorialOffer,
    /// Follow-up after the offer was turned down
    TutorialDeclined,
}

pub struct MainMenuScreen {
    /// One button per entry of `ENTRIES`
    items: Vec<MenuItem>,
    /// Indices into `ENTRIES` on offer right now
    visible: Vec<usize>,
    state: MenuState,
    modal: Modal<MenuDialog>,
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            state: MenuState::new(),
            modal: Modal::new(),
        }
    }

    fn selected_entry(&self) -> Option<&'static MenuEntry> {
        self.state
            .selected()
            .and_then(|i| self.visible.get(i))
            .and_then(|&i| ENTRIES.get(i))
    }

    fn activate(&mut self, entry: &MenuEntry, ctx: &mut ScreenContext) -> ScreenAction {
        ctx.play(entry.sound);
        debug!("main-menu: {:?}", entry.command);
        match entry.command {
            MenuCommand::Play => ScreenAction::Replace {
                evict: PLAY_EVICTS.to_vec(),
                push: ScreenId::Game,
            },
            MenuCommand::Open(id) => ScreenAction::Push(id),
            MenuCommand::Exit => ScreenAction::Quit,
        }
    }

    fn mark_tutorial_asked(ctx: &mut ScreenContext) -> Result<()> {
        ctx.prefs.put_boolean(keys::TUTORIAL_ASKED, true);
        ctx.prefs.flush()
    }

    fn on_dialog(
        &mut self,
        purpose: MenuDialog,
        outcome: DialogOutcome,
        ctx: &mut ScreenContext,
    ) -> Result<ScreenAction> {
        match (purpose, outcome) {
            (MenuDialog::TutorialOffer, DialogOutcome::Confirmed) => {
                ctx.play(SoundCode::Success);
                Self::mark_tutorial_asked(ctx)?;
                info!("Tutorial offer accepted");
                Ok(ScreenAction::Push(ScreenId::Tutorial))
            }
            (MenuDialog::TutorialOffer, DialogOutcome::Cancelled) => {
                ctx.play(SoundCode::Fail);
                Self::mark_tutorial_asked(ctx)?;
                info!("Tutorial offer declined");
                self.modal.open(ConfirmDialog::message(
                    MenuDialog::TutorialDeclined,
                    ctx.text("tutorial.declined.title"),
                    ctx.text("tutorial.declined.body"),
                ));
                Ok(ScreenAction::None)
            }
            (MenuDialog::TutorialDeclined, _) => {
                ctx.play(SoundCode::Success);
                Ok(ScreenAction::None)
            }
        }
    }
}

impl Screen for MainMenuScreen {
    fn id(&self) -> ScreenId {
        ScreenId::MainMenu
    }

    fn set_up(&mut self, ctx: &mut ScreenContext) {
        self.items = ENTRIES
            .iter()
            .map(|entry| Skin::button(entry.style, ctx.text(entry.label_key)))
            .collect();
        self.state = MenuState::new();
    }

    fn show(&mut self, ctx: &mut ScreenContext) {
        let fullscreen = ctx.prefs.get_boolean(keys::FULLSCREEN);
        self.visible = ENTRIES
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.command != MenuCommand::Exit || fullscreen)
            .map(|(i, _)| i)
            .collect();
        if self.state.selected().is_some_and(|i| i >= self.visible.len()) {
            self.state.select(Some(0));
        }

        if !ctx.prefs.get_boolean(keys::TUTORIAL_ASKED) {
            self.modal.open(ConfirmDialog::confirm(
                MenuDialog::TutorialOffer,
                ctx.text("tutorial.prompt.title"),
                ctx.text("tutorial.prompt.body"),
            ));
        }
    }

    fn dispose(&mut self) {
        self.items.clear();
        self.visible.clear();
        self.modal.close();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 3, 2);

        Header::render(
            frame,
            header_chunk,
            &ctx.text("app.title"),
            &ctx.text("app.tagline"),
        )?;

        let items = self
            .visible
            .iter()
            .filter_map(|&i| self.items.get(i).cloned())
            .collect();
        let menu = Menu::new(items);
        let menu_area = center_rect(content_chunk, 32, menu.card_height());
        frame.render_stateful_widget(menu, menu_area, &mut self.state);

        Footer::render(frame, footer_chunk, &ctx.keymap.footer_navigation())?;

        self.modal.render(frame, area, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let action = ctx.action_for(&event);

        if self.modal.is_open() {
            return match self.modal.handle(action) {
                Some((purpose, outcome)) => self.on_dialog(purpose, outcome, ctx),
                None => Ok(ScreenAction::None),
            };
        }

        let Some(action) = action else {
            return Ok(ScreenAction::None);
        };
        match action {
            Action::MoveUp => self.state.select_previous(self.visible.len()),
            Action::MoveDown => self.state.select_next(self.visible.len()),
            Action::Confirm => {
                if let Some(entry) = self.selected_entry() {
                    return Ok(self.activate(entry, ctx));
                }
            }
            Action::Cancel | Action::Quit => return Ok(ScreenAction::Quit),
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn has_modal(&self) -> bool {
        self.modal.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Keymap;
    use crate::preferences::MemoryPreferences;
    use crate::services::{RecordingSound, Services};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn recording() -> (Services, RecordingSound) {
        let sound = RecordingSound::new();
        let services = Services::new(
            Box::new(MemoryPreferences::new()),
            Box::new(sound.clone()),
            Keymap::default(),
            4,
        );
        (services, sound)
    }

    /// Services for a player who already answered the tutorial offer
    fn returning() -> Services {
        let mut services = Services::in_memory();
        services.prefs.put_boolean(keys::TUTORIAL_ASKED, true);
        services
    }

    fn shown(services: &mut Services) -> MainMenuScreen {
        let mut screen = MainMenuScreen::new();
        let mut ctx = services.context();
        screen.set_up(&mut ctx);
        screen.show(&mut ctx);
        screen
    }

    fn send(screen: &mut MainMenuScreen, services: &mut Services, code: KeyCode) -> ScreenAction {
        screen
            .handle_event(press(code), &mut services.context())
            .unwrap()
    }

    #[test]
    fn test_entries_cover_every_secondary_screen() {
        for id in [ScreenId::Statistics, ScreenId::Settings, ScreenId::About] {
            assert!(ENTRIES.iter().any(|e| e.command == MenuCommand::Open(id)));
        }
    }

    #[test]
    fn test_first_show_offers_tutorial() {
        let mut services = Services::in_memory();
        let screen = shown(&mut services);
        assert!(screen.has_modal());
    }

    #[test]
    fn test_accepting_tutorial_pushes_it() {
        let (mut services, sound) = recording();
        let mut screen = shown(&mut services);

        let action = send(&mut screen, &mut services, KeyCode::Char('y'));
        assert_eq!(action, ScreenAction::Push(ScreenId::Tutorial));
        assert!(services.prefs.get_boolean(keys::TUTORIAL_ASKED));
        assert!(!screen.has_modal());
        assert_eq!(sound.played(), vec![SoundCode::Success]);
    }

    #[test]
    fn test_declining_tutorial_stays_on_menu() {
        let (mut services, sound) = recording();
        let mut screen = shown(&mut services);

        let action = send(&mut screen, &mut services, KeyCode::Char('n'));
        assert_eq!(action, ScreenAction::None);
        assert!(services.prefs.get_boolean(keys::TUTORIAL_ASKED));
        // The follow-up message replaces the offer
        assert!(screen.has_modal());

        let action = send(&mut screen, &mut services, KeyCode::Enter);
        assert_eq!(action, ScreenAction::None);
        assert!(!screen.has_modal());
        assert_eq!(sound.played(), vec![SoundCode::Fail, SoundCode::Success]);
    }

    #[test]
    fn test_answered_offer_is_not_repeated() {
        let mut services = returning();
        let mut screen = shown(&mut services);
        assert!(!screen.has_modal());

        screen.hide(&mut services.context());
        screen.show(&mut services.context());
        assert!(!screen.has_modal());
    }

    #[test]
    fn test_play_evicts_and_starts_game() {
        let mut services = returning();
        let mut screen = shown(&mut services);

        let action = send(&mut screen, &mut services, KeyCode::Enter);
        assert_eq!(
            action,
            ScreenAction::Replace {
                evict: PLAY_EVICTS.to_vec(),
                push: ScreenId::Game,
            }
        );
    }

    #[test]
    fn test_navigate_and_open() {
        let mut services = returning();
        let mut screen = shown(&mut services);

        send(&mut screen, &mut services, KeyCode::Down);
        let action = send(&mut screen, &mut services, KeyCode::Enter);
        assert_eq!(action, ScreenAction::Push(ScreenId::Statistics));
    }

    #[test]
    fn test_escape_quits() {
        let mut services = returning();
        let mut screen = shown(&mut services);
        let action = send(&mut screen, &mut services, KeyCode::Esc);
        assert_eq!(action, ScreenAction::Quit);
    }

    #[test]
    fn test_exit_entry_hidden_when_windowed() {
        let mut services = returning();
        let mut screen = shown(&mut services);

        // Up from Play wraps to the last visible entry
        send(&mut screen, &mut services, KeyCode::Up);
        let action = send(&mut screen, &mut services, KeyCode::Enter);
        assert_eq!(action, ScreenAction::Push(ScreenId::About));
    }

    #[test]
    fn test_exit_entry_plays_its_own_sound() {
        let (mut services, sound) = recording();
        services.prefs.put_boolean(keys::TUTORIAL_ASKED, true);
        services.prefs.put_boolean(keys::FULLSCREEN, true);
        let mut screen = shown(&mut services);

        send(&mut screen, &mut services, KeyCode::Up);
        let action = send(&mut screen, &mut services, KeyCode::Enter);
        assert_eq!(action, ScreenAction::Quit);
        assert_eq!(sound.played(), vec![SoundCode::Back]);
    }

    #[test]
    fn test_leaving_fullscreen_keeps_selection_in_range() {
        let mut services = returning();
        services.prefs.put_boolean(keys::FULLSCREEN, true);
        let mut screen = shown(&mut services);
        send(&mut screen, &mut services, KeyCode::Up);

        // Exit was selected; it disappears on the next show
        services.prefs.put_boolean(keys::FULLSCREEN, false);
        screen.hide(&mut services.context());
        screen.show(&mut services.context());
        let action = send(&mut screen, &mut services, KeyCode::Enter);
        assert!(matches!(action, ScreenAction::Replace { .. }));
    }
}
