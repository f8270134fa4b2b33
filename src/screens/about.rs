use crate::components::{Footer, Header};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use crate::services::SoundCode;
use crate::styles::theme;
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::Event;
use indoc::formatdoc;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

/// Version, credits and the controls for the active keymap
#[derive(Default)]
pub struct AboutScreen {
    body: Option<String>,
}

impl AboutScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// One header per category, then each action with its key
    fn controls(keymap: &Keymap) -> String {
        let mut out = String::new();
        let mut category = "";
        for action in Action::ALL {
            if action.category() != category {
                category = action.category();
                out.push_str(&format!("  {category}\n"));
            }
            out.push_str(&format!(
                "    {:<30} {}\n",
                action.description(),
                keymap.key_for(action)
            ));
        }
        out
    }

    fn body(keymap: &Keymap) -> String {
        formatdoc! {"
            gridlock {version}

            A sliding-tile puzzle for the terminal. Every board is
            shuffled from the solved layout, so it can always be solved.

            Controls ({preset:?} keymap)
            {controls}
            Settings and statistics are stored in your config directory.
            ",
            version = env!("CARGO_PKG_VERSION"),
            preset = keymap.preset,
            controls = Self::controls(keymap),
        }
    }
}

impl Screen for AboutScreen {
    fn id(&self) -> ScreenId {
        ScreenId::About
    }

    fn set_up(&mut self, ctx: &mut ScreenContext) {
        self.body = Some(Self::body(ctx.keymap));
    }

    fn dispose(&mut self) {
        self.body = None;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 3, 2);

        Header::render(
            frame,
            header_chunk,
            &ctx.text("about.title"),
            &ctx.text("app.tagline"),
        )?;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(false))
            .border_style(t.border_style())
            .padding(Padding::horizontal(2))
            .style(t.background_style());
        let body = Paragraph::new(self.body.clone().unwrap_or_default())
            .block(block)
            .style(t.text_style())
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        frame.render_widget(body, content_chunk);

        let footer_text = format!("Back: {}", ctx.keymap.key_for(Action::Cancel));
        Footer::render(frame, footer_chunk, &footer_text)?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        match ctx.action_for(&event) {
            Some(Action::Cancel | Action::Confirm | Action::Quit) => {
                ctx.play(SoundCode::Back);
                Ok(ScreenAction::Pop)
            }
            _ => Ok(ScreenAction::None),
        }
    }
}
