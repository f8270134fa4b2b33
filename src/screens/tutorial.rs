//! Tutorial screen: a few pages of instructions that lead into a game.
//!
//! Paging past the last page swaps the tutorial for the game screen, so
//! backing out of that game lands on the main menu.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use crate::services::SoundCode;
use crate::styles::theme;
use crate::utils::{center_rect, create_standard_layout};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

const PAGE_KEYS: [&str; 4] = [
    "tutorial.page.1",
    "tutorial.page.2",
    "tutorial.page.3",
    "tutorial.page.4",
];

#[derive(Default)]
pub struct TutorialScreen {
    pages: Vec<String>,
    page: usize,
}

impl TutorialScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    fn is_last_page(&self) -> bool {
        self.page + 1 >= self.pages.len()
    }
}

impl Screen for TutorialScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Tutorial
    }

    fn set_up(&mut self, ctx: &mut ScreenContext) {
        self.pages = PAGE_KEYS.iter().map(|key| ctx.text(key)).collect();
        self.page = 0;
    }

    fn dispose(&mut self) {
        self.pages.clear();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 3, 2);

        Header::render(
            frame,
            header_chunk,
            &ctx.text("tutorial.title"),
            &format!("{} / {}", self.page + 1, self.pages.len()),
        )?;

        let text = self.pages.get(self.page).cloned().unwrap_or_default();
        let next_label = if self.is_last_page() {
            ctx.text("tutorial.start")
        } else {
            ctx.text("tutorial.next")
        };
        let lines = vec![
            Line::from(Span::styled(text, t.text_style())),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} ({})", next_label, ctx.keymap.key_for(Action::Confirm)),
                t.emphasis_style(),
            )),
        ];

        let card = center_rect(content_chunk, 56, 9);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(true))
            .border_style(t.border_focused_style())
            .padding(Padding::uniform(1))
            .style(t.background_style());
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            card,
        );

        let footer_text = format!(
            "Next: {} | Previous: {} | Skip: {}",
            ctx.keymap.key_for(Action::MoveRight),
            ctx.keymap.key_for(Action::MoveLeft),
            ctx.keymap.key_for(Action::Cancel),
        );
        Footer::render(frame, footer_chunk, &footer_text)?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(action) = ctx.action_for(&event) else {
            return Ok(ScreenAction::None);
        };
        match action {
            Action::NextPage | Action::MoveRight | Action::Confirm => {
                ctx.play(SoundCode::Click);
                if self.is_last_page() {
                    debug!("tutorial: finished");
                    return Ok(ScreenAction::Swap(ScreenId::Game));
                }
                self.page += 1;
            }
            Action::PrevPage | Action::MoveLeft => {
                self.page = self.page.saturating_sub(1);
            }
            Action::Cancel | Action::Quit => {
                ctx.play(SoundCode::Back);
                return Ok(ScreenAction::PopAndDispose);
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }
}
