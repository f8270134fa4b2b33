//! Statistics screen: a read-only view of the player's record.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use crate::services::SoundCode;
use crate::stats::{format_seconds, Statistics};
use crate::styles::theme;
use crate::utils::{center_rect, create_standard_layout};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;

/// Label keys in display order
const ROWS: [&str; 5] = [
    "stats.played",
    "stats.solved",
    "stats.best_moves",
    "stats.best_time",
    "stats.last_solved",
];

#[derive(Default)]
pub struct StatisticsScreen {
    /// Refreshed every time the screen is shown
    stats: Option<Statistics>,
}

impl StatisticsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(stats: &Statistics, none: &str) -> [String; 5] {
        [
            stats.games_played.to_string(),
            stats.games_solved.to_string(),
            stats
                .best_moves
                .map_or_else(|| none.to_string(), |n| n.to_string()),
            stats
                .best_seconds
                .map_or_else(|| none.to_string(), format_seconds),
            stats.last_solved.map_or_else(
                || none.to_string(),
                |at| at.format("%Y-%m-%d %H:%M").to_string(),
            ),
        ]
    }
}

impl Screen for StatisticsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Statistics
    }

    fn set_up(&mut self, _ctx: &mut ScreenContext) {}

    fn show(&mut self, ctx: &mut ScreenContext) {
        self.stats = Some(Statistics::load(&*ctx.prefs));
    }

    fn dispose(&mut self) {
        self.stats = None;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 3, 2);

        Header::render(
            frame,
            header_chunk,
            &ctx.text("stats.title"),
            &ctx.text("stats.description"),
        )?;

        let stats = self.stats.clone().unwrap_or_default();
        let values = Self::values(&stats, &ctx.text("stats.none"));
        let lines: Vec<Line> = ROWS
            .iter()
            .zip(values)
            .map(|(key, value)| {
                Line::from(vec![
                    Span::styled(format!("{:<20}", ctx.text(key)), t.text_style()),
                    Span::styled(value, t.emphasis_style()),
                ])
            })
            .collect();

        let card = center_rect(content_chunk, 44, ROWS.len() as u16 + 4);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(false))
            .border_style(t.border_style())
            .padding(Padding::uniform(1))
            .style(t.background_style());
        frame.render_widget(Paragraph::new(lines).block(block), card);

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
