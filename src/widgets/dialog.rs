//! Dialog widget for confirmations and messages
//!
//! Self-contained: handles centering, background dimming, borders, the
//! wrapped body and a row of buttons.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap};

/// Dialog variant for different visual styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Default,
    Warning,
}

pub struct Dialog<'a> {
    pub title: &'a str,
    pub content: &'a str,
    /// Label and selected flag per button, left to right
    pub buttons: Vec<(&'a str, bool)>,
    pub min_width: u16,
    pub max_width: u16,
    pub variant: DialogVariant,
    pub dim_background: bool,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            buttons: Vec::new(),
            min_width: 36,
            max_width: 60,
            variant: DialogVariant::Default,
            dim_background: true,
        }
    }

    pub fn buttons(mut self, buttons: Vec<(&'a str, bool)>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn dim_background(mut self, dim: bool) -> Self {
        self.dim_background = dim;
        self
    }

    /// Width that fits the longest body line, clamped to the area
    fn modal_width(&self, area: Rect) -> u16 {
        let longest = self
            .content
            .lines()
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0) as u16;
        (longest + 8)
            .clamp(self.min_width, self.max_width)
            .min(area.width.saturating_sub(2))
    }

    fn render_impl(&self, area: Rect, buf: &mut Buffer) {
        let t = theme();

        let width = self.modal_width(area);
        let inner_width = width.saturating_sub(6).max(1) as usize;
        // rough wrapped height: one row per started line of inner width
        let body_rows: u16 = self
            .content
            .lines()
            .map(|l| (l.chars().count().max(1)).div_ceil(inner_width) as u16)
            .sum();
        // borders + body + blank + buttons
        let height = (body_rows + 4).min(area.height.saturating_sub(2)).max(5);

        let popup_area = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        if self.dim_background {
            Block::default().style(t.dim_style()).render(area, buf);
        }
        Clear.render(popup_area, buf);

        let border_style = match self.variant {
            DialogVariant::Default => t.border_focused_style(),
            DialogVariant::Warning => t.warning_style(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(true))
            .border_style(border_style)
            .title(format!(" {} ", self.title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(2))
            .style(t.background_style());
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let [body_area, buttons_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .style(t.text_style())
            .render(body_area, buf);

        let mut spans = Vec::new();
        for (i, (label, selected)) in self.buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let style = if *selected {
                t.highlight_style()
            } else {
                t.muted_style()
            };
            spans.push(Span::styled(format!("[ {} ]", label), style));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(buttons_area, buf);
    }
}

impl<'a> Widget for Dialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_impl(area, buf);
    }
}
