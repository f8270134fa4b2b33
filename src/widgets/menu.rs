//! Menu widget rendering items as cards.
//!
//! Each item is a three-line card when there is room for all of them, and
//! collapses to a single line otherwise.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const CARD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Icon to display before the text
    pub icon: String,
    pub text: String,
    pub color: Color,
    /// Right-hand detail such as "on" / "off"
    pub info: Option<String>,
}

impl MenuItem {
    pub fn new(icon: impl Into<String>, text: impl Into<String>, color: Color) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
            color,
            info: None,
        }
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

/// Selection state for the Menu widget
#[derive(Debug, Default, Clone)]
pub struct MenuState {
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected: Some(0) }
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Move down, wrapping to the first item
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    /// Move up, wrapping to the last item
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + len - 1) % len));
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Rows per item for the given area
    fn item_height(&self, area: Rect) -> u16 {
        if self.items.len() as u16 * CARD_HEIGHT <= area.height {
            CARD_HEIGHT
        } else {
            1
        }
    }

    /// Height needed to show every item as a card
    pub fn card_height(&self) -> u16 {
        self.items.len() as u16 * CARD_HEIGHT
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();
        let item_height = self.item_height(area);

        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + i as u16 * item_height;
            if y + item_height > area.y + area.height {
                break;
            }

            let is_selected = state.selected == Some(i);
            let bg = if is_selected {
                t.highlight_bg
            } else {
                t.background
            };
            let style = if t.is_plain() {
                if is_selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                }
            } else {
                Style::default().fg(item.color).bg(bg)
            };
            let bold = style.add_modifier(Modifier::BOLD);
            let marker = Span::styled(
                if is_selected { "▌" } else { " " },
                t.border_focused_style().bg(bg),
            );

            let mut spans = vec![marker.clone(), Span::styled(" ", style)];
            spans.push(Span::styled(format!("{} ", item.icon), bold));
            spans.push(Span::styled(
                item.text.as_str(),
                if is_selected { bold } else { style },
            ));
            if let Some(info) = &item.info {
                spans.push(Span::styled(format!("  {}", info), t.emphasis_style().bg(bg)));
            }

            let width = Line::from(spans.clone()).width();
            if width < area.width as usize {
                spans.push(Span::styled(" ".repeat(area.width as usize - width), style));
            }

            let content_y = if item_height == CARD_HEIGHT { y + 1 } else { y };
            Line::from(spans).render(Rect::new(area.x, content_y, area.width, 1), buf);

            if item_height == CARD_HEIGHT {
                let padding = Line::from(vec![
                    marker,
                    Span::styled(" ".repeat(area.width.saturating_sub(1) as usize), style),
                ]);
                padding
                    .clone()
                    .render(Rect::new(area.x, y, area.width, 1), buf);
                padding.render(Rect::new(area.x, y + 2, area.width, 1), buf);
            }
        }
    }
}
