use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render a footer of `Label: keys | Label: keys` hints
    ///
    /// # Returns
    /// The height used (2 lines: 1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let t = theme();
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style())
            .border_type(t.border_type(false))
            .style(t.background_style());
        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Self::hint_line(text)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2)
    }

    /// Colored spans for the hint text; segments without a label stay plain
    fn hint_line(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            if let Some((label, keys)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", label), t.title_style()));
                spans.push(Span::styled(keys, t.emphasis_style().add_modifier(Modifier::BOLD)));
            } else {
                spans.push(Span::styled(part, t.text_style()));
            }
        }

        Line::from(spans)
    }
}
