use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Size of the play area when fullscreen is off
pub const WINDOW_WIDTH: u16 = 80;
pub const WINDOW_HEIGHT: u16 = 24;

/// Split an area into header, content and footer chunks
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Center a `width` x `height` rectangle inside `area`, shrinking it to fit
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// The area screens draw into: the whole terminal in fullscreen mode,
/// otherwise a centered fixed-size window
pub fn windowed_area(area: Rect, fullscreen: bool) -> Rect {
    if fullscreen {
        area
    } else {
        center_rect(area, WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}
