use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key bindings in display order: (keys, action).
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("Enter", "Shorten"),
    ("Ctrl+O", "Open link"),
    ("Ctrl+Y", "Copy link"),
    ("Ctrl+U", "Clear"),
    ("Esc/Ctrl+Q", "Quit"),
];

const SEPARATOR: &str = "  ";

/// Key hints on the left, version pushed to the right edge of `width` cells.
/// Too narrow a width simply clips the line.
pub fn footer_line(width: u16) -> Line<'static> {
    let key_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(MUTED_TEXT);

    let mut spans = vec![Span::raw(" ")];
    for (idx, (keys, action)) in KEY_HINTS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(SEPARATOR));
        }
        spans.push(Span::styled(*keys, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }

    let version = format!("v{VERSION} ");
    let used: usize = spans.iter().map(Span::width).sum();
    let padding = (width as usize)
        .saturating_sub(used)
        .saturating_sub(version.chars().count());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(version, text_style));

    Line::from(spans)
}

pub fn widget(area: Rect) -> Paragraph<'static> {
    // Two border cells.
    Paragraph::new(footer_line(area.width.saturating_sub(2))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
