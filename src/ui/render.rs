use crate::ui::footer;
use crate::ui::header::Header;
use crate::ui::layout::{form_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, HEADER_TEXT, INPUT_BORDER, LINK, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    TRIGGER_DISABLED,
};
use crate::ui::view::{FormView, ERROR_PREFIX, PLACEHOLDER, RESULT_LABEL};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Draws one frame. Reads only `view`; never fails on its content.
pub fn draw(frame: &mut Frame<'_>, view: &FormView<'_>) {
    let area = frame.area();
    let (header, body, footer_area) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);
    frame.render_widget(footer::widget(footer_area), footer_area);

    let regions = form_regions(body, view.error.is_some(), view.result.is_some());

    draw_input(frame, view, regions.input);
    draw_trigger(frame, view, regions.trigger);

    if let Some(hint) = view.hint {
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(MUTED_TEXT))),
            regions.hint,
        );
    }

    if let (Some(error), Some(rect)) = (view.error, regions.error) {
        let line = Line::from(vec![
            Span::styled(
                ERROR_PREFIX,
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(error, Style::default().fg(HEADER_TEXT)),
        ]);
        let panel = Paragraph::new(line).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
        frame.render_widget(panel, rect);
    }

    if let (Some(result), Some(rect)) = (view.result, regions.result) {
        let lines = vec![
            Line::from(Span::styled(RESULT_LABEL, Style::default().fg(HEADER_TEXT))),
            Line::from(Span::styled(
                result,
                Style::default()
                    .fg(LINK)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ];
        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_OK)),
        );
        frame.render_widget(panel, rect);
    }
}

fn draw_input(frame: &mut Frame<'_>, view: &FormView<'_>, rect: Rect) {
    let block = Block::default()
        .title(" Long URL ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(INPUT_BORDER));
    let inner = block.inner(rect);

    // Keep the end of long input visible, leaving one cell for the cursor.
    let (visible, visible_width) = visible_tail(view.input, inner.width.saturating_sub(1) as usize);
    let cursor_offset = visible_width as u16;

    let content = if view.shows_placeholder() {
        Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(visible, Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(Paragraph::new(content).block(block), rect);

    if inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor_offset.min(inner.width - 1), inner.y));
    }
}

/// Longest suffix of `input` that fits in `max_width` terminal cells, and the
/// number of cells it takes.
fn visible_tail(input: &str, max_width: usize) -> (&str, usize) {
    let mut start = input.len();
    let mut width = 0;
    for (idx, ch) in input.char_indices().rev() {
        let ch_width = Span::raw(&input[idx..idx + ch.len_utf8()]).width();
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = idx;
    }
    (&input[start..], width)
}

fn draw_trigger(frame: &mut Frame<'_>, view: &FormView<'_>, rect: Rect) {
    let style = if view.trigger.enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TRIGGER_DISABLED)
    };
    let label = format!("[ {} ]", view.trigger.label);
    frame.render_widget(
        Paragraph::new(Span::styled(label, style)).alignment(Alignment::Right),
        rect,
    );
}
