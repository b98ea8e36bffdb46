use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the form column gets on large terminals.
pub const FORM_MAX_WIDTH: u16 = 72;

const HEADER_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const TRIGGER_HEIGHT: u16 = 1;
const HINT_HEIGHT: u16 = 1;
const ERROR_HEIGHT: u16 = 3;
const RESULT_HEIGHT: u16 = 4;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Horizontally centered column of at most `max_width`, full height.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Rows of the form body. Panels that are not shown get no space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRegions {
    pub input: Rect,
    pub trigger: Rect,
    pub hint: Rect,
    pub error: Option<Rect>,
    pub result: Option<Rect>,
}

pub fn form_regions(body: Rect, show_error: bool, show_result: bool) -> FormRegions {
    let column = centered_column(body, FORM_MAX_WIDTH);

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(TRIGGER_HEIGHT),
        Constraint::Length(HINT_HEIGHT),
    ];
    if show_error {
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    if show_result {
        constraints.push(Constraint::Length(RESULT_HEIGHT));
    }
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    let error = show_error.then(|| rows[4]);
    let result = show_result.then(|| rows[if show_error { 5 } else { 4 }]);

    FormRegions {
        input: rows[1],
        trigger: rows[2],
        hint: rows[3],
        error,
        result,
    }
}
