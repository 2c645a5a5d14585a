use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct MenuLayout {
    pub title_area: Rect,
    pub description_area: Rect,
    pub list_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        options_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        title_area: chunks[0],
        description_area: chunks[1],
        list_area: chunks[2],
        help_area: chunks[3],
    }
}
