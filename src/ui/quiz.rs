use crate::locale::Locale;
use crate::models::{OptionOutcome, QuizSession};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::display_width;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn option_label(index: usize) -> String {
    let letter = (b'A' + (index as u8 % 26)) as char;
    format!("{}. ", letter)
}

fn option_style(session: &QuizSession, index: usize) -> Style {
    if session.revealed {
        match session.option_outcome(index) {
            OptionOutcome::Correct => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            OptionOutcome::Incorrect => Style::default().fg(Color::Red),
            OptionOutcome::Neutral => Style::default(),
        }
    } else if session.selected == Some(index) {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession, locale: Locale) {
    let layout = calculate_quiz_chunks(f.area());
    let card = &session.card;

    let header_text = format!("{} · {}", locale.label_flashcard(), card.category);
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut question_text = Text::from(Line::from(Span::styled(
        card.question_nl.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if session.show_translation {
        question_text.push_line(Line::from(Span::styled(
            card.translated_question(locale),
            Style::default().fg(Color::Blue),
        )));
    }
    let question = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(question, layout.question_area);

    let translated_options = card.translated_options(locale);
    let mut option_lines: Vec<Line> = Vec::new();
    for (index, option) in card.options_nl.iter().enumerate() {
        let label = option_label(index);
        let indent = " ".repeat(display_width(&label));
        option_lines.push(Line::from(Span::styled(
            format!("{}{}", label, option),
            option_style(session, index),
        )));
        if session.show_translation {
            option_lines.push(Line::from(Span::styled(
                format!("{}{}", indent, translated_options[index]),
                Style::default().fg(Color::Blue),
            )));
        }
        option_lines.push(Line::from(""));
    }
    let options = Paragraph::new(Text::from(option_lines))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(options, layout.options_area);

    let mut feedback_lines: Vec<Line> = Vec::new();
    if let Some(message) = session.feedback_message(locale) {
        let style = if session.is_selection_correct() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        };
        feedback_lines.push(Line::from(Span::styled(message, style)));
        if let Some(translated) = session.translation_feedback(locale) {
            feedback_lines.push(Line::from(Span::styled(
                translated,
                Style::default().fg(Color::Blue),
            )));
        }
    } else {
        feedback_lines.push(Line::from(Span::styled(
            locale.hint_new_question(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let feedback = Paragraph::new(Text::from(feedback_lines))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback, layout.feedback_area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut help_spans = Vec::new();
    if !session.revealed {
        help_spans.extend([
            Span::styled("↑/↓ 1-9", key_style),
            Span::from(format!(" {}  ", locale.label_select())),
            Span::styled("Enter", key_style),
            Span::from(format!(" {}  ", locale.label_check_answer())),
        ]);
    } else {
        help_spans.extend([
            Span::styled("Enter/n", key_style),
            Span::from(format!(" {}  ", locale.label_new_card())),
        ]);
    }
    let translation_label = if session.show_translation {
        locale.label_hide_translation()
    } else {
        locale.label_show_translation()
    };
    help_spans.extend([
        Span::styled("t", key_style),
        Span::from(format!(" {}  ", translation_label)),
        Span::styled("Esc", key_style),
        Span::from(format!(" {}", locale.label_menu())),
    ]);
    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame, locale: Locale) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let (title_text, message_text) = match locale {
        Locale::En => ("Back to Menu", "Leave this question and return to the menu?"),
        Locale::Zh => ("返回菜单", "放弃本题并返回菜单？"),
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::from(" Yes  "),
        Span::styled("n", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::from(" No  "),
        Span::styled("Ctrl+C", key_style),
        Span::from(" Exit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label_sequence() {
        assert_eq!(option_label(0), "A. ");
        assert_eq!(option_label(1), "B. ");
        assert_eq!(option_label(2), "C. ");
    }
}
