use crate::locale::Locale;
use crate::meta::{Page, page_meta};
use crate::ui::layout::calculate_menu_chunks;
use crate::utils::truncate_to_width;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Language selection screen. The header previews the site metadata for the
/// locale currently highlighted.
pub fn draw_menu(f: &mut Frame, selected_index: usize) {
    let layout = calculate_menu_chunks(f.area());
    let highlighted = Locale::ALL[selected_index.min(Locale::ALL.len() - 1)];
    let meta = page_meta(Page::Home, highlighted);

    let title = Paragraph::new(meta.title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let max_width = (layout.description_area.width.saturating_sub(2) as usize) * 2;
    let description = Paragraph::new(truncate_to_width(meta.description, max_width))
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(description, layout.description_area);

    let items: Vec<ListItem> = Locale::ALL
        .iter()
        .enumerate()
        .map(|(i, locale)| {
            let style = if i == selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} ({})", locale.native_name(), locale.as_str())).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Language / 语言"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, layout.list_area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", key_style),
        Span::from(" Navigate  "),
        Span::styled("Enter", key_style),
        Span::from(" Start  "),
        Span::styled("q", key_style),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
