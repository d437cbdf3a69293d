use crate::model::parser::FIELD_LABELS;
use crate::tui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    // 1. Layout: Main Body (Top) vs Footer (Bottom 3 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(v_chunks[0]);

    // --- Entry Form ---
    let field_items: Vec<ListItem> = FIELD_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = state.form.get(i);
            let line = if i == state.focused {
                format!("{}: {}_", label, value)
            } else {
                format!("{}: {}", label, value)
            };
            ListItem::new(Line::from(vec![Span::raw(line)]))
        })
        .collect();

    let form = List::new(field_items)
        .block(Block::default().borders(Borders::ALL).title(" Event Form "))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );
    f.render_stateful_widget(form, h_chunks[0], &mut state.list_state);

    // --- Schedule Pane ---
    let schedule = Paragraph::new(state.output.clone())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Schedule "));
    f.render_widget(schedule, h_chunks[1]);

    // --- Footer: Status (Left) / Shortcuts (Right) ---
    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[1]);

    let status_color = if state.message.starts_with("Error") {
        Color::Red
    } else {
        Color::Cyan
    };
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );

    let shortcuts = "^B:Block | Enter:View | ^D:Del | ^R:Recur | Esc:Quit";
    let help = Paragraph::new(shortcuts)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );

    f.render_widget(status, footer_chunks[0]);
    f.render_widget(help, footer_chunks[1]);
}
