use super::board_widget::{cell_span, player_color};
use crate::game::{BoardEngine, GameStatus, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &BoardEngine,
    selected_column: usize,
    message: &Option<String>,
    show_controls: bool,
) {
    let controls_height = if show_controls { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(ROWS as u16 + 4),    // Board
            Constraint::Length(3),               // Message
            Constraint::Length(controls_height), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    if show_controls {
        render_controls(frame, chunks[3]);
    }
}

fn render_header(frame: &mut Frame, engine: &BoardEngine, area: Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let player = engine.current_player();
            (
                format!("Current Player: {}", player.name()),
                player_color(player),
            )
        }
        GameStatus::Won(winner) => (
            format!("Game Over  |  {} wins", winner.name()),
            player_color(winner),
        ),
        GameStatus::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, engine: &BoardEngine, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            // Colors come straight from the engine each frame
            if let Some(cell) = engine.cell(row, col) {
                row_spans.push(cell_span(cell));
            }
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column && !engine.is_terminal() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter/1-7: Drop  |  R: New game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
