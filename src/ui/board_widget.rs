use crate::game::{Cell, Player};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Display color of a player's pieces.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

/// Styled three-character span for one board cell.
pub fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" \u{25cf} ", player_color(Player::Red)),
        Cell::Yellow => (" \u{25cf} ", player_color(Player::Yellow)),
    };
    Span::styled(symbol, Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_span_colors() {
        assert_eq!(cell_span(Cell::Empty).content, " . ");
        assert_eq!(cell_span(Cell::Red).style.fg, Some(Color::Red));
        assert_eq!(cell_span(Cell::Yellow).style.fg, Some(Color::Yellow));
    }
}
