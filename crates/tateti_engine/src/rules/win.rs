//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::types::{Board, Cell, Win};

/// The eight winning lines as board indices: rows, then columns, then
/// diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a completed line on the board.
///
/// Lines are scanned in [`WIN_LINES`] order and the first match is
/// returned, so the result is deterministic even on boards that could not
/// arise in a legal game.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|i| board.cell(i).unwrap_or(Cell::Empty));
        match a {
            Cell::Occupied(player) if a == b && a == c => Some(Win::new(player, line)),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    fn line_positions(line: [usize; 3]) -> [Position; 3] {
        line.map(|i| Position::from_index(i).unwrap())
    }

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(check_winner(&board), Some(Win::new(Player::X, [0, 1, 2])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(check_winner(&board), Some(Win::new(Player::O, [2, 4, 6])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Cell::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in WIN_LINES {
            let positions = line_positions(line);
            let board = board_with(Player::O, &positions);
            assert_eq!(check_winner(&board), Some(Win::new(Player::O, line)));
        }
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Top row and left column both complete; the row is declared first.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(check_winner(&board).map(|w| w.line), Some([0, 1, 2]));
    }
}
