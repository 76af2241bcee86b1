//! Board notation encoding and decoding.
//!
//! A board is written as eight rows of eight `H`/`T` characters joined by
//! `/`, top row (positions 0-7) first, e.g. an all-tails board is
//! `TTTTTTTT/TTTTTTTT/.../TTTTTTTT`.
//!
//! See CPI_PROTOCOL.md section 2 for the full specification.

use crate::board::{Board, Face, GRID_SIDE, TOKEN_COUNT};

/// Errors that can occur during notation parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 8 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} squares, expected 8")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid token character: '{0}'")]
    InvalidToken(char),
}

/// Parses a board from its notation string.
pub fn parse_notation(s: &str) -> Result<Board, NotationError> {
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != GRID_SIDE {
        return Err(NotationError::WrongRowCount(rows.len()));
    }

    let mut board = Board::all_tails();
    for (row, row_str) in rows.iter().enumerate() {
        let chars: Vec<char> = row_str.chars().collect();
        if chars.len() != GRID_SIDE {
            return Err(NotationError::WrongRowLength {
                row,
                len: chars.len(),
            });
        }
        for (column, &c) in chars.iter().enumerate() {
            let face = Face::from_notation_char(c).ok_or(NotationError::InvalidToken(c))?;
            board.faces[row * GRID_SIDE + column] = face;
        }
    }
    Ok(board)
}

/// Encodes a board into its notation string.
pub fn encode_notation(board: &Board) -> String {
    let mut out = String::with_capacity(TOKEN_COUNT + GRID_SIDE - 1);
    for row in 0..GRID_SIDE {
        if row > 0 {
            out.push('/');
        }
        for column in 0..GRID_SIDE {
            out.push(board.faces[row * GRID_SIDE + column].notation_char());
        }
    }
    out
}

/// Renders a board as an eight-line grid for human eyes, one
/// space-separated row per line.
pub fn render_grid(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..GRID_SIDE {
        for column in 0..GRID_SIDE {
            if column > 0 {
                out.push(' ');
            }
            out.push(board.faces[row * GRID_SIDE + column].notation_char());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const ALL_TAILS: &str =
        "TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT";

    #[test]
    fn parses_the_all_tails_board() {
        let board = parse_notation(ALL_TAILS).unwrap();
        assert_eq!(board, Board::all_tails());
    }

    #[test]
    fn encode_parse_roundtrip() {
        for board in [
            Board::all_tails(),
            Board::all_heads(),
            Board::random(&mut SmallRng::seed_from_u64(5)),
        ] {
            let notation = encode_notation(&board);
            assert_eq!(parse_notation(&notation).unwrap(), board);
        }
    }

    #[test]
    fn notation_is_row_major_from_the_top() {
        let mut board = Board::all_tails();
        board.toggle(0).unwrap();
        board.toggle(9).unwrap();
        let notation = encode_notation(&board);
        assert_eq!(
            notation,
            "HTTTTTTT/THTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT"
        );
    }

    #[test]
    fn rejects_wrong_row_count() {
        assert_eq!(
            parse_notation("TTTTTTTT/TTTTTTTT"),
            Err(NotationError::WrongRowCount(2))
        );
    }

    #[test]
    fn rejects_wrong_row_length() {
        let short_row = "TTTTTTTT/TTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT";
        assert_eq!(
            parse_notation(short_row),
            Err(NotationError::WrongRowLength { row: 1, len: 3 })
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        let bad = ALL_TAILS.replacen('T', "x", 1);
        assert_eq!(parse_notation(&bad), Err(NotationError::InvalidToken('x')));
    }

    #[test]
    fn grid_rendering_has_eight_rows() {
        let grid = render_grid(&Board::all_tails());
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), GRID_SIDE);
        assert!(lines.iter().all(|l| *l == "T T T T T T T T"));
    }
}
