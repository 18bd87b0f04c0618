use crate::domain::model::Outcome;

pub const SIZE: usize = 3;
/// Mark for an empty, playable cell.
pub const EMPTY: char = '.';
/// Filler for cells missing from the raw text.
pub const BLANK: char = ' ';
pub const PLAYER1_MARK: char = '0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[char; SIZE]; SIZE],
}

impl Board {
    pub fn from_cells(cells: [[char; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Builds a board from raw server text. Missing rows and short rows are
    /// filled with `BLANK`, so this never fails.
    pub fn parse(raw: &str) -> Self {
        let mut cells = [[BLANK; SIZE]; SIZE];
        for (row, line) in raw.split('\n').take(SIZE).enumerate() {
            for (col, mark) in line.chars().take(SIZE).enumerate() {
                cells[row][col] = mark;
            }
        }
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// Scans rows, then columns, then the main and anti diagonals. The first
    /// completed line decides the outcome.
    pub fn outcome(&self) -> Outcome {
        let c = &self.cells;

        for row in c.iter() {
            if let Some(mark) = completed(row[0], row[1], row[2]) {
                return outcome_for(mark);
            }
        }

        for col in 0..SIZE {
            if let Some(mark) = completed(c[0][col], c[1][col], c[2][col]) {
                return outcome_for(mark);
            }
        }

        if let Some(mark) = completed(c[0][0], c[1][1], c[2][2]) {
            return outcome_for(mark);
        }
        if let Some(mark) = completed(c[0][2], c[1][1], c[2][0]) {
            return outcome_for(mark);
        }

        Outcome::NoWinner
    }
}

fn completed(a: char, b: char, c: char) -> Option<char> {
    (a != EMPTY && a == b && b == c).then_some(a)
}

fn outcome_for(mark: char) -> Outcome {
    if mark == PLAYER1_MARK {
        Outcome::Player1Wins
    } else {
        Outcome::Player2Wins
    }
}

/// Parses and evaluates in one step.
pub fn evaluate(raw: &str) -> Outcome {
    Board::parse(raw).outcome()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_board() {
        let board = Board::parse("000\n1.1\n.1.");
        assert_eq!(board.cell(0, 0), '0');
        assert_eq!(board.cell(1, 1), '.');
        assert_eq!(board.cell(2, 1), '1');
    }

    #[test]
    fn test_parse_is_total() {
        let empty = Board::parse("");
        assert_eq!(empty, Board::from_cells([[BLANK; 3]; 3]));

        let one_line = Board::parse("0.");
        assert_eq!(one_line.cell(0, 0), '0');
        assert_eq!(one_line.cell(0, 1), '.');
        assert_eq!(one_line.cell(0, 2), BLANK);
        assert_eq!(one_line.cell(1, 0), BLANK);

        let short_rows = Board::parse("0\n\n1.");
        assert_eq!(short_rows.cell(0, 1), BLANK);
        assert_eq!(short_rows.cell(1, 0), BLANK);
        assert_eq!(short_rows.cell(2, 1), '.');
    }

    #[test]
    fn test_parse_ignores_extra_rows_and_columns() {
        let board = Board::parse("0.1X\n...\n...\n000");
        assert_eq!(board.cell(0, 2), '1');
        assert_eq!(board.outcome(), Outcome::NoWinner);
    }

    #[test]
    fn test_every_line_is_detected() {
        let cases = [
            "000\n1.1\n.1.",
            "1.1\n000\n.1.",
            "1.1\n.1.\n000",
            "0.1\n0.1\n0..",
            ".01\n.0.\n10.",
            "1.0\n1.0\n..0",
            "0.1\n.0.\n1.0",
            "1.0\n.0.\n0.1",
        ];
        for raw in cases {
            assert_eq!(evaluate(raw), Outcome::Player1Wins, "board {:?}", raw);
        }
    }

    #[test]
    fn test_non_zero_mark_is_player2() {
        assert_eq!(evaluate("111\n0.0\n..."), Outcome::Player2Wins);
        assert_eq!(evaluate("X.0\nX0.\nX.."), Outcome::Player2Wins);
    }

    #[test]
    fn test_no_completed_line() {
        assert_eq!(evaluate("...\n...\n..."), Outcome::NoWinner);
        assert_eq!(evaluate("010\n101\n101"), Outcome::NoWinner);
    }

    #[test]
    fn test_top_row_wins_over_lower_row() {
        let board = Board::from_cells([['1', '1', '1'], ['0', '.', '1'], ['0', '0', '0']]);
        assert_eq!(board.outcome(), Outcome::Player2Wins);

        let board = Board::from_cells([['0', '0', '0'], ['1', '1', '1'], ['.', '.', '.']]);
        assert_eq!(board.outcome(), Outcome::Player1Wins);
    }

    #[test]
    fn test_rows_take_precedence_over_columns() {
        // Row 0 and column 0 are both complete.
        let board = Board::from_cells([['X', 'X', 'X'], ['X', '0', '0'], ['X', '.', '0']]);
        assert_eq!(board.outcome(), Outcome::Player2Wins);

        // Row 2 of '0' alongside column 2 of '0'.
        let board = Board::from_cells([['1', '.', '0'], ['.', '1', '0'], ['0', '0', '0']]);
        assert_eq!(board.outcome(), Outcome::Player1Wins);
    }

    #[test]
    fn test_padding_counts_as_a_mark() {
        // Three padded cells form a line, same as any non-empty mark.
        assert_eq!(evaluate(""), Outcome::Player2Wins);
        assert_eq!(evaluate("0.1\n.1."), Outcome::Player2Wins);
    }
}
