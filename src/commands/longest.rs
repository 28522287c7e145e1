//! Longest word command
//!
//! Builds a board and reports the longest dictionary word on it.

use crate::core::{Board, GameError};
use crate::dictionary::Dictionary;
use crate::search::{WordPath, longest_word_path};

/// Board that was searched and what was found
#[derive(Debug, Clone)]
pub struct LongestResult {
    pub board: Board,
    pub path: Option<WordPath>,
}

/// Where the board comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    /// Empty `size × size` board with a centered seed word
    Seeded { size: usize, seed: String },
    /// Explicit rows, `.` for empty cells
    Rows(Vec<String>),
}

/// Search the board described by `source`
///
/// # Errors
/// Returns `GameError::InvalidConfiguration` if the board cannot be built.
pub fn find_longest(source: &BoardSource, dictionary: &Dictionary) -> Result<LongestResult, GameError> {
    let board = match source {
        BoardSource::Seeded { size, seed } => Board::new(*size, seed)?,
        BoardSource::Rows(rows) => {
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            Board::from_rows(&rows)?
        }
    };
    let path = longest_word_path(&board, dictionary);
    Ok(LongestResult { board, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_board() {
        let dict = Dictionary::from_words(["БАЛ", "БАЛДА"]);
        let source = BoardSource::Seeded {
            size: 5,
            seed: "балда".to_string(),
        };
        let result = find_longest(&source, &dict).unwrap();
        assert_eq!(result.path.unwrap().word(), "БАЛДА");
    }

    #[test]
    fn explicit_rows() {
        let dict = Dictionary::from_words(["СОК"]);
        let source = BoardSource::Rows(vec!["СО".to_string(), ".К".to_string()]);
        let result = find_longest(&source, &dict).unwrap();
        assert_eq!(result.path.unwrap().word(), "СОК");
        assert_eq!(result.board.size(), 2);
    }

    #[test]
    fn nothing_found() {
        let dict = Dictionary::from_words(["ДОМ"]);
        let source = BoardSource::Seeded {
            size: 3,
            seed: "кот".to_string(),
        };
        assert!(find_longest(&source, &dict).unwrap().path.is_none());
    }

    #[test]
    fn bad_rows_fail() {
        let dict = Dictionary::from_words(["ДОМ"]);
        let source = BoardSource::Rows(vec!["АБВ".to_string()]);
        assert!(find_longest(&source, &dict).is_err());
    }
}
