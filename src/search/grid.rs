//! Depth-first word discovery on the grid
//!
//! Walks simple paths over orthogonally adjacent letters, descending the trie
//! in lock-step so that a branch dies as soon as its string stops being a
//! dictionary prefix.

use super::path::{WordPath, path_score};
use crate::core::{Board, Letter, Position};
use crate::dictionary::{Dictionary, NodeId, Trie};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// What the search ranks paths by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    /// Complete words only, ranked by length
    LongestWord,
    /// Every prefix path, ranked by [`path_score`]
    BestScore,
}

struct Search<'a> {
    board: &'a Board,
    trie: &'a Trie,
    goal: Goal,
    through: Option<usize>,
    exclude: Option<&'a FxHashSet<String>>,
    visited: Vec<bool>,
    path: Vec<Position>,
    text: String,
    best: Option<(usize, WordPath)>,
}

impl<'a> Search<'a> {
    fn new(board: &'a Board, dictionary: &'a Dictionary, goal: Goal) -> Self {
        let size = board.size();
        Self {
            board,
            trie: dictionary.trie(),
            goal,
            through: None,
            exclude: None,
            visited: vec![false; size * size],
            path: Vec::with_capacity(size * size),
            text: String::new(),
            best: None,
        }
    }

    #[inline]
    fn slot(&self, pos: Position) -> usize {
        pos.row as usize * self.board.size() + pos.col as usize
    }

    fn run(mut self, starts: &[Position]) -> Option<WordPath> {
        let root = self.trie.root();
        for &start in starts {
            let Some(letter) = self.board.letter_at(start) else {
                continue;
            };
            if let Some(node) = self.trie.child(root, letter) {
                self.visit(start, letter, node);
            }
        }
        self.best.map(|(_, path)| path)
    }

    fn visit(&mut self, pos: Position, letter: Letter, node: NodeId) {
        let slot = self.slot(pos);
        self.visited[slot] = true;
        self.path.push(pos);
        self.text.push(letter.to_char());

        self.consider(node);

        for next in pos.neighbors() {
            let Some(next_letter) = self.board.letter_at(next) else {
                continue;
            };
            if self.visited[self.slot(next)] {
                continue;
            }
            // prune: extended string must stay a dictionary prefix
            if let Some(child) = self.trie.child(node, next_letter) {
                self.visit(next, next_letter, child);
            }
        }

        self.text.pop();
        self.path.pop();
        self.visited[slot] = false;
    }

    fn consider(&mut self, node: NodeId) {
        if let Some(required) = self.through {
            if !self.visited[required] {
                return;
            }
        }

        let excluded = self
            .exclude
            .is_some_and(|claimed| claimed.contains(&self.text));
        let terminal = self.trie.is_word(node) && !excluded;

        let rank = match self.goal {
            Goal::LongestWord if !terminal => return,
            Goal::LongestWord => self.path.len(),
            Goal::BestScore => path_score(self.path.len(), terminal),
        };

        if self.best.as_ref().is_none_or(|(best, _)| rank > *best) {
            let found = WordPath::new(self.path.clone(), self.text.clone(), terminal);
            self.best = Some((rank, found));
        }
    }
}

/// Occupied cells reachable from `origin`, in row-major order
fn component(board: &Board, origin: Position) -> Vec<Position> {
    let size = board.size();
    let slot = |p: Position| p.row as usize * size + p.col as usize;
    let mut seen = vec![false; size * size];
    let mut queue = VecDeque::from([origin]);
    seen[slot(origin)] = true;

    while let Some(pos) = queue.pop_front() {
        for next in pos.neighbors() {
            if board.letter_at(next).is_some() && !seen[slot(next)] {
                seen[slot(next)] = true;
                queue.push_back(next);
            }
        }
    }

    board.positions().filter(|&p| seen[slot(p)]).collect()
}

fn search_through(
    board: &Board,
    dictionary: &Dictionary,
    cell: Position,
    goal: Goal,
    exclude: Option<&FxHashSet<String>>,
) -> Option<WordPath> {
    board.letter_at(cell)?;
    let starts = component(board, cell);
    let mut search = Search::new(board, dictionary, goal);
    search.through = Some(search.slot(cell));
    search.exclude = exclude;
    search.run(&starts)
}

/// Longest dictionary word spelled by a simple path on the board
///
/// Paths move between orthogonally adjacent occupied cells and never revisit
/// a cell. Among equally long words the first one found wins, scanning start
/// cells row-major and neighbours up, down, right, left.
#[must_use]
pub fn longest_word_path(board: &Board, dictionary: &Dictionary) -> Option<WordPath> {
    let starts: Vec<Position> = board.positions().collect();
    Search::new(board, dictionary, Goal::LongestWord).run(&starts)
}

/// Positions of [`longest_word_path`], empty when no word exists
///
/// # Examples
/// ```
/// use balda::core::{Board, Position};
/// use balda::dictionary::Dictionary;
/// use balda::search::longest_word;
///
/// let dict = Dictionary::from_words(["кот", "ток"]);
/// let board = Board::new(3, "кот").unwrap();
/// let path = longest_word(&board, &dict);
/// assert_eq!(path, vec![Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]);
/// ```
#[must_use]
pub fn longest_word(board: &Board, dictionary: &Dictionary) -> Vec<Position> {
    longest_word_path(board, dictionary).map_or_else(Vec::new, WordPath::into_positions)
}

/// Longest word whose path passes through `cell`, skipping `exclude`d words
///
/// Returns `None` if `cell` is empty or no qualifying word exists.
#[must_use]
pub fn longest_word_through(
    board: &Board,
    dictionary: &Dictionary,
    cell: Position,
    exclude: &FxHashSet<String>,
) -> Option<WordPath> {
    search_through(board, dictionary, cell, Goal::LongestWord, Some(exclude))
}

/// Highest-scoring prefix path through `cell`
///
/// Every path whose string is a dictionary prefix is a candidate; complete
/// words earn the terminal bonus. This is the evaluation the bots use.
#[must_use]
pub fn best_path_through(
    board: &Board,
    dictionary: &Dictionary,
    cell: Position,
) -> Option<WordPath> {
    search_through(board, dictionary, cell, Goal::BestScore, None)
}

/// Score of [`best_path_through`], zero when nothing qualifies
#[must_use]
pub fn placement_score(board: &Board, dictionary: &Dictionary, cell: Position) -> usize {
    best_path_through(board, dictionary, cell).map_or(0, |path| path.score())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Dictionary {
        Dictionary::from_words(list)
    }

    fn grid(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn finds_straight_word() {
        let dict = words(&["КОТ"]);
        let board = grid(&["...", "КОТ", "..."]);
        assert_eq!(longest_word(&board, &dict), vec![p(1, 0), p(1, 1), p(1, 2)]);
    }

    #[test]
    fn finds_word_around_corner() {
        // С О
        // . К
        let dict = words(&["СОК"]);
        let board = grid(&["СО", ".К"]);
        let path = longest_word_path(&board, &dict).unwrap();
        assert_eq!(path.word(), "СОК");
        assert_eq!(path.positions(), &[p(0, 0), p(0, 1), p(1, 1)]);
    }

    #[test]
    fn prefers_longer_word() {
        let dict = words(&["БАЛ", "БАЛДА"]);
        let board = grid(&[".....", ".....", "БАЛДА", ".....", "....."]);
        assert_eq!(longest_word_path(&board, &dict).unwrap().word(), "БАЛДА");
    }

    #[test]
    fn no_word_gives_empty_path() {
        let dict = words(&["ДОМ"]);
        let board = grid(&["...", "КОТ", "..."]);
        assert!(longest_word(&board, &dict).is_empty());
        assert!(longest_word(&Board::new(3, "").unwrap(), &dict).is_empty());
    }

    #[test]
    fn cells_are_not_reused() {
        // "ТОТ" would need the single Т twice
        let dict = words(&["ТОТ"]);
        let board = grid(&["ТО", ".."]);
        assert!(longest_word(&board, &dict).is_empty());
    }

    #[test]
    fn diagonal_steps_not_allowed() {
        let dict = words(&["КОТ"]);
        let board = grid(&["К..", ".О.", "..Т"]);
        assert!(longest_word(&board, &dict).is_empty());
    }

    #[test]
    fn ties_keep_first_in_scan_order() {
        // КОТ in row 0 and ТОК read right-to-left in row 2, same length
        let dict = words(&["КОТ", "ТОК"]);
        let board = grid(&["КОТ", "...", "КОТ"]);
        let path = longest_word_path(&board, &dict).unwrap();
        assert_eq!(path.word(), "КОТ");
        assert_eq!(path.positions()[0], p(0, 0));
    }

    #[test]
    fn reversed_reading_is_found() {
        let dict = words(&["ТОК"]);
        let board = grid(&["...", "КОТ", "..."]);
        assert_eq!(longest_word(&board, &dict), vec![p(1, 2), p(1, 1), p(1, 0)]);
    }

    #[test]
    fn through_requires_the_cell() {
        let dict = words(&["КОТ", "ДОМ"]);
        //  . Д .
        //  К О Т
        //  . М .
        let board = grid(&[".Д.", "КОТ", ".М."]);
        let none = FxHashSet::default();

        let through_top = longest_word_through(&board, &dict, p(0, 1), &none).unwrap();
        assert_eq!(through_top.word(), "ДОМ");

        let through_left = longest_word_through(&board, &dict, p(1, 0), &none).unwrap();
        assert_eq!(through_left.word(), "КОТ");

        assert!(longest_word_through(&board, &dict, p(0, 0), &none).is_none());
    }

    #[test]
    fn through_skips_claimed_words() {
        let dict = words(&["КОТ", "КОД"]);
        let board = grid(&["..Д", "КОТ", "..."]);
        let mut claimed = FxHashSet::default();

        let first = longest_word_through(&board, &dict, p(1, 1), &claimed).unwrap();
        assert_eq!(first.word(), "КОТ");

        claimed.insert("КОТ".to_string());
        let second = longest_word_through(&board, &dict, p(1, 1), &claimed);
        assert!(second.is_none(), "КОД needs Д next to О");

        let board = grid(&[".Д.", "КОТ", "..."]);
        let second = longest_word_through(&board, &dict, p(1, 1), &claimed).unwrap();
        assert_eq!(second.word(), "КОД");
    }

    #[test]
    fn best_path_ranks_prefixes_below_words() {
        let dict = words(&["КОТ", "КОРОВА"]);
        // К О Р
        // . Т .
        let board = grid(&["КОР", ".Т.", "..."]);
        let best = best_path_through(&board, &dict, p(0, 1)).unwrap();
        // КОТ scores 9, КОР (prefix of КОРОВА) scores 3
        assert_eq!(best.word(), "КОТ");
        assert!(best.is_word());
        assert_eq!(best.score(), 9);
    }

    #[test]
    fn best_path_falls_back_to_prefix() {
        let dict = words(&["КОРОВА"]);
        let board = grid(&["КОР", "...", "..."]);
        let best = best_path_through(&board, &dict, p(0, 2)).unwrap();
        assert_eq!(best.word(), "КОР");
        assert!(!best.is_word());
        assert_eq!(placement_score(&board, &dict, p(0, 2)), 3);
    }

    #[test]
    fn placement_score_zero_for_isolated_cells() {
        let dict = words(&["КОТ"]);
        let board = grid(&["Я..", "...", "..."]);
        assert_eq!(placement_score(&board, &dict, p(0, 0)), 0);
        assert_eq!(placement_score(&board, &dict, p(2, 2)), 0);
    }

    #[test]
    fn component_limits_starts() {
        let board = grid(&["К.Т", "О..", "..."]);
        assert_eq!(component(&board, p(0, 0)), vec![p(0, 0), p(1, 0)]);
        assert_eq!(component(&board, p(0, 2)), vec![p(0, 2)]);
    }
}
