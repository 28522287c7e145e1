//! Russian alphabet letters
//!
//! A `Letter` is an index into the fixed 33-letter alphabet. Keeping letters as
//! small integers lets trie nodes index their children directly.

use std::fmt;

/// Number of letters in the alphabet (А..Я including Ё)
pub const ALPHABET_SIZE: usize = 33;

/// Uppercase alphabet in dictionary order
const LETTERS: [char; ALPHABET_SIZE] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// A single letter of the alphabet
///
/// Stores the alphabet offset (0-32). Ordering follows the alphabet, so
/// iterating letters in ascending order matches dictionary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from its alphabet offset
    ///
    /// Returns `None` if `index >= ALPHABET_SIZE`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Convert a character to a letter
    ///
    /// Accepts upper- and lowercase Cyrillic. Anything outside the alphabet
    /// yields `None`.
    ///
    /// # Examples
    /// ```
    /// use balda::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('ё'), Letter::from_char('Ё'));
    /// assert_eq!(Letter::from_char('Я').map(Letter::index), Some(32));
    /// assert!(Letter::from_char('Z').is_none());
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let upper = match c {
            'а'..='я' => char::from_u32(c as u32 - 0x20)?,
            'ё' => 'Ё',
            other => other,
        };
        match upper {
            'Ё' => Some(Self(6)),
            'А'..='Е' => Some(Self((upper as u32 - 'А' as u32) as u8)),
            'Ж'..='Я' => Some(Self((upper as u32 - 'А' as u32 + 1) as u8)),
            _ => None,
        }
    }

    /// Alphabet offset of this letter (0-32)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        LETTERS[self.0 as usize]
    }

    /// All letters in alphabet order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_SIZE as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Convert a whole word into letters
///
/// Returns `None` if any symbol falls outside the alphabet.
#[must_use]
pub fn encode(word: &str) -> Option<Vec<Letter>> {
    word.chars().map(Letter::from_char).collect()
}

/// Render letters back into an uppercase string
#[must_use]
pub fn decode(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.to_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_round_trips_through_char() {
        for letter in Letter::all() {
            assert_eq!(Letter::from_char(letter.to_char()), Some(letter));
        }
        assert_eq!(Letter::all().count(), ALPHABET_SIZE);
    }

    #[test]
    fn yo_sits_between_ye_and_zhe() {
        let ye = Letter::from_char('Е').unwrap();
        let yo = Letter::from_char('Ё').unwrap();
        let zhe = Letter::from_char('Ж').unwrap();
        assert_eq!(ye.index() + 1, yo.index());
        assert_eq!(yo.index() + 1, zhe.index());
    }

    #[test]
    fn lowercase_is_normalized() {
        assert_eq!(Letter::from_char('а'), Letter::from_char('А'));
        assert_eq!(Letter::from_char('я'), Letter::from_char('Я'));
        assert_eq!(Letter::from_char('ж'), Letter::from_char('Ж'));
    }

    #[test]
    fn foreign_symbols_rejected() {
        assert!(Letter::from_char('A').is_none()); // Latin A
        assert!(Letter::from_char('1').is_none());
        assert!(Letter::from_char(' ').is_none());
        assert!(Letter::from_char('-').is_none());
    }

    #[test]
    fn encode_whole_word() {
        let letters = encode("гора").unwrap();
        assert_eq!(decode(&letters), "ГОРА");
        assert!(encode("го-ра").is_none());
        assert_eq!(encode(""), Some(vec![]));
    }

    #[test]
    fn from_index_bounds() {
        assert!(Letter::from_index(0).is_some());
        assert!(Letter::from_index(ALPHABET_SIZE - 1).is_some());
        assert!(Letter::from_index(ALPHABET_SIZE).is_none());
    }
}
