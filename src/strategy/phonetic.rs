//! Phonetic similarity heuristic
//!
//! Letters are grouped into coarse Russian sound classes: voiced and voiceless
//! pairs share a class, as do vowels that differ only in iotation. A word's
//! key is its sequence of classes with repeats collapsed.

use crate::core::{ALPHABET_SIZE, Board, Letter};

/// Sound class per letter, in alphabet order
///
/// 0 = silent (Ъ, Ь). Vowels 1-5, consonant groups 6 and up.
const RUSSIAN_CLASSES: [u8; ALPHABET_SIZE] = [
    1, // А
    6, // Б
    7, // В
    8, // Г
    9, // Д
    4, // Е
    2, // Ё
    10, // Ж
    11, // З
    5, // И
    5, // Й
    8, // К
    12, // Л
    13, // М
    14, // Н
    2, // О
    6, // П
    15, // Р
    11, // С
    9, // Т
    3, // У
    7, // Ф
    8, // Х
    11, // Ц
    10, // Ч
    10, // Ш
    10, // Щ
    0, // Ъ
    5, // Ы
    0, // Ь
    4, // Э
    3, // Ю
    1, // Я
];

/// Maps letters to sound classes
///
/// Swap the table to plug in a different notion of "sounds like".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticEncoder {
    classes: [u8; ALPHABET_SIZE],
}

impl Default for PhoneticEncoder {
    fn default() -> Self {
        Self::new(RUSSIAN_CLASSES)
    }
}

impl PhoneticEncoder {
    #[must_use]
    pub const fn new(classes: [u8; ALPHABET_SIZE]) -> Self {
        Self { classes }
    }

    /// Sound class of a single letter
    #[inline]
    #[must_use]
    pub const fn class(&self, letter: Letter) -> u8 {
        self.classes[letter.index()]
    }

    /// Key of a word: classes with silent letters dropped and repeats collapsed
    #[must_use]
    pub fn encode(&self, word: &[Letter]) -> Vec<u8> {
        let mut key: Vec<u8> = Vec::with_capacity(word.len());
        for &letter in word {
            let class = self.class(letter);
            if class != 0 && key.last() != Some(&class) {
                key.push(class);
            }
        }
        key
    }

    /// Whether `token` opens with the sound of `letter`
    #[must_use]
    pub fn sounds_like(&self, token: &[Letter], letter: Letter) -> bool {
        let class = self.class(letter);
        class != 0 && self.encode(token).first() == Some(&class)
    }

    /// Leading letter of the first token that sounds like `letter`
    pub fn echo<'t, I>(&self, letter: Letter, tokens: I) -> Option<Letter>
    where
        I: IntoIterator<Item = &'t Vec<Letter>>,
    {
        tokens
            .into_iter()
            .find(|token| self.sounds_like(token, letter))
            .and_then(|token| token.first().copied())
    }
}

/// Words visible on the board
///
/// Maximal runs of two or more letters, first along rows (row-major), then
/// along columns.
#[must_use]
pub fn board_tokens(board: &Board) -> Vec<Vec<Letter>> {
    let size = board.size() as i32;
    let mut tokens = Vec::new();

    let mut collect = |cells: &mut dyn Iterator<Item = Option<Letter>>| {
        let mut run: Vec<Letter> = Vec::new();
        for cell in cells.chain(std::iter::once(None)) {
            match cell {
                Some(letter) => run.push(letter),
                None => {
                    if run.len() >= 2 {
                        tokens.push(std::mem::take(&mut run));
                    } else {
                        run.clear();
                    }
                }
            }
        }
    };

    for row in 0..size {
        collect(&mut (0..size).map(|col| board.letter_at((row, col).into())));
    }
    for col in 0..size {
        collect(&mut (0..size).map(|row| board.letter_at((row, col).into())));
    }

    tokens
}
