//! Read-only dictionary shared by every player

use super::embedded::WORDS;
use super::loader::from_slice;
use super::trie::{PrefixNodes, Trie};
use crate::core::{Letter, alphabet};

/// Immutable word set backed by a [`Trie`]
///
/// Built once, then only queried. Share it by reference across players and
/// worker threads.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: Trie,
    letters: Vec<Letter>,
    skipped: usize,
}

impl Dictionary {
    /// Build a dictionary from raw words
    ///
    /// Each word is trimmed and uppercased. Blank entries are dropped, and
    /// entries with symbols outside the alphabet are counted as skipped.
    ///
    /// # Examples
    /// ```
    /// use balda::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["  кот ", "КОД", "", "cat"]);
    /// assert_eq!(dict.len(), 2);
    /// assert_eq!(dict.skipped(), 1);
    /// assert!(dict.contains("КОТ"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        let mut skipped = 0;

        for raw in words {
            let word = raw.as_ref().trim().to_uppercase();
            if word.is_empty() {
                continue;
            }
            match alphabet::encode(&word) {
                Some(letters) => {
                    trie.insert_letters(&letters);
                }
                None => {
                    log::trace!("skipping '{word}': outside the alphabet");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            log::debug!("skipped {skipped} words with symbols outside the alphabet");
        }

        let letters = trie.root_letters();
        Self {
            trie,
            letters,
            skipped,
        }
    }

    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        from_slice(WORDS)
    }

    /// Whether `word` is a complete dictionary word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Whether some dictionary word starts with `prefix`
    #[inline]
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.trie.has_prefix(prefix)
    }

    /// See [`Trie::prefix_nodes`]
    #[inline]
    #[must_use]
    pub fn prefix_nodes<'w>(&self, word: &'w str) -> PrefixNodes<'_, 'w> {
        self.trie.prefix_nodes(word)
    }

    /// Underlying trie, for node-level traversal
    #[inline]
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Allowed alphabet: letters that begin at least one word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Whether `letter` belongs to the allowed alphabet
    #[must_use]
    pub fn allows(&self, letter: Letter) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.trie.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Entries rejected during construction
    #[inline]
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let dict = Dictionary::from_words(["\tгора\n", "Лес"]);
        assert!(dict.contains("ГОРА"));
        assert!(dict.contains("ЛЕС"));
        assert!(dict.contains("лес"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn duplicate_words_counted_once() {
        let dict = Dictionary::from_words(["сова", "СОВА", "сова "]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn allowed_letters_come_from_root() {
        let dict = Dictionary::from_words(["КОТ", "ДОМ", "АД"]);
        let letters: String = dict.letters().iter().map(|l| l.to_char()).collect();
        assert_eq!(letters, "АДК");
        assert!(dict.allows(Letter::from_char('Д').unwrap()));
        assert!(!dict.allows(Letter::from_char('О').unwrap()));
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::from_words(Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(dict.letters().is_empty());
        assert!(!dict.contains("КОТ"));
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dict = Dictionary::embedded();
        assert!(dict.len() > 200);
        assert_eq!(dict.skipped(), 0);
        for word in ["БАЛДА", "ГОРА", "КОТ", "КОД", "ЛЁД"] {
            assert!(dict.contains(word), "missing {word}");
        }
    }
}
