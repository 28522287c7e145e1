//! Dictionary loading utilities
//!
//! Builds dictionaries from files, readers, or embedded constants. The source
//! is one word per line.

use super::Dictionary;
use crate::core::GameError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a dictionary from a word-per-line file
///
/// # Errors
///
/// Returns `GameError::DictionaryLoadFailure` if the file cannot be opened or
/// read, or if it contains no usable word.
///
/// # Examples
/// ```no_run
/// use balda::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, GameError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        GameError::DictionaryLoadFailure(format!("cannot open {}: {e}", path.display()))
    })?;

    let dictionary = load_from_reader(BufReader::new(file))?;
    log::info!(
        "loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Load a dictionary from any line source
///
/// # Errors
///
/// Returns `GameError::DictionaryLoadFailure` if reading a line fails or the
/// source yields no usable word.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Dictionary, GameError> {
    let lines = reader
        .lines()
        .collect::<Result<Vec<String>, _>>()
        .map_err(|e| GameError::DictionaryLoadFailure(e.to_string()))?;

    let dictionary = Dictionary::from_words(&lines);
    if dictionary.is_empty() {
        return Err(GameError::DictionaryLoadFailure(format!(
            "no usable words among {} lines",
            lines.len()
        )));
    }
    Ok(dictionary)
}

/// Build a dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use balda::dictionary::loader::from_slice;
///
/// let dict = from_slice(&["кот", "код"]);
/// assert_eq!(dict.len(), 2);
/// ```
#[must_use]
pub fn from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn reader_lines_become_words() {
        let source = Cursor::new("кот\nкод\n\n  гора  \n");
        let dict = load_from_reader(source).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("ГОРА"));
    }

    #[test]
    fn reader_without_words_fails() {
        let source = Cursor::new("\n\nhello\n");
        assert!(matches!(
            load_from_reader(source),
            Err(GameError::DictionaryLoadFailure(_))
        ));
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk unplugged"))
        }
    }

    #[test]
    fn reader_failure_is_surfaced() {
        let result = load_from_reader(BufReader::new(BrokenReader));
        match result {
            Err(GameError::DictionaryLoadFailure(reason)) => {
                assert!(reason.contains("disk unplugged"));
            }
            other => panic!("expected load failure, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_fails() {
        let result = load_from_file("/definitely/not/here/dictionary.txt");
        assert!(matches!(result, Err(GameError::DictionaryLoadFailure(_))));
    }

    #[test]
    fn from_slice_skips_invalid() {
        let dict = from_slice(&["кот", "cat", "до-ма", "дом"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.skipped(), 2);
    }
}
