use crate::error::{CodeNameError, CodeNameResult};
use rand::Rng;
use rand::seq::SliceRandom;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A named list of candidate words, one per line of its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBook {
    name: String,
    words: Vec<String>,
}

impl WordBook {
    /// Load the word source `dir/name`, normalizing every line.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    pub fn load(name: impl Into<String>, dir: &Path) -> CodeNameResult<Self> {
        let name = name.into();
        let path = dir.join(&name);
        let bytes = fs::read(&path)
            .map_err(|source| CodeNameError::from_io("word source", &path, source))?;
        let contents = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = contents {
            warn!(word_book = %name, path = ?path, "word source is not valid UTF-8, replaced invalid bytes");
        }
        let book = Self::from_lines(name, contents.lines());
        debug!(word_book = %book.name, words = book.words.len(), path = ?path, "loaded word book");
        Ok(book)
    }

    /// Build a word book from in-memory lines. Lines that normalize to
    /// nothing are dropped so that every word is non-empty.
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| normalize_word(line.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            name: name.into(),
            words,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Choose one word uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> CodeNameResult<&str> {
        self.words
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| CodeNameError::EmptyCollection {
                word_book: self.name.clone(),
            })
    }
}

/// Normalize one source line into a single title-cased token.
///
/// Hyphens are removed, every whitespace-delimited token gets an uppercase
/// first character with the rest lowercased, and the tokens are joined with
/// no separator: `" navy-blue  sky "` becomes `"NavyblueSky"`.
pub fn normalize_word(line: &str) -> String {
    line.trim()
        .replace('-', "")
        .split_whitespace()
        .map(title_case_token)
        .collect()
}

fn title_case_token(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_word_title_cases_and_joins() {
        assert_eq!(normalize_word("brass"), "Brass");
        assert_eq!(normalize_word("  BLOOD orange \n"), "BloodOrange");
        assert_eq!(normalize_word("navy-blue"), "Navyblue");
        assert_eq!(normalize_word("jack - fruit"), "JackFruit");
        assert_eq!(normalize_word("   "), "");
        assert_eq!(normalize_word("--"), "");
    }

    #[test]
    fn from_lines_skips_lines_that_normalize_to_nothing() {
        let book = WordBook::from_lines("fruits", ["apple", "", "  ", "-", "apple"]);
        assert_eq!(book.name(), "fruits");
        assert_eq!(book.words(), ["Apple", "Apple"]);
    }
}
