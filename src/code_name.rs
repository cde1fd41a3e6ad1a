use crate::word_book::WordBook;
use serde::{Serialize, Serializer};
use std::fmt;

pub const DEFAULT_SHORT_NAME_LENGTH: usize = 12;

/// Result of one generation.
///
/// `full_name` keeps a space after every word ("Brass Currant "), `name` is
/// the same words run together ("BrassCurrant") and `short_name` is `name`
/// shortened or stretched to `short_name_length` characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeName {
    pub name: String,
    pub full_name: String,
    pub short_name: String,
    #[serde(serialize_with = "serialize_word_book_names")]
    pub original_word_books: Vec<WordBook>,
    pub short_name_length: usize,
}

impl CodeName {
    pub fn new(short_name_length: usize) -> Self {
        Self {
            name: String::new(),
            full_name: String::new(),
            short_name: String::new(),
            original_word_books: Vec::new(),
            short_name_length,
        }
    }

    pub fn word_book_names(&self) -> impl Iterator<Item = &str> {
        self.original_word_books.iter().map(WordBook::name)
    }
}

impl Default for CodeName {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_NAME_LENGTH)
    }
}

impl fmt::Display for CodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Full name: {}, Name: {}, Short name: {}",
            self.full_name, self.name, self.short_name
        )
    }
}

fn serialize_word_book_names<S: Serializer>(
    books: &[WordBook],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(books.iter().map(WordBook::name))
}
