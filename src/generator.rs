use crate::code_name::{CodeName, DEFAULT_SHORT_NAME_LENGTH};
use crate::error::CodeNameResult;
use crate::shelf::WordBookShelf;
use crate::shorten::shorten;
use crate::word_book::WordBook;
use rand::Rng;
use tracing::{debug, info, warn};

pub const DEFAULT_WORD_BOOKS: &[&str] = &["colors", "fruits"];

/// One-shot code name generation session.
///
/// The generator owns the shelf it draws from; [`CodeNameGenerator::generate`]
/// consumes it, so each session produces exactly one [`CodeName`].
#[derive(Debug)]
pub struct CodeNameGenerator {
    shelf: WordBookShelf,
    code_name: CodeName,
    word_book_names: Vec<String>,
    word_books: Vec<WordBook>,
}

impl CodeNameGenerator {
    pub fn new<I, S>(shelf: WordBookShelf, short_name_length: usize, word_book_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            shelf,
            code_name: CodeName::new(short_name_length),
            word_book_names: word_book_names.into_iter().map(Into::into).collect(),
            word_books: Vec::new(),
        }
    }

    /// Generator for `colors` + `fruits` with a twelve character short name.
    pub fn with_defaults(shelf: WordBookShelf) -> Self {
        Self::new(
            shelf,
            DEFAULT_SHORT_NAME_LENGTH,
            DEFAULT_WORD_BOOKS.iter().copied(),
        )
    }

    pub fn word_book_names(&self) -> &[String] {
        &self.word_book_names
    }

    pub fn generate(self) -> CodeNameResult<CodeName> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Generate using the supplied randomness source for both word choice
    /// and shortening.
    pub fn generate_with_rng<R: Rng + ?Sized>(mut self, rng: &mut R) -> CodeNameResult<CodeName> {
        self.select_word_books();

        for book in std::mem::take(&mut self.word_books) {
            let word = book.pick(rng)?;
            debug!(word_book = %book.name(), word, "picked word");
            self.code_name.full_name.push_str(word);
            self.code_name.full_name.push(' ');
            self.code_name.original_word_books.push(book);
        }

        self.code_name.name = self.code_name.full_name.replace(' ', "");
        self.code_name.short_name = shorten(
            &self.code_name.name,
            self.code_name.short_name_length,
            rng,
        )?;

        info!(
            name = %self.code_name.name,
            short_name = %self.code_name.short_name,
            word_books = self.code_name.original_word_books.len(),
            "generated code name"
        );
        Ok(self.code_name)
    }

    /// Move each requested book off the shelf, in request order. Names the
    /// shelf does not hold (or no longer holds) contribute nothing.
    fn select_word_books(&mut self) {
        for name in &self.word_book_names {
            match self.shelf.take(name) {
                Some(book) => self.word_books.push(book),
                None => warn!(
                    word_book = %name,
                    available = ?self.shelf.names().collect::<Vec<_>>(),
                    "requested word book not on shelf, skipping"
                ),
            }
        }
    }
}
