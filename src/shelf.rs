use crate::error::{CodeNameError, CodeNameResult};
use crate::word_book::WordBook;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Pool of the word books available to one generation.
///
/// Books are keyed by name in file-name order. [`WordBookShelf::take`] removes
/// a book from the pool, so a book can be used at most once per shelf.
#[derive(Debug, Clone, Default)]
pub struct WordBookShelf {
    root: PathBuf,
    pool: IndexMap<String, WordBook>,
}

impl WordBookShelf {
    /// Load one word book per regular file directly inside `dir`.
    ///
    /// Subdirectories and dot-files are ignored.
    pub fn open(dir: impl AsRef<Path>) -> CodeNameResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(CodeNameError::ResourceNotFound {
                what: "word books directory",
                path: dir.to_path_buf(),
            });
        }

        let mut pool = IndexMap::new();
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|error| {
                let path = error
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());
                CodeNameError::from_io("word books directory entry", path, error.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                warn!(path = ?entry.path(), "skipping word source with non UTF-8 name");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            let book = WordBook::load(name, dir)?;
            pool.insert(name.to_string(), book);
        }

        info!(
            root = %dir.display(),
            word_book_count = pool.len(),
            "word book shelf loaded"
        );

        Ok(Self {
            root: dir.to_path_buf(),
            pool,
        })
    }

    /// Build a shelf from already loaded books. Later books replace earlier
    /// ones with the same name.
    pub fn from_word_books(books: impl IntoIterator<Item = WordBook>) -> Self {
        let pool = books
            .into_iter()
            .map(|book| (book.name().to_string(), book))
            .collect();
        Self {
            root: PathBuf::new(),
            pool,
        }
    }

    /// Remove the named book from the pool and hand it to the caller.
    pub fn take(&mut self, name: &str) -> Option<WordBook> {
        let taken = self.pool.shift_remove(name);
        debug!(word_book = name, found = taken.is_some(), "take word book");
        taken
    }

    pub fn get(&self, name: &str) -> Option<&WordBook> {
        self.pool.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pool.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordBook> {
        self.pool.values()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Directory the shelf was opened from; empty for in-memory shelves.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
