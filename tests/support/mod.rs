#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use brass_currant::{WordBook, WordBookShelf};
use tempfile::{TempDir, tempdir};

/// Write one word source file per `(name, contents)` pair into a fresh
/// directory. The directory lives as long as the returned guard.
pub fn word_books_dir(books: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().expect("tempdir");
    for (name, contents) in books {
        fs::write(dir.path().join(name), contents).expect("write word source");
    }
    dir
}

/// `colors = [Brass]`, `fruits = [Currant]`.
pub fn brass_currant_dir() -> TempDir {
    word_books_dir(&[("colors", "brass\n"), ("fruits", "currant\n")])
}

pub fn brass_currant_shelf() -> WordBookShelf {
    WordBookShelf::from_word_books([
        WordBook::from_lines("colors", ["brass"]),
        WordBook::from_lines("fruits", ["currant"]),
    ])
}

/// The word books shipped with the crate.
pub fn shipped_word_books_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("word_books")
}
