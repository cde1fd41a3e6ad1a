pub mod code_name;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod shelf;
pub mod shorten;
pub mod word_book;

pub use code_name::{CodeName, DEFAULT_SHORT_NAME_LENGTH};
pub use config::{CliArgs, GeneratorConfig, OutputFormat};
pub use error::{CodeNameError, CodeNameResult};
pub use generator::{CodeNameGenerator, DEFAULT_WORD_BOOKS};
pub use logging::{LoggingConfig, init_logging};
pub use shelf::WordBookShelf;
pub use shorten::shorten;
pub use word_book::{WordBook, normalize_word};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

pub fn run(config: GeneratorConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(&config, &mut out)
}

/// Open the configured shelf and write either the shelf listing or one
/// generated code name to `out`.
pub fn run_with_writer<W: Write>(config: &GeneratorConfig, out: &mut W) -> Result<()> {
    tracing::info!(
        word_books_dir = %config.word_books_dir.display(),
        word_books = ?config.word_books,
        short_name_length = config.short_name_length,
        seeded = config.seed.is_some(),
        "starting code name generation",
    );

    let shelf = WordBookShelf::open(&config.word_books_dir).inspect_err(log_failure)?;

    if config.list_word_books {
        writeln!(out, "{}", render_shelf(&shelf, config.format)?)?;
        return Ok(());
    }

    let generator = CodeNameGenerator::new(
        shelf,
        config.short_name_length,
        config.word_books.iter().cloned(),
    );
    let code_name = match config.seed {
        Some(seed) => generator.generate_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => generator.generate(),
    }
    .inspect_err(log_failure)?;

    writeln!(out, "{}", render(&code_name, config.format)?)?;
    Ok(())
}

fn log_failure(error: &CodeNameError) {
    tracing::error!(error_category = error.category(), %error, "code name generation failed");
}

pub fn render(code_name: &CodeName, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(code_name.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(code_name).context("failed to serialize code name")
        }
    }
}

pub fn render_shelf(shelf: &WordBookShelf, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(shelf
            .iter()
            .map(|book| format!("{}\t{}", book.name(), book.len()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let listing = shelf
                .iter()
                .map(|book| serde_json::json!({ "name": book.name(), "words": book.len() }))
                .collect::<Vec<_>>();
            serde_json::to_string_pretty(&listing).context("failed to serialize word book listing")
        }
    }
}
