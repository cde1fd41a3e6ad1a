use crate::code_name::DEFAULT_SHORT_NAME_LENGTH;
use crate::error::CodeNameError;
use crate::generator::DEFAULT_WORD_BOOKS;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub word_books_dir: PathBuf,
    pub short_name_length: usize,
    pub word_books: Vec<String>,
    pub format: OutputFormat,
    pub seed: Option<u64>,
    pub list_word_books: bool,
}

impl GeneratorConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            word_books_dir: cli_word_books_dir,
            short_name_length: cli_short_name_length,
            word_books: cli_word_books,
            format: cli_format,
            seed,
            list_word_books,
            version: (),
        } = args;

        let config_path = config.or_else(default_config_path);
        let file_config = if let Some(path) = config_path.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            word_books_dir: file_word_books_dir,
            short_name_length: file_short_name_length,
            word_books: file_word_books,
            format: file_format,
        } = file_config;

        // Relative directories in a config file are anchored at that file.
        let file_word_books_dir = file_word_books_dir.map(|dir| {
            match config_path.as_deref().and_then(Path::parent) {
                Some(base) if dir.is_relative() => base.join(dir),
                _ => dir,
            }
        });

        let word_books_dir = cli_word_books_dir
            .or(file_word_books_dir)
            .ok_or(CodeNameError::ConfigurationMissing {
                key: "word_books_dir",
            })?;

        let short_name_length = cli_short_name_length
            .or(file_short_name_length)
            .unwrap_or(DEFAULT_SHORT_NAME_LENGTH);

        let word_books = cli_word_books
            .or(file_word_books)
            .unwrap_or_else(|| {
                DEFAULT_WORD_BOOKS
                    .iter()
                    .map(|name| (*name).to_string())
                    .collect()
            })
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        let format = cli_format.or(file_format).unwrap_or_default();

        Ok(Self {
            word_books_dir,
            short_name_length,
            word_books,
            format,
            seed,
            list_word_books,
        })
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "brass-currant",
    about = "Brass Currant code name generator",
    version,
    disable_version_flag = true
)]
pub struct CliArgs {
    #[arg(
        long,
        env = "BRASS_CURRANT_CONFIG",
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "BRASS_CURRANT_WORD_BOOKS_DIR",
        value_name = "DIR",
        help = "Directory holding the word book files"
    )]
    pub word_books_dir: Option<PathBuf>,

    #[arg(
        short = 'l',
        long,
        env = "BRASS_CURRANT_SHORT_NAME_LENGTH",
        value_name = "N",
        help = "Set length of short name (default: 12)",
        value_parser = clap::value_parser!(usize)
    )]
    pub short_name_length: Option<usize>,

    #[arg(
        short = 'w',
        long,
        env = "BRASS_CURRANT_WORD_BOOKS",
        value_name = "NAME",
        num_args = 0..,
        value_delimiter = ',',
        help = "Set word books (default: colors fruits)"
    )]
    pub word_books: Option<Vec<String>>,

    #[arg(
        long,
        env = "BRASS_CURRANT_FORMAT",
        value_enum,
        value_name = "FORMAT",
        help = "Output format (text or json)"
    )]
    pub format: Option<OutputFormat>,

    #[arg(
        long,
        env = "BRASS_CURRANT_SEED",
        value_name = "SEED",
        help = "Seed the random source for a reproducible code name"
    )]
    pub seed: Option<u64>,

    #[arg(long, help = "List the available word books and exit")]
    pub list_word_books: bool,

    #[arg(short = 'v', long, action = ArgAction::Version, help = "Print version")]
    pub version: (),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    word_books_dir: Option<PathBuf>,
    short_name_length: Option<usize>,
    word_books: Option<Vec<String>>,
    format: Option<OutputFormat>,
}

/// `config.yaml` shipped next to the crate manifest, when it is still there.
fn default_config_path() -> Option<PathBuf> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_FILE);
    path.is_file().then_some(path)
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        return Err(CodeNameError::ResourceNotFound {
            what: "config file",
            path: path.to_path_buf(),
        }
        .into());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
