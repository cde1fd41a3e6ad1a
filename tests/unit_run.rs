mod support;

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use brass_currant::{CodeNameError, GeneratorConfig, OutputFormat, run_with_writer};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run with a JSON subscriber scoped to this thread and return the error and
/// the captured log lines.
fn run_expecting_failure(config: &GeneratorConfig) -> (anyhow::Error, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(logs.clone())
        .finish();
    let err = tracing::subscriber::with_default(subscriber, || {
        run_with_writer(config, &mut Vec::new()).expect_err("run fails")
    });
    (err, logs.contents())
}

fn config(word_books_dir: PathBuf) -> GeneratorConfig {
    GeneratorConfig {
        word_books_dir,
        short_name_length: 12,
        word_books: vec!["colors".to_string(), "fruits".to_string()],
        format: OutputFormat::Text,
        seed: Some(0),
        list_word_books: false,
    }
}

fn run_to_string(config: &GeneratorConfig) -> String {
    let mut out = Vec::new();
    run_with_writer(config, &mut out).expect("run");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn prints_the_code_name_line() {
    let dir = support::brass_currant_dir();
    let output = run_to_string(&config(dir.path().to_path_buf()));
    assert_eq!(
        output,
        "Full name: Brass Currant , Name: BrassCurrant, Short name: BrassCurrant\n"
    );
}

#[test]
fn prints_json_when_asked() {
    let dir = support::brass_currant_dir();
    let mut config = config(dir.path().to_path_buf());
    config.format = OutputFormat::Json;
    config.short_name_length = 9;

    let output = run_to_string(&config);
    let value: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(value["name"], "BrassCurrant");
    assert_eq!(value["short_name"], "BrssCrrnt");
    assert_eq!(value["original_word_books"], serde_json::json!(["colors", "fruits"]));
}

#[test]
fn lists_word_books_with_counts() {
    let dir = support::word_books_dir(&[("fruits", "fig\nkiwi\n"), ("colors", "teal\n")]);
    let mut config = config(dir.path().to_path_buf());
    config.list_word_books = true;

    assert_eq!(run_to_string(&config), "colors\t1\nfruits\t2\n");
}

#[test]
fn missing_word_books_dir_fails() {
    let dir = support::word_books_dir(&[]);
    let config = config(dir.path().join("gone"));
    let err = run_with_writer(&config, &mut Vec::new()).expect_err("missing dir");
    assert_matches!(
        err.downcast_ref::<CodeNameError>(),
        Some(CodeNameError::ResourceNotFound { .. })
    );
}

#[test]
fn seeded_runs_repeat() {
    let mut config = config(support::shipped_word_books_dir());
    config.seed = Some(2015);
    assert_eq!(run_to_string(&config), run_to_string(&config));
}

#[test]
fn missing_word_books_dir_logs_error_category() {
    let dir = support::word_books_dir(&[]);
    let config = config(dir.path().join("gone"));

    let (err, logs) = run_expecting_failure(&config);
    assert!(err.downcast_ref::<CodeNameError>().is_some());
    assert!(logs.contains(r#""error_category":"resource_not_found""#), "{logs}");
    assert!(logs.contains("code name generation failed"), "{logs}");
}

#[test]
fn empty_composition_logs_error_category() {
    let dir = support::brass_currant_dir();
    let mut config = config(dir.path().to_path_buf());
    config.word_books = vec!["nonexistent".to_string()];

    let (err, logs) = run_expecting_failure(&config);
    let category = err
        .downcast_ref::<CodeNameError>()
        .map(CodeNameError::category);
    assert_eq!(category, Some("empty_input"));
    assert!(logs.contains(r#""error_category":"empty_input""#), "{logs}");
}
