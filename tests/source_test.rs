//! Tests for the JSON token source and file-level convenience API.

use std::io::Write;

use reflow::{extract_text, process_file, Error, JsonTokenSource, TokenSource};

const SAMPLE: &str = r#"[
  [
    {"text": "Hello", "left": 0.0, "right": 30.0, "top": 0.0, "bottom": 10.0},
    {"text": "world.", "left": 32.0, "right": 62.0, "top": 0.0, "bottom": 10.0}
  ],
  []
]"#;

#[test]
fn json_source_loads_pages_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let mut source = JsonTokenSource::open(file.path()).unwrap();
    assert_eq!(source.page_count(), 2);

    let tokens = source.extract_tokens(0).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "Hello");
    assert!(source.extract_tokens(1).unwrap().is_empty());
}

#[test]
fn process_file_assembles_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let doc = process_file(file.path()).unwrap();
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.token_count(), 2);
    assert_eq!(doc.pages[0].paragraphs[0].text(), "Hello world.");
}

#[test]
fn extract_text_renders_with_markers() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let text = extract_text(file.path()).unwrap();
    assert!(text.contains("==<Page:1>=="));
    assert!(text.contains("Hello world."));
    assert!(text.contains("==<Page:2>=="));
}

#[test]
fn malformed_token_file_is_source_unavailable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json at all").unwrap();

    let result = process_file(file.path());
    assert!(matches!(result, Err(Error::SourceUnavailable(_))));
}

#[test]
fn missing_file_is_source_unavailable() {
    let result = process_file("does/not/exist.tokens.json");
    assert!(matches!(result, Err(Error::SourceUnavailable(_))));
}
