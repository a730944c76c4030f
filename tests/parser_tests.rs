use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use xmlstructdiff::{parse_file, read_source, ParseError};

#[test]
fn test_parse_simple_file() {
    let forest = parse_file(Path::new("tests/fixtures/simple.xml")).unwrap();
    assert_eq!(forest.len(), 1);
    let root = &forest[0];
    assert_eq!(root.tag, "root");
    assert_eq!(root.start_line, 1);
    assert_eq!(root.end_line, 3);
    assert_eq!(root.opening_tag, "<root>");
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].tag, "child");
}

#[test]
fn test_parse_person_lines() {
    let forest = parse_file(Path::new("tests/fixtures/person2.xml")).unwrap();
    let person = &forest[0].children[0];
    assert_eq!(person.start_line, 2);
    assert_eq!(person.end_line, 8);
    let detail = &person.children[2];
    assert_eq!(detail.tag, "detail");
    assert_eq!(detail.start_line, 5);
    assert_eq!(detail.end_line, 7);
    assert_eq!(detail.children[0].start_line, 6);
}

#[test]
fn test_reparse_is_identical() {
    let path = Path::new("tests/fixtures/library.xml");
    assert_eq!(parse_file(path).unwrap(), parse_file(path).unwrap());
}

#[test]
fn test_parse_gzipped_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("simple.xml.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&fs::read("tests/fixtures/simple.xml").unwrap())
        .unwrap();
    fs::write(&path, encoder.finish().unwrap()).unwrap();

    assert_eq!(
        read_source(&path).unwrap(),
        fs::read("tests/fixtures/simple.xml").unwrap()
    );
    let plain = parse_file(Path::new("tests/fixtures/simple.xml")).unwrap();
    assert_eq!(parse_file(&path).unwrap(), plain);
}

#[test]
fn test_parse_malformed_file() {
    match parse_file(Path::new("tests/fixtures/malformed.xml")).unwrap_err() {
        ParseError::XmlError { path, .. } => assert_eq!(path, "tests/fixtures/malformed.xml"),
        other => panic!("Expected XmlError, got {:?}", other),
    }
}

#[test]
fn test_parse_missing_file() {
    match parse_file(Path::new("/nonexistent/file.xml")).unwrap_err() {
        ParseError::FileNotFound { .. } => {}
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
}
