//! Filesystem query tests against temporary files

use std::fs;
use std::io::Write;

use prim_error::{codes, Result};
use prim_fs::{exists, fsize, is_dir, is_file, read_lines};
use tempfile::{tempdir, NamedTempFile};

const CONTENTS: &str = "hello\nworld";
const GIBBERISH: &str = "@4*!~%#&";

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CONTENTS.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_exists() {
    let file = sample_file();
    assert!(exists("."));
    assert!(!exists(GIBBERISH));
    assert!(exists(file.path()));
}

#[test]
fn test_fsize() -> Result<()> {
    let file = sample_file();
    assert_eq!(fsize(file.path())?, CONTENTS.len() as u64);

    let err = fsize(GIBBERISH).unwrap_err();
    assert_eq!(err.code, codes::PATH_NOT_FOUND);
    Ok(())
}

#[test]
fn test_fsize_rejects_directory() {
    let dir = tempdir().unwrap();
    let err = fsize(dir.path()).unwrap_err();
    assert_eq!(err.code, codes::IS_A_DIRECTORY);
}

#[test]
fn test_is_dir_and_is_file() {
    let file = sample_file();
    assert!(is_dir("."));
    assert!(!is_dir(GIBBERISH));
    assert!(!is_dir(file.path()));
    assert!(is_file(file.path()));
    assert!(!is_file(GIBBERISH));
}

#[test]
fn test_read_lines() -> Result<()> {
    let file = sample_file();
    let lines = read_lines(file.path())?;
    assert_eq!(lines, ["hello", "world"]);
    Ok(())
}

#[test]
fn test_read_lines_terminators() -> Result<()> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("crlf.txt");
    fs::write(&path, "a\r\nb\n\nc\n").unwrap();

    assert_eq!(read_lines(&path)?, ["a", "b", "", "c"]);
    Ok(())
}

#[test]
fn test_read_lines_errors() {
    let dir = tempdir().unwrap();
    assert_eq!(read_lines(dir.path()).unwrap_err().code, codes::IS_A_DIRECTORY);
    assert_eq!(read_lines(dir.path().join("missing")).unwrap_err().code, codes::PATH_NOT_FOUND);

    let binary = dir.path().join("binary.bin");
    fs::write(&binary, [0xFFu8, 0xFE, 0x00]).unwrap();
    assert_eq!(read_lines(&binary).unwrap_err().code, codes::INVALID_TEXT);
}

#[cfg(feature = "tracing")]
#[test]
fn test_queries_emit_debug_events() {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let sink = Sink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let file = sample_file();
    tracing::subscriber::with_default(subscriber, || {
        fsize(file.path()).unwrap();
        read_lines(file.path()).unwrap();
    });

    let output = String::from_utf8_lossy(&sink.0.lock().unwrap()).into_owned();
    assert!(output.contains("len=11"), "{output}");
    assert!(output.contains("count=2"), "{output}");
}
