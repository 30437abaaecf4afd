// Text loader tests: recursion, suffix matching, encodings and limits

use crate::common::TestDocs;
use docsplit::core::loader::{FileWalker, TextFileLoader};
use docsplit::core::types::FileOutcome;
use docsplit::DocsplitError;

#[test]
fn test_directory_loads_nested_txt_only() {
    let docs = TestDocs::small();

    let documents = TextFileLoader::new(docs.path()).load_documents().unwrap();

    // Sorted walk: chapters/one, chapters/two, intro
    assert_eq!(
        documents,
        vec![
            "Chapter one begins here.".to_string(),
            "Chapter two follows.".to_string(),
            "Welcome to the handbook.".to_string(),
        ]
    );
}

#[test]
fn test_directory_suffix_is_case_sensitive() {
    let docs = TestDocs::with_files(&[("lower.txt", "kept"), ("UPPER.TXT", "ignored")]);

    let report = TextFileLoader::new(docs.path()).load().unwrap();

    assert_eq!(report.documents, vec!["kept".to_string()]);
    assert_eq!(report.files.len(), 1);
}

#[test]
fn test_empty_directory_yields_nothing() {
    let docs = TestDocs::with_files(&[]);

    let report = TextFileLoader::new(docs.path()).load().unwrap();

    assert!(report.documents.is_empty());
    assert!(report.files.is_empty());
}

#[test]
fn test_single_file_returns_exact_content() {
    let docs = TestDocs::with_files(&[("poem.txt", "line one\n\nline three\n")]);

    let documents = TextFileLoader::new(docs.file("poem.txt"))
        .load_documents()
        .unwrap();

    assert_eq!(documents, vec!["line one\n\nline three\n".to_string()]);
}

#[test]
fn test_single_non_txt_file_is_invalid_path() {
    let docs = TestDocs::with_files(&[("data.csv", "a,b")]);

    let err = TextFileLoader::new(docs.file("data.csv")).load().unwrap_err();

    assert!(matches!(err, DocsplitError::InvalidPath(_)));
    assert!(err.is_invalid_input());
}

#[test]
fn test_repeated_loads_do_not_accumulate() {
    let docs = TestDocs::small();
    let loader = TextFileLoader::new(docs.path());

    let first = loader.load_documents().unwrap();
    let second = loader.load_documents().unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn test_utf16_encoding() {
    let bytes: Vec<u8> = "héllo".encode_utf16().flat_map(u16::to_le_bytes).collect();
    let docs = TestDocs::with_bytes(&[("wide.txt", bytes.as_slice())]);

    let loader = TextFileLoader::with_encoding(docs.file("wide.txt"), "utf-16le").unwrap();

    assert_eq!(loader.encoding_name(), "UTF-16LE");
    assert_eq!(loader.load_file().unwrap(), "héllo");
}

#[test]
fn test_unknown_encoding_rejected() {
    let err = TextFileLoader::with_encoding("anything.txt", "klingon-8").unwrap_err();

    assert!(matches!(err, DocsplitError::ConfigError(_)));
}

#[test]
fn test_bad_bytes_fail_only_that_file() {
    let docs = TestDocs::with_bytes(&[
        ("a.txt", b"first".as_slice()),
        ("b.txt", [0xFFu8, 0xFF].as_slice()),
        ("c.txt", b"third".as_slice()),
    ]);

    let report = TextFileLoader::new(docs.path()).load().unwrap();

    assert_eq!(report.documents, vec!["first".to_string(), "third".to_string()]);
    assert!(report.is_partial());
    let (path, error) = report.failures().next().unwrap();
    assert!(path.ends_with("b.txt"));
    assert!(error.is_per_file());
}

#[test]
fn test_excluded_directory_is_pruned() {
    let docs = TestDocs::with_files(&[
        ("keep/a.txt", "kept"),
        ("node_modules/pkg/readme.txt", "pruned"),
    ]);

    let walker = FileWalker::new(vec!["**/node_modules/**".to_string()], 64).unwrap();
    let report = TextFileLoader::new(docs.path())
        .with_walker(walker)
        .load()
        .unwrap();

    assert_eq!(report.documents, vec!["kept".to_string()]);
}

#[test]
fn test_oversized_file_is_skipped() {
    let big = "x".repeat(1024 * 1024 + 1);
    let docs = TestDocs::with_files(&[("big.txt", big.as_str()), ("small.txt", "fits")]);

    let walker = FileWalker::new(vec![], 1).unwrap();
    let report = TextFileLoader::new(docs.path())
        .with_walker(walker)
        .load()
        .unwrap();

    assert_eq!(report.documents, vec!["fits".to_string()]);
    assert!(matches!(report.files[0].outcome, FileOutcome::Skipped(_)));
}

#[test]
fn test_pdf_next_to_text_is_ignored() {
    let docs = TestDocs::with_files(&[("a.txt", "AAAA")]);
    crate::common::write_pdf(&docs.file("b.pdf"), &["BBBB"]);

    let documents = TextFileLoader::new(docs.path()).load_documents().unwrap();

    assert_eq!(documents, vec!["AAAA".to_string()]);
}

#[cfg(unix)]
#[test]
fn test_symlinked_txt_is_loaded() {
    use std::os::unix::fs::symlink;

    let docs = TestDocs::with_files(&[("plain.txt", "PLAIN")]);
    let outside = TestDocs::with_files(&[("real.txt", "LINKED")]);
    symlink(outside.file("real.txt"), docs.file("link.txt")).unwrap();

    let report = TextFileLoader::new(docs.path()).load().unwrap();

    assert_eq!(report.documents, vec!["LINKED".to_string(), "PLAIN".to_string()]);
    assert_eq!(report.files.len(), 2);
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_recorded() {
    use std::os::unix::fs::symlink;

    let docs = TestDocs::with_files(&[("plain.txt", "PLAIN")]);
    symlink(docs.file("missing.txt"), docs.file("broken.txt")).unwrap();

    let report = TextFileLoader::new(docs.path()).load().unwrap();

    assert_eq!(report.documents, vec!["PLAIN".to_string()]);
    let (path, error) = report.failures().next().unwrap();
    assert!(path.ends_with("broken.txt"));
    assert!(matches!(error, DocsplitError::ReadFailed { .. }));
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_recorded() {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let docs = TestDocs::with_files(&[("open.txt", "visible"), ("sealed/hidden.txt", "secret")]);
    let sealed = docs.file("sealed");
    fs::set_permissions(&sealed, Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not bind a privileged user
    if fs::read_dir(&sealed).is_ok() {
        fs::set_permissions(&sealed, Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = TextFileLoader::new(docs.path()).load();
    fs::set_permissions(&sealed, Permissions::from_mode(0o755)).unwrap();
    let report = report.unwrap();

    assert_eq!(report.documents, vec!["visible".to_string()]);
    let (path, error) = report.failures().next().unwrap();
    assert!(path.ends_with("sealed"));
    assert!(error.is_per_file());
}
