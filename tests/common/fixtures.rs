// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary document tree
#[allow(dead_code)] // Used in integration tests
pub struct TestDocs {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestDocs {
    /// A small mixed tree: text, nested text, an image and a notes file
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        Self::with_files(&[
            ("intro.txt", "Welcome to the handbook."),
            ("chapters/one.txt", "Chapter one begins here."),
            ("chapters/two.txt", "Chapter two follows."),
            ("notes.md", "# Not loaded"),
            ("images/cover.png", "\u{0089}PNG"),
        ])
    }

    /// Create with custom text files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        Self::with_bytes(
            &files
                .iter()
                .map(|(path, content)| (*path, content.as_bytes()))
                .collect::<Vec<_>>(),
        )
    }

    /// Create with raw file contents
    pub fn with_bytes(files: &[(&str, &[u8])]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Get path to the tree root
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get path to a file inside the tree
    #[allow(dead_code)] // Used in integration tests
    pub fn file(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

/// Write a PDF with one line of Courier text per page
#[cfg(feature = "pdf")]
#[allow(dead_code)] // Used in integration tests
pub fn write_pdf(path: &Path, pages: &[&str]) {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// Stand-in when PDF support is compiled out; writes an unreadable file
#[cfg(not(feature = "pdf"))]
#[allow(dead_code)] // Used in integration tests
pub fn write_pdf(path: &Path, _pages: &[&str]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "%PDF-1.5").unwrap();
}

/// UTF-8 test data for splitter safety checks
#[allow(dead_code)] // Used in integration tests
pub struct Utf8TestData {
    pub emoji: Vec<&'static str>,
    pub multibyte: Vec<&'static str>,
}

impl Utf8TestData {
    #[allow(dead_code)] // Used in integration tests
    pub fn new() -> Self {
        Self {
            emoji: vec![
                "Hello 👋 World",
                "Rust 🦀 is awesome",
                "🚀 Launch time",
                "Celebrate 🎉🎊🥳",
            ],
            multibyte: vec![
                "中文测试",        // Chinese
                "مرحبا بالعالم",   // Arabic
                "שלום עולם",       // Hebrew
                "Привет мир",      // Russian
                "こんにちは世界",  // Japanese
                "안녕하세요 세계", // Korean
            ],
        }
    }
}

impl Default for Utf8TestData {
    fn default() -> Self {
        Self::new()
    }
}
