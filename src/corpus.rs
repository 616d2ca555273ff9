use std::path::Path;

use globset::GlobSet;

use crate::{error::Result, walker};

/// A loaded document: identifier plus immutable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the corpus root, used as the display identifier.
    pub id: String,
    /// Full text with line breaks flattened to spaces.
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Flatten a file's lines into one space-terminated string.
///
/// Every line contributes `line + " "`, so fragments can run across the
/// original line breaks.
fn flatten_lines(contents: &str) -> String {
    let mut text = String::with_capacity(contents.len() + 1);
    for line in contents.lines() {
        text.push_str(line);
        text.push(' ');
    }
    text
}

/// Load every recognized text file under `root` into memory.
///
/// Any unreadable file aborts the whole load; the engine never runs on a
/// partial corpus.
pub fn load_corpus(
    root: &Path,
    include: Option<&GlobSet>,
) -> Result<Vec<Document>> {
    let files = walker::discover_files(root, include)?;
    let mut documents = Vec::with_capacity(files.len());
    for file in &files {
        let contents = std::fs::read_to_string(&file.absolute_path)?;
        documents.push(Document {
            id: file.relative_path.to_string_lossy().into_owned(),
            text: flatten_lines(&contents),
        });
    }
    Ok(documents)
}

/// Load a single file as a document, identified by the path as given.
pub fn load_document(path: &Path) -> Result<Document> {
    let contents = std::fs::read_to_string(path)?;
    Ok(Document {
        id: path.display().to_string(),
        text: flatten_lines(&contents),
    })
}
