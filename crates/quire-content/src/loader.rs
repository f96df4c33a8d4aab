//! TOML authoring format.
//!
//! Each document lives in its own `*.toml` file inside the content directory.
//! Files are loaded in file-name order so the resulting document order (and
//! therefore the index page) is stable across runs and platforms.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;

/// File extension of document sources.
const SOURCE_EXTENSION: &str = "toml";

/// Error returned when loading documents fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Content path is missing or not a directory.
    #[error("Content directory not found: {}", .0.display())]
    NotADirectory(PathBuf),
    /// I/O error reading a directory or file.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Document source is not valid TOML or does not match the model.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> LoadError + use<> {
    let path = path.to_path_buf();
    move |source| LoadError::Io { path, source }
}

/// Parse a single document from TOML source.
///
/// `origin` is only used for error context.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the source is malformed.
pub fn parse_document(source: &str, origin: &Path) -> Result<Document, LoadError> {
    toml::from_str(source).map_err(|source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Load every `*.toml` document from `dir`, sorted by file name.
///
/// Non-TOML files and subdirectories are ignored.
///
/// # Errors
///
/// Returns [`LoadError`] if the directory cannot be read or any document
/// fails to parse. Validation of the loaded set (titles, slugs, links) is
/// the renderer's job.
pub fn load_documents(dir: &Path) -> Result<Vec<Document>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let source = fs::read_to_string(&path).map_err(io_error(&path))?;
        let document = parse_document(&source, &path)?;
        tracing::debug!(path = %path.display(), slug = %document.slug, "Loaded document");
        documents.push(document);
    }

    tracing::debug!(
        dir = %dir.display(),
        document_count = documents.len(),
        "Content scan completed"
    );
    Ok(documents)
}
