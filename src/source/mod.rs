pub mod pdf;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Text plus any hyperlink targets found in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub links: Vec<String>,
}

impl Document {
    pub fn from_text(text: impl Into<String>) -> Self {
        Document {
            text: text.into(),
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported file type: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("{} is {size} bytes, limit is {limit}", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from {}: {message}", .path.display())]
    Pdf { path: PathBuf, message: String },
}

/// What the loader accepts. Extensions are compared case-insensitively.
#[derive(Debug, Clone)]
pub struct Limits {
    pub allowed_extensions: Vec<String>,
    pub max_file_bytes: u64,
}

impl Limits {
    pub fn kind_of(&self, path: &Path) -> Option<DocumentKind> {
        let ext = path.extension()?.to_str()?;
        if !self.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(ext)) {
            return None;
        }
        DocumentKind::from_extension(ext)
    }
}

pub fn load(path: &Path, limits: &Limits) -> Result<Document, SourceError> {
    let kind = limits
        .kind_of(path)
        .ok_or_else(|| SourceError::UnsupportedExtension(path.to_path_buf()))?;

    let io_err = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > limits.max_file_bytes {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: limits.max_file_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    debug!(path = %path.display(), ?kind, size, "loading document");

    match kind {
        DocumentKind::Text => Ok(Document::from_text(String::from_utf8_lossy(&bytes))),
        DocumentKind::Pdf => pdf::extract(&bytes).map_err(|message| SourceError::Pdf {
            path: path.to_path_buf(),
            message,
        }),
    }
}

// ── Tests ──
