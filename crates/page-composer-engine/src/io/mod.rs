pub mod assets;

use crate::editing::insertion;
use crate::models::{ModelError, Page};
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

pub use assets::{Asset, AssetAttachmentPort, FsAssetStore, UploadBatch, UploadError, upload_batch};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Page file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid pages directory: {0}")]
    InvalidPagesDir(String),
    #[error("Malformed page content: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Invalid page structure: {0}")]
    Invalid(#[from] ModelError),
}

/// What a stored content string turned out to hold
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedContent {
    Structured(Page),
    /// Not a page tree; show it as plain text
    Raw(String),
    Empty,
}

/// Serialize a page to its persisted JSON form
pub fn to_json(page: &Page) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(page)?)
}

/// Parse persisted JSON into a page, enforcing the nesting rules and
/// clamping any out-of-range split points
pub fn from_json(raw: &str) -> Result<Page, IoError> {
    let mut page: Page = serde_json::from_str(raw)?;
    page.validate()?;
    normalize(&mut page);
    Ok(page)
}

/// Classify stored content without ever failing.
///
/// Malformed or structurally invalid JSON degrades to raw text.
pub fn load_content(raw: &str) -> LoadedContent {
    if raw.trim().is_empty() {
        return LoadedContent::Empty;
    }
    match from_json(raw) {
        Ok(page) => LoadedContent::Structured(page),
        Err(e) => {
            log::warn!("falling back to raw content: {e}");
            LoadedContent::Raw(raw.to_string())
        }
    }
}

fn normalize(page: &mut Page) {
    for section in &mut page.sections {
        for column in &mut section.columns {
            insertion::normalize(column);
            for nested in column.columns.iter_mut().flatten() {
                insertion::normalize(nested);
            }
        }
    }
}

/// Read and parse a page file
pub fn read_page(relative_path: &RelativePath, pages_root: &Path) -> Result<Page, IoError> {
    let absolute_path = relative_path.to_path(pages_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let content = fs::read_to_string(&absolute_path)?;
    from_json(&content)
}

/// Write a page file
pub fn write_page(
    relative_path: &RelativePath,
    pages_root: &Path,
    page: &Page,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(pages_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&absolute_path, to_json(page)?)?;
    Ok(())
}

/// Scan for page files (`*.json`) in the pages directory, sorted
pub fn scan_page_files(pages_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !pages_root.exists() {
        return Err(IoError::InvalidPagesDir(
            "pages directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(pages_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_pages_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPagesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
