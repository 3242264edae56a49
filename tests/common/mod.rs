/*!
 * Common test utilities for the zotpub test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

use zotpub::publication::{Creator, Publication, PublicationData, PublicationMeta};

// Re-export the mock source module
pub mod mock_source;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a proceedings record with all fields the templates need
pub fn proceedings_publication(
    key: &str,
    title: &str,
    proceedings: &str,
    pages: &str,
    doi: &str,
    creators: Vec<Creator>,
    parsed_date: Option<&str>,
) -> Publication {
    Publication {
        data: PublicationData {
            key: Some(key.to_string()),
            title: Some(title.to_string()),
            proceedings_title: Some(proceedings.to_string()),
            pages: Some(pages.to_string()),
            doi: Some(doi.to_string()),
            isbn: None,
            creators,
        },
        meta: PublicationMeta {
            parsed_date: parsed_date.map(|d| d.to_string()),
        },
    }
}

/// Creates a record without a proceedings title (e.g. a journal article)
pub fn non_proceedings_publication(key: &str, title: &str) -> Publication {
    Publication {
        data: PublicationData {
            key: Some(key.to_string()),
            title: Some(title.to_string()),
            creators: vec![Creator::new("Jane", "Doe")],
            ..PublicationData::default()
        },
        meta: PublicationMeta::default(),
    }
}
