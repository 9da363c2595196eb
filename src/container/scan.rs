//! Directory scanning
//!
//! Lists the immediate children of a container directory: sub-directories on
//! one side, RDF-typed files on the other. Non-recursive; deeper resources
//! are reached through their own container requests.

use std::io;
use std::path::{Path, PathBuf};

use crate::rdf::RdfFormat;

use super::ContainerError;

/// Immediate children of a container directory
#[derive(Debug, Default)]
pub struct Listing {
    /// Names of immediate sub-directories, sorted
    pub directories: Vec<String>,
    /// Paths of immediate files with a recognized RDF extension, sorted
    pub files: Vec<PathBuf>,
}

/// Scan a directory for its immediate sub-directories and RDF files.
///
/// `NotFound` when the path does not exist or is not a directory; this is
/// the only scan outcome surfaced to the requester as an error response.
pub async fn scan_directory(path: &Path) -> Result<Listing, ContainerError> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ContainerError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(ContainerError::Io(e)),
    };
    if !metadata.is_dir() {
        return Err(ContainerError::NotFound(path.to_path_buf()));
    }

    let mut listing = Listing::default();
    let mut entries = tokio::fs::read_dir(path).await?;
    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;
        if file_type.is_dir() {
            listing
                .directories
                .push(entry.file_name().to_string_lossy().into_owned());
        } else if file_type.is_file() && RdfFormat::from_path(&entry.path()).is_some() {
            listing.files.push(entry.path());
        }
    }

    // Directory iteration order is platform-dependent; sort for stable output.
    listing.directories.sort();
    listing.files.sort();
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_lists_subdirectories_and_rdf_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("beta")).unwrap();
        fs::create_dir(tmp.path().join("alpha")).unwrap();
        fs::write(tmp.path().join("a.ttl"), "").unwrap();
        fs::write(tmp.path().join("b.n3"), "").unwrap();
        fs::write(tmp.path().join("c.rdf"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        fs::write(tmp.path().join("noext"), "").unwrap();

        let listing = scan_directory(tmp.path()).await.unwrap();
        assert_eq!(listing.directories, vec!["alpha", "beta"]);
        let names: Vec<_> = listing
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.ttl", "b.n3", "c.rdf"]);
    }

    #[tokio::test]
    async fn test_not_recursive() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("sub").join("deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("hidden.ttl"), "").unwrap();

        let listing = scan_directory(tmp.path()).await.unwrap();
        assert_eq!(listing.directories, vec!["sub"]);
        assert!(listing.files.is_empty());
    }

    #[tokio::test]
    async fn test_missing_path_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = scan_directory(&missing).await.unwrap_err();
        assert!(matches!(err, ContainerError::NotFound(p) if p == missing));
    }

    #[tokio::test]
    async fn test_regular_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("data.ttl");
        fs::write(&file, "").unwrap();
        let err = scan_directory(&file).await.unwrap_err();
        assert!(matches!(err, ContainerError::NotFound(_)));
    }
}
