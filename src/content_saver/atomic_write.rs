use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::ScrapeResult;

/// Directory a temp file for `path` must live in so that the final rename
/// stays on one filesystem
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Write `content` to `path` atomically
///
/// The bytes go to a temp file next to the destination which is then
/// renamed over it. Readers see either the old file or the complete new
/// one; on error the destination is left untouched.
pub async fn write_atomic(path: &Path, content: &[u8]) -> ScrapeResult<()> {
    let parent = parent_dir(path);
    tokio::fs::create_dir_all(&parent).await?;

    let mut temp_file = NamedTempFile::new_in(&parent)?;
    temp_file.write_all(content)?;
    temp_file.flush()?;

    // Atomic rename to final path
    temp_file.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_name_uses_current_dir() {
        assert_eq!(parent_dir(Path::new("javadoc.ix.23.md")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("out/x.md")), PathBuf::from("out"));
    }

    #[tokio::test]
    async fn replaces_existing_file_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/doc.md");
        write_atomic(&path, b"x").await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn failure_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        // The destination is an existing directory, so the rename fails
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        assert!(write_atomic(&path, b"content").await.is_err());
        assert!(path.is_dir());
        let stray = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path() != path)
            .count();
        assert_eq!(stray, 0);
    }
}
