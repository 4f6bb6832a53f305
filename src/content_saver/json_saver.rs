use std::path::Path;

use super::atomic_write::write_atomic;
use crate::document::Document;
use crate::errors::ScrapeResult;

/// Save the document tree as pretty-printed JSON
///
/// # Errors
///
/// Returns [`ScrapeError::Io`](crate::ScrapeError::Io) when serialization
/// or the write fails.
pub async fn save_json(path: &Path, document: &Document) -> ScrapeResult<()> {
    let json = serde_json::to_string_pretty(document).map_err(std::io::Error::from)?;
    write_atomic(path, json.as_bytes()).await?;
    log::debug!("Saved document JSON to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ClassDoc, ClassKind, Package, assemble};

    #[tokio::test]
    async fn json_contains_packages_and_toc() {
        let mut package = Package::new("com.example");
        package
            .classes
            .push(ClassDoc::new("Foo", ClassKind::Class, "com.example"));
        let document = assemble("Title", None, vec![package], Vec::new());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        save_json(&path, &document).await.unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["title"], "Title");
        assert_eq!(value["packages"][0]["classes"][0]["name"], "Foo");
        assert_eq!(value["toc"]["entries"][0]["children"][0]["anchor"], "com-example-foo");
    }
}
