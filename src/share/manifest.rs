//! Manifest data model for the share page generator

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A single paper record from `papers/manifest.json`.
///
/// The site manifest carries more fields per paper (authors, interactive
/// section titles, links); the generator needs only these two and ignores
/// the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct PaperEntry {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

fn default_title() -> String {
    "Untitled Paper".to_string()
}

impl Default for PaperEntry {
    fn default() -> Self {
        Self {
            title: default_title(),
            summary: String::new(),
        }
    }
}

/// Load the manifest and return its entries sorted by ascending numeric id.
///
/// Keys are string-encoded integers; anything else is rejected rather than
/// silently skipped.
pub fn load_manifest(path: &Path) -> Result<Vec<(u32, PaperEntry)>> {
    if !path.is_file() {
        return Err(Error::ManifestNotFound {
            path: path.display().to_string(),
        });
    }

    let raw = std::fs::read_to_string(path)?;
    let manifest: HashMap<String, PaperEntry> = serde_json::from_str(&raw)?;

    let mut entries = Vec::with_capacity(manifest.len());
    for (key, entry) in manifest {
        let id: u32 = key
            .parse()
            .map_err(|_| Error::ManifestKey { key: key.clone() })?;
        entries.push((id, entry));
    }
    entries.sort_by_key(|(id, _)| *id);

    tracing::debug!("loaded {} manifest entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_manifest(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("manifest.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_sorted_numerically() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            dir.path(),
            r#"{"10": {"title": "Ten", "summary": ""},
                "2": {"title": "Two", "summary": ""},
                "1": {"title": "One", "summary": ""}}"#,
        );

        let entries = load_manifest(&path).unwrap();
        let ids: Vec<u32> = entries.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2, 10]);
    }

    #[test]
    fn test_missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{"7": {}}"#);

        let entries = load_manifest(&path).unwrap();
        assert_eq!(entries[0].1.title, "Untitled Paper");
        assert_eq!(entries[0].1.summary, "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            dir.path(),
            r#"{"3": {"title": "T", "summary": "S", "authors": ["A"], "interactive": {"title": "X"}}}"#,
        );

        let entries = load_manifest(&path).unwrap();
        assert_eq!(entries[0].1.title, "T");
    }

    #[test]
    fn test_non_numeric_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{"abc": {"title": "T"}}"#);

        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, Error::ManifestKey { .. }));
    }

    #[test]
    fn test_missing_manifest() {
        let err = load_manifest(Path::new("/nonexistent/manifest.json")).unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound { .. }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "{not json");

        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, Error::ManifestParse(_)));
    }
}
