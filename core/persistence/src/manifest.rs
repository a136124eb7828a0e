//! FILENAME: core/persistence/src/manifest.rs
//!
//! The dataset manifest (`files.json`) lists the published CSV snapshots,
//! newest first, so a consumer can pick the latest file without listing the
//! directory itself.

use crate::PersistenceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::SystemTime;

/// One published CSV snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetFile {
    pub name: String,
    pub display_name: String,
    /// Size in bytes.
    pub size: u64,
    /// RFC 3339 timestamp.
    pub last_modified: String,
    /// Location relative to the manifest.
    pub url: String,
}

/// The manifest as a whole. Files are ordered newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetManifest {
    pub files: Vec<DatasetFile>,
    /// RFC 3339 timestamp of the manifest build.
    pub last_updated: String,
    pub total_files: usize,
}

impl DatasetManifest {
    /// The newest snapshot, if any.
    pub fn latest(&self) -> Option<&DatasetFile> {
        self.files.first()
    }
}

/// Read a manifest from `files.json`.
pub fn load_manifest(path: &Path) -> Result<DatasetManifest, PersistenceError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write a manifest as pretty-printed JSON.
pub fn save_manifest(path: &Path, manifest: &DatasetManifest) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Scan a directory for `*.csv` files and build a manifest, newest first by
/// modification time. Non-CSV entries and subdirectories are skipped.
pub fn build_manifest(dir: &Path) -> Result<DatasetManifest, PersistenceError> {
    let mut entries: Vec<(String, u64, SystemTime)> = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        entries.push((name, metadata.len(), metadata.modified()?));
    }

    entries.sort_by(|a, b| b.2.cmp(&a.2));

    let files = entries
        .into_iter()
        .map(|(name, size, modified)| {
            let display_name = name.trim_end_matches(".csv").to_string();
            let last_modified = DateTime::<Utc>::from(modified).to_rfc3339();
            DatasetFile {
                url: name.clone(),
                name,
                display_name,
                size,
                last_modified,
            }
        })
        .collect::<Vec<_>>();

    Ok(DatasetManifest {
        total_files: files.len(),
        last_updated: Utc::now().to_rfc3339(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, last_modified: &str) -> DatasetFile {
        DatasetFile {
            name: name.to_string(),
            display_name: name.trim_end_matches(".csv").to_string(),
            size: 0,
            last_modified: last_modified.to_string(),
            url: name.to_string(),
        }
    }

    #[test]
    fn test_latest_is_the_first_entry() {
        let manifest = DatasetManifest {
            files: vec![
                file("stocks_0215.csv", "2025-02-15T09:00:00+00:00"),
                file("stocks_0201.csv", "2025-02-01T09:00:00+00:00"),
            ],
            last_updated: "2025-02-15T10:00:00+00:00".to_string(),
            total_files: 2,
        };
        assert_eq!(manifest.latest().map(|f| f.name.as_str()), Some("stocks_0215.csv"));
    }

    #[test]
    fn test_manifest_uses_camel_case_keys() {
        let manifest = DatasetManifest {
            files: vec![file("stocks.csv", "2025-02-15T09:00:00+00:00")],
            last_updated: "2025-02-15T10:00:00+00:00".to_string(),
            total_files: 1,
        };
        let json = serde_json::to_value(&manifest).unwrap();
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("totalFiles").is_some());
        assert!(json["files"][0].get("displayName").is_some());
        assert!(json["files"][0].get("lastModified").is_some());
    }

    #[test]
    fn test_build_manifest_scans_csv_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stocks_a.csv"), "会社名,銘柄コード\n").unwrap();
        std::fs::write(dir.path().join("stocks_b.csv"), "会社名,銘柄コード\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let manifest = build_manifest(dir.path()).unwrap();

        assert_eq!(manifest.total_files, 2);
        assert_eq!(manifest.files.len(), 2);
        let names: Vec<&str> = manifest.files.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"stocks_a.csv"));
        assert!(names.contains(&"stocks_b.csv"));
        for file in &manifest.files {
            assert!(DateTime::parse_from_rfc3339(&file.last_modified).is_ok());
            assert_eq!(file.display_name, file.name.trim_end_matches(".csv"));
            assert!(file.size > 0);
        }
    }

    #[test]
    fn test_manifest_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = DatasetManifest {
            files: vec![file("stocks.csv", "2025-02-15T09:00:00+00:00")],
            last_updated: "2025-02-15T10:00:00+00:00".to_string(),
            total_files: 1,
        };

        let path = dir.path().join("files.json");
        save_manifest(&path, &manifest).unwrap();
        assert_eq!(load_manifest(&path).unwrap(), manifest);
    }
}
