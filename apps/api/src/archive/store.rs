use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::models::resume::{AnalysisStub, ArchivedResume, ResumeData};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("analysis {0} not found")]
    NotFound(String),

    #[error("malformed analysis record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Flat-file archive of completed analyses: one pretty-printed JSON document
/// per record, named `<id>.json` under the storage directory.
///
/// Records are write-once. There is no locking; concurrent creates get
/// distinct ids, and a listing that races a write skips the partial file.
#[derive(Debug, Clone)]
pub struct ArchiveStore {
    dir: PathBuf,
}

impl ArchiveStore {
    /// Opens the store, creating the directory if it does not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ArchiveError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Stamps `data` with a fresh id and the current UTC time, persists the
    /// combined record, and returns it.
    pub fn create(
        &self,
        data: ResumeData,
        filename: &str,
    ) -> Result<ArchivedResume, ArchiveError> {
        let record = ArchivedResume {
            id: Uuid::new_v4().to_string(),
            filename: filename.to_string(),
            // Fixed-width fractional seconds keep string order chronological.
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            resume: data,
        };

        let json = serde_json::to_string_pretty(&record)?;
        fs::write(self.record_path(&record.id), json)?;

        Ok(record)
    }

    /// Lists id/filename/timestamp of every stored record, newest first.
    /// Unreadable or unparsable files are skipped with a warning.
    pub fn list_stubs(&self) -> Result<Vec<AnalysisStub>, ArchiveError> {
        let mut stubs = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let stub = fs::read_to_string(&path)
                .map_err(ArchiveError::from)
                .and_then(|raw| {
                    serde_json::from_str::<AnalysisStub>(&raw).map_err(ArchiveError::from)
                });
            match stub {
                Ok(stub) => stubs.push(stub),
                Err(e) => warn!("skipping unreadable record {}: {e}", path.display()),
            }
        }

        stubs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(stubs)
    }

    /// Fetches the full record for `id`. Identifiers that were never issued
    /// resolve to `NotFound`; a present but unparsable record is an error.
    pub fn get(&self, id: &str) -> Result<ArchivedResume, ArchiveError> {
        // Ids are always UUIDs; anything else can never name a record and
        // must not reach path construction.
        if Uuid::parse_str(id).is_err() {
            return Err(ArchiveError::NotFound(id.to_string()));
        }

        let path = self.record_path(id);
        if !path.exists() {
            return Err(ArchiveError::NotFound(id.to_string()));
        }

        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data(name: &str) -> ResumeData {
        serde_json::from_str(&format!(r#"{{"name": "{name}"}}"#)).unwrap()
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        let created = store.create(sample_data("John Doe"), "cv.pdf").unwrap();
        let fetched = store.get(&created.id).unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.filename, "cv.pdf");
        assert_eq!(fetched.resume.name, "John Doe");
        assert_eq!(fetched.resume.phone, "Not specified");
    }

    #[test]
    fn test_persisted_document_is_flat_and_pretty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        let created = store.create(sample_data("John Doe"), "cv.pdf").unwrap();
        let raw = fs::read_to_string(dir.path().join(format!("{}.json", created.id))).unwrap();

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["id"], created.id);
        assert_eq!(value["name"], "John Doe");
        assert!(value.get("resume").is_none());
        assert!(raw.contains('\n'), "record should be pretty-printed");
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        let never_issued = Uuid::new_v4().to_string();
        assert!(matches!(
            store.get(&never_issued),
            Err(ArchiveError::NotFound(_))
        ));
    }

    #[test]
    fn test_get_non_uuid_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.get("../escape"),
            Err(ArchiveError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_stubs_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        let first = store.create(sample_data("First"), "a.pdf").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = store.create(sample_data("Second"), "b.pdf").unwrap();

        let stubs = store.list_stubs().unwrap();
        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[0].id, second.id);
        assert_eq!(stubs[1].id, first.id);
    }

    #[test]
    fn test_list_skips_corrupt_file_but_get_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        let good = store.create(sample_data("Good"), "cv.pdf").unwrap();

        let bad_id = Uuid::new_v4().to_string();
        fs::write(dir.path().join(format!("{bad_id}.json")), "{ not json").unwrap();

        let stubs = store.list_stubs().unwrap();
        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].id, good.id);

        assert!(matches!(store.get(&bad_id), Err(ArchiveError::Json(_))));
    }

    #[test]
    fn test_non_json_files_are_ignored_in_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(dir.path()).unwrap();

        fs::write(dir.path().join("README.txt"), "not a record").unwrap();
        assert!(store.list_stubs().unwrap().is_empty());
    }
}
