use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::dlog;
use crate::error::{Error, Result};
use crate::types::TrackRecord;

/// Serialize a record as pretty-printed JSON, the on-disk format.
pub fn encode_record(record: &TrackRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Decode a persisted record. Malformed bytes are a hard `Decode` error,
/// never a substituted default.
pub fn decode_record(bytes: &[u8]) -> Result<TrackRecord> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Flat directory of track record files, one per completed workout, keyed
/// by the record's name. No sub-directories, no deletion.
pub struct TrackStore {
    dir: PathBuf,
}

impl TrackStore {
    /// Open the store, creating the directory if it does not exist yet.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| storage_err(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of all stored records, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| storage_err(&self.dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| storage_err(&self.dir, e))?;
            if !entry.file_type().map_err(|e| storage_err(&self.dir, e))?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::warn!(?raw, "skipping non-UTF-8 file name in store"),
            }
        }

        names.sort();
        Ok(names)
    }

    /// Write one record, keyed by its name. Write failures surface as
    /// `Storage` errors.
    pub fn save(&self, record: &TrackRecord) -> Result<PathBuf> {
        let path = self.path_for(&record.name)?;
        let json = encode_record(record)?;
        fs::write(&path, json).map_err(|e| storage_err(&path, e))?;

        tracing::info!(path = %path.display(), "track record saved");
        Ok(path)
    }

    /// Read and decode one record by name. A missing file is a `Storage`
    /// error; unparseable contents are a `Decode` error.
    pub fn load(&self, name: &str) -> Result<TrackRecord> {
        let path = self.path_for(name)?;
        let bytes = fs::read(&path).map_err(|e| storage_err(&path, e))?;
        dlog!("loaded name={name} bytes={}", bytes.len());
        decode_record(&bytes)
    }

    // Record names become file names directly; refuse anything that could
    // escape the store directory.
    fn path_for(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(Error::UnsafeName(name.to_string()));
        }
        Ok(self.dir.join(name))
    }
}

fn storage_err(path: &Path, source: io::Error) -> Error {
    Error::Storage {
        path: path.to_path_buf(),
        source,
    }
}
