//! # diary-storage
//!
//! why: provide durable persistence for the diary using standard rust fs apis
//! relations: implements diary-core's Storage and Handoff seams for native hosts
//! what: FileStorage single-blob implementation, DirHandoff export delivery

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use diary_core::storage::{holds_invariants, Storage, StorageError};
use diary_core::{Entry, Handoff, HandoffError};

/// File name of the durable blob inside the storage directory
const BLOB_FILE: &str = "entries.json";

/// file-based storage using std::fs
///
/// stores the whole collection as one pretty-printed json array in
/// `entries.json` inside the configured directory
pub struct FileStorage {
    /// directory path holding the blob
    dir: PathBuf,
}

impl FileStorage {
    /// create a new file storage at the given directory
    /// creates the directory if it doesn't exist
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// path of the durable blob
    pub fn blob_path(&self) -> PathBuf {
        self.dir.join(BLOB_FILE)
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join("entries.tmp")
    }
}

impl Storage for FileStorage {
    fn load_all(&self) -> Vec<Entry> {
        let path = self.blob_path();
        if !path.exists() {
            log::info!("no diary blob at {}, starting empty", path.display());
            return Vec::new();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                log::warn!("unreadable diary blob {}: {}", path.display(), err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Entry>>(&contents) {
            Ok(entries) if holds_invariants(&entries) => {
                log::info!("loaded {} entries from {}", entries.len(), path.display());
                entries
            }
            Ok(_) => {
                log::warn!(
                    "diary blob {} violates collection invariants, starting empty",
                    path.display()
                );
                Vec::new()
            }
            Err(err) => {
                log::warn!("malformed diary blob {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }

    fn save_all(&mut self, entries: &[Entry]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(entries)?;

        // atomic write: write to temp file then rename
        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, self.blob_path())?;

        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<u8>, StorageError> {
        Ok(fs::read(self.blob_path())?)
    }
}

/// native hand-off: materialize the export in a target directory
///
/// the closest native analogue of a share sheet: the snapshot lands as a
/// file wherever the surrounding environment pointed this at
pub struct DirHandoff {
    export_dir: PathBuf,
}

impl DirHandoff {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }
}

impl Handoff for DirHandoff {
    fn is_available(&self) -> bool {
        self.export_dir.exists() || fs::create_dir_all(&self.export_dir).is_ok()
    }

    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<(), HandoffError> {
        fs::create_dir_all(&self.export_dir).map_err(|err| HandoffError::Failed(err.to_string()))?;
        let target = self.export_dir.join(file_name);
        fs::write(&target, bytes).map_err(|err| HandoffError::Failed(err.to_string()))?;
        log::info!("exported diary to {}", target.display());
        Ok(())
    }
}
