//! Working-directory layout and artifact persistence

use crate::StoreError;
use lading_domain::{Chunk, ExtractedRecord, Page, PageStore};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The pipeline working directory.
///
/// Owns the artifact paths and the load/save operations on them. Artifacts
/// are pretty-printed JSON so a run can be inspected and edited by hand
/// between stages.
#[derive(Debug, Clone)]
pub struct Workdir {
    base: PathBuf,
}

impl Workdir {
    /// Create a handle for the given base directory (not yet created on disk)
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The base directory
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of the Page Text Store artifact
    pub fn pages_path(&self) -> PathBuf {
        self.base.join("pages.json")
    }

    /// Path of the chunk-boundaries artifact
    pub fn chunks_path(&self) -> PathBuf {
        self.base.join("chunks.json")
    }

    /// Path of the extraction-records artifact
    pub fn records_path(&self) -> PathBuf {
        self.base.join("records.json")
    }

    /// Path of the append-only failed-extraction log
    pub fn failed_log_path(&self) -> PathBuf {
        self.base.join("failed_chunks.log")
    }

    /// Directory the splitter writes output files into
    pub fn split_dir(&self) -> PathBuf {
        self.base.join("split")
    }

    /// Create the base and split directories if they do not exist
    pub fn create(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base)?;
        fs::create_dir_all(self.split_dir())?;
        Ok(())
    }

    /// Persist the Page Text Store
    pub fn save_pages(&self, store: &PageStore) -> Result<(), StoreError> {
        self.save_json(&self.pages_path(), store.pages())
    }

    /// Load the Page Text Store, re-validating the contiguity invariant
    pub fn load_pages(&self) -> Result<PageStore, StoreError> {
        let pages: Vec<Page> = self.load_json(&self.pages_path())?;
        Ok(PageStore::new(pages)?)
    }

    /// Persist the chunk boundaries
    pub fn save_chunks(&self, chunks: &[Chunk]) -> Result<(), StoreError> {
        self.save_json(&self.chunks_path(), chunks)
    }

    /// Load the chunk boundaries
    pub fn load_chunks(&self) -> Result<Vec<Chunk>, StoreError> {
        self.load_json(&self.chunks_path())
    }

    /// Persist the extraction records
    pub fn save_records(&self, records: &[ExtractedRecord]) -> Result<(), StoreError> {
        self.save_json(&self.records_path(), records)
    }

    /// Load the extraction records
    pub fn load_records(&self) -> Result<Vec<ExtractedRecord>, StoreError> {
        self.load_json(&self.records_path())
    }

    /// Append one failed-extraction entry to the log
    pub fn append_failed(&self, chunk_id: usize, reason: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base)?;
        let mut log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.failed_log_path())?;
        writeln!(log, "chunk {chunk_id} failed: {reason}")?;
        Ok(())
    }

    /// Report which artifacts exist and how many entries each holds
    pub fn status(&self) -> WorkdirStatus {
        let split_files = fs::read_dir(self.split_dir()).ok().map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file())
                .count()
        });

        WorkdirStatus {
            pages: self.load_pages().ok().map(|p| p.len()),
            chunks: self.load_chunks().ok().map(|c| c.len()),
            records: self.load_records().ok().map(|r| r.len()),
            split_files,
        }
    }

    fn save_json<T: serde::Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base)?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        debug!("saved {}", path.display());
        Ok(())
    }

    fn load_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T, StoreError> {
        if !path.exists() {
            return Err(StoreError::MissingArtifact(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Per-artifact entry counts; `None` means the artifact does not exist yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdirStatus {
    /// Pages in pages.json
    pub pages: Option<usize>,
    /// Chunks in chunks.json
    pub chunks: Option<usize>,
    /// Records in records.json
    pub records: Option<usize>,
    /// Files under split/
    pub split_files: Option<usize>,
}
