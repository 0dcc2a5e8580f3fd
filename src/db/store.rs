// SPDX-License-Identifier: MIT

//! File-backed JSON document store with typed operations.
//!
//! Each collection lives in its own file as a whole JSON array. Every
//! request re-reads from disk and writes the full array back, so the files
//! are the sole source of truth. There is no locking: two concurrent
//! writers to the same document race and the last writer wins.

use crate::db::documents;
use crate::error::AppError;
use crate::models::{ActivityTemplate, AwardRecord, Student};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

/// Document store rooted at a data directory.
#[derive(Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Open a store, creating the data directory if it does not exist.
    ///
    /// Directory creation is the only process-fatal failure; everything
    /// after startup is recovered at the request boundary.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&data_dir).await.map_err(|e| {
            AppError::Storage(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;
        Ok(Self { data_dir })
    }

    fn doc_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Load a document, falling back to the default when the file is
    /// missing, unreadable, or fails to parse. Never an error for callers.
    async fn load_doc<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.doc_path(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Unreadable document, using default");
                return T::default();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt document, using default");
                T::default()
            }
        }
    }

    /// Serialize and write a document as a whole-file overwrite.
    async fn save_doc<T: Serialize>(&self, name: &str, value: &T) -> Result<(), AppError> {
        let path = self.doc_path(name);
        let json = serde_json::to_vec_pretty(value)
            .map_err(|e| AppError::Storage(format!("Failed to serialize {}: {}", name, e)))?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", path.display(), e)))
    }

    // ─── Student Registry ────────────────────────────────────────

    pub async fn load_students(&self) -> Vec<Student> {
        self.load_doc(documents::STUDENTS).await
    }

    pub async fn save_students(&self, students: &[Student]) -> Result<(), AppError> {
        self.save_doc(documents::STUDENTS, &students).await
    }

    // ─── Activity Catalog ────────────────────────────────────────

    pub async fn load_templates(&self) -> Vec<ActivityTemplate> {
        self.load_doc(documents::TEMPLATES).await
    }

    pub async fn save_templates(&self, templates: &[ActivityTemplate]) -> Result<(), AppError> {
        self.save_doc(documents::TEMPLATES, &templates).await
    }

    // ─── Award Ledger ────────────────────────────────────────────

    pub async fn load_awards(&self) -> Vec<AwardRecord> {
        self.load_doc(documents::AWARDS).await
    }

    pub async fn save_awards(&self, awards: &[AwardRecord]) -> Result<(), AppError> {
        self.save_doc(documents::AWARDS, &awards).await
    }
}

/// Next identifier for a collection: one past the highest id in use.
///
/// Derived from the stored document, so ids stay unique across restarts
/// without a clock-based scheme.
pub fn next_id(ids: impl IntoIterator<Item = u64>) -> u64 {
    ids.into_iter().max().unwrap_or(0) + 1
}
