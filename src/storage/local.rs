// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local key-value storage with JSON string values.
//!
//! Two modes behind one interface:
//! - File-backed: one `<key>.json` file per key under the data directory,
//!   fronted by a write-through in-memory cache
//! - In-memory: cache only, used by tests and as the fallback when the
//!   data directory is unavailable
//!
//! Values kept in the cache survive failed disk writes, so a session keeps
//! working on in-memory state when the disk does not cooperate.

use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;

use crate::error::AppError;

/// Local storage client.
#[derive(Clone)]
pub struct LocalStorage {
    dir: Option<PathBuf>,
    cache: Arc<DashMap<String, String>>,
}

impl LocalStorage {
    /// Create file-backed storage rooted at `dir`, creating it if needed.
    pub async fn new(dir: PathBuf) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::Storage(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        tracing::info!(dir = %dir.display(), "Local storage ready");

        Ok(Self {
            dir: Some(dir),
            cache: Arc::new(DashMap::new()),
        })
    }

    /// Create storage that never touches the filesystem.
    pub fn new_in_memory() -> Self {
        Self {
            dir: None,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Look up a value, consulting the cache before the filesystem.
    ///
    /// A missing key is `Ok(None)`; only a failed read of an existing file
    /// is an error.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        if let Some(cached) = self.cache.get(key) {
            return Ok(Some(cached.clone()));
        }

        let Some(dir) = &self.dir else {
            return Ok(None);
        };

        let path = dir.join(file_name(key));
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                self.cache.insert(key.to_string(), value.clone());
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Store a value under `key`.
    ///
    /// The cache is updated before the disk write, so the value is visible
    /// to this session even when persisting it fails.
    pub async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        self.cache.insert(key.to_string(), value.clone());

        let Some(dir) = &self.dir else {
            return Ok(());
        };

        let path = dir.join(file_name(key));
        tokio::fs::write(&path, value).await.map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

fn file_name(key: &str) -> String {
    format!("{}.json", key)
}
