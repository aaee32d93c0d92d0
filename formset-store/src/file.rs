use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use directories::ProjectDirs;
use kv_log_macro as log;
use rustc_hash::FxHashMap;
use sha2::{Digest, Sha256};
use tokio::{fs, sync::Mutex};

use crate::{KeyValueStore, Result, StoreError};

/// Store backed by a single JSON object file.
///
/// The whole map is read synchronously on open and rewritten after every
/// mutation. Writes go to a temporary file that is then renamed over the
/// original, so a crash mid-write leaves the previous contents intact.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<FxHashMap<String, String>>,
}

impl FileStore {
    /// Open the store for `namespace` in the platform data directory
    pub fn open(namespace: &str) -> Result<Self> {
        let storage_dir = Self::default_storage_dir()?;
        Self::open_in(namespace, storage_dir)
    }

    /// Open the store for `namespace` inside `storage_dir`, creating the
    /// directory if needed.
    pub fn open_in(namespace: &str, storage_dir: impl Into<PathBuf>) -> Result<Self> {
        let storage_dir = storage_dir.into();
        std::fs::create_dir_all(&storage_dir)?;

        let path = storage_dir.join(file_name(namespace));
        let entries = read_entries(&path)?;

        log::debug!("Opened file store", {
            items: entries.len(),
            namespace: namespace
        });

        Ok(FileStore {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn default_storage_dir() -> Result<PathBuf> {
        ProjectDirs::from("net", "michaelmelanson", "formset")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StoreError::StorageDirUnavailable)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_entries(&self, entries: &FxHashMap<String, String>) -> Result<()> {
        let sorted: BTreeMap<&String, &String> = entries.iter().collect();
        let contents = serde_json::to_string_pretty(&sorted)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, contents).await?;
        fs::rename(&temp_path, &self.path).await?;

        log::trace!("Wrote file store", { items: entries.len() });
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.lock().await;
        let previous = entries.insert(key.to_string(), value);

        if let Err(err) = self.write_entries(&entries).await {
            // Keep memory in step with what is on disk
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
            return Err(err);
        }

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };

        if let Err(err) = self.write_entries(&entries).await {
            entries.insert(key.to_string(), previous);
            return Err(err);
        }

        Ok(())
    }
}

/// File name for a namespace: the namespace reduced to alphanumerics, dots
/// and hyphens, followed by its SHA-256 so distinct namespaces never share a
/// file.
pub(crate) fn file_name(namespace: &str) -> String {
    let sanitised: String = namespace
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let hash = Sha256::digest(namespace.as_bytes());
    let hash_hex = hash.iter().map(|b| format!("{:02x}", b)).collect::<String>();

    format!("{}-{}.json", sanitised, hash_hex)
}

fn read_entries(path: &Path) -> Result<FxHashMap<String, String>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("No storage file found, starting empty");
            return Ok(FxHashMap::default());
        }
        Err(err) => return Err(err.into()),
    };

    let json_map: FxHashMap<String, serde_json::Value> = serde_json::from_str(&contents)?;

    let mut entries = FxHashMap::default();
    for (key, value) in json_map {
        match value {
            serde_json::Value::String(s) => {
                entries.insert(key, s);
            }
            _ => log::warn!("Skipping non-string storage entry", { key: key.as_str() }),
        }
    }

    Ok(entries)
}
