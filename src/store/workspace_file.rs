// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use thiserror::Error;

use crate::document::WorkspaceDocument;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("refusing to write through symlink at {path:?}")]
    SymlinkRefused { path: PathBuf },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Temp file plus atomic rename, no fsync.
    #[default]
    BestEffort,

    /// Also syncs the file contents and, on unix, the parent directory.
    /// Exact guarantees depend on the filesystem.
    Durable,
}

/// A workspace document stored at a fixed path.
#[derive(Debug, Clone)]
pub struct WorkspaceFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl WorkspaceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn save(&self, document: &WorkspaceDocument) -> Result<(), StoreError> {
        let json = document.to_json().map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        write_atomic(&self.path, json.as_bytes(), self.durability)?;
        debug!(
            path:? = self.path,
            bytes = json.len();
            "workspace saved"
        );
        Ok(())
    }

    pub fn load(&self) -> Result<WorkspaceDocument, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        WorkspaceDocument::from_json(&raw).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn refuse_symlink(path: &Path) -> Result<(), StoreError> {
    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => Err(StoreError::SymlinkRefused {
            path: path.to_path_buf(),
        }),
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(StoreError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
        _ => Ok(()),
    }
}

/// Sibling temp file, removed on drop unless [`PendingFile::commit`] moved it
/// into place.
struct PendingFile {
    path: PathBuf,
    committed: bool,
}

impl PendingFile {
    fn create(dir: &Path, target_name: &str, contents: &[u8], sync: bool) -> Result<Self, StoreError> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let pending = Self {
            path: dir.join(format!(".{target_name}.{nanos}.archscope-tmp")),
            committed: false,
        };
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&pending.path)
            .map_err(io_error(&pending.path))?;
        file.write_all(contents).map_err(io_error(&pending.path))?;
        if sync {
            file.sync_all().map_err(io_error(&pending.path))?;
        }
        Ok(pending)
    }

    fn commit(mut self, target: &Path) -> Result<(), StoreError> {
        replace_file(&self.path, target).map_err(io_error(target))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => {
                warn!(path:? = self.path, error:% = err; "stale temp file left behind");
            }
            _ => {}
        }
    }
}

#[cfg(not(windows))]
fn replace_file(from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to)
}

// rename does not replace an existing file on every windows filesystem
#[cfg(windows)]
fn replace_file(from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to).or_else(|err| match err.kind() {
        io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied => {
            let _ = fs::remove_file(to);
            fs::rename(from, to)
        }
        _ => Err(err),
    })
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    refuse_symlink(path)?;
    let Some(name) = path.file_name().map(|name| name.to_string_lossy().into_owned()) else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        });
    };
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(io_error(dir))?;

    let durable = durability == WriteDurability::Durable;
    PendingFile::create(dir, &name, contents, durable)?.commit(path)?;

    #[cfg(unix)]
    {
        if durable {
            fs::File::open(dir)
                .and_then(|handle| handle.sync_all())
                .map_err(io_error(dir))?;
        }
    }
    Ok(())
}
