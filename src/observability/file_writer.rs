//! Append-only trace file with size-based rotation.
//!
//! Before each write the file size is checked; once it exceeds the limit the
//! file is renamed to `<name>.json.<UTC timestamp>` and a fresh file is
//! started. Only the newest backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file grows past 10 MB.
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated backups kept next to the live file.
const MAX_BACKUP_FILES: usize = 3;

/// Backup suffix format. Fixed width so names sort chronologically.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.6fZ";

/// Thread-safe rotating writer for one trace file.
///
/// The file is opened lazily on the first write and reopened after every
/// rotation.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Writer with the default 10 MB / 3 backups policy.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes, rotating first if the file
    /// is over the size limit.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file, or
    /// an error if the internal lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|metadata| metadata.len() > self.max_bytes)
    }

    /// Moves the live file aside and prunes old backups.
    fn rotate(&self) -> io::Result<()> {
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut backup_path = self.backup_path(&timestamp);
        let mut attempt = 1;
        while backup_path.exists() {
            backup_path = self.backup_path(&format!("{timestamp}-{attempt}"));
            attempt += 1;
        }

        fs::rename(&self.file_path, &backup_path)?;
        self.prune_backups()
    }

    fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = self.file_path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(suffix);
        self.file_path.with_file_name(name)
    }

    /// Deletes all but the newest `max_backups` backups. Individual removal
    /// failures are ignored.
    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort_unstable_by(|a, b| b.cmp(a));
        for stale in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }

    /// Backup files of this writer, in no particular order.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        let prefix = format!(
            "{}.",
            self.file_path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "trace file name is not UTF-8"))?
        );

        Ok(fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
