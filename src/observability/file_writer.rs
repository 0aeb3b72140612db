//! Size-rotated trace file.
//!
//! Trace lines are appended to a single file. Once the file grows past the
//! policy's limit it is shifted to `<file>.1`, the previous `.1` becomes `.2`,
//! and so on; the oldest backup beyond the retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many rotated files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            backups: 3,
        }
    }
}

/// Appends lines to a file, rotating it according to a [`RotationPolicy`].
///
/// The handle is opened lazily on the first write and guarded by a mutex, so
/// one writer can be shared by every exporter call.
pub struct RotatingWriter {
    path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            file: Mutex::new(None),
        }
    }

    /// Writes `line` plus a newline and flushes it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotating, opening or writing the
    /// file fails, or if the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut slot = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.current_len() > self.policy.max_bytes {
            *slot = None;
            self.rotate()?;
        }

        if slot.is_none() {
            *slot = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = slot.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn current_len(&self) -> u64 {
        fs::metadata(&self.path).map_or(0, |m| m.len())
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Shifts `<file>.N` to `<file>.N+1`, dropping the oldest, then moves the
    /// live file to `<file>.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.policy.backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.policy.backups))?;
        for index in (1..self.policy.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
