//! Append-only download audit log.
//!
//! Entries are stored one JSON object per line. Appends are serialized
//! across processes with a sibling `<log>.lock` file created exclusively;
//! a lock older than [`STALE_LOCK_AGE`] is assumed abandoned and removed.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use tracing::{debug, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::AuditEntry;

/// How long to wait for another writer before giving up.
pub const LOCK_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Lock files older than this are removed.
pub const STALE_LOCK_AGE: Duration = Duration::from_secs(60);

const LOCK_RETRY_DELAY: Duration = Duration::from_millis(50);

/// A JSON Lines audit log at a fixed path.
///
/// # Example
///
/// ```no_run
/// use paycompute::audit::AuditLog;
///
/// let log = AuditLog::new("download_audit.jsonl");
/// for entry in log.entries().unwrap() {
///     println!("{} {} {}", entry.timestamp, entry.filename, entry.total_amount);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
    lock_timeout: Duration,
    stale_after: Duration,
}

impl AuditLog {
    /// Creates a log handle. Nothing is touched on disk until the first
    /// append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock_timeout: LOCK_WAIT_TIMEOUT,
            stale_after: STALE_LOCK_AGE,
        }
    }

    /// Overrides how long [`append`](Self::append) waits for the lock.
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// Overrides the age at which a leftover lock file is removed.
    pub fn with_stale_lock_age(mut self, age: Duration) -> Self {
        self.stale_after = age;
        self
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The lock file path: the log path with `.lock` appended.
    pub fn lock_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".lock");
        PathBuf::from(path)
    }

    /// Appends one entry as a single line.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::AuditLog`] if the lock cannot be acquired in
    /// time, a stale lock cannot be removed, or the file cannot be written.
    pub fn append(&self, entry: &AuditEntry) -> PayrollResult<()> {
        let mut line = serde_json::to_string(entry).map_err(|e| self.error(e))?;
        line.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.error(e))?;
        }

        let _guard = self.acquire_lock()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.error(e))?;
        file.write_all(line.as_bytes()).map_err(|e| self.error(e))?;
        file.flush().map_err(|e| self.error(e))?;

        debug!(
            run_id = %entry.run_id,
            path = %self.path.display(),
            "Appended audit entry"
        );
        Ok(())
    }

    /// Reads every entry in file order. A missing log reads as empty;
    /// malformed lines are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::AuditLog`] if the file exists but cannot be
    /// read.
    pub fn entries(&self) -> PayrollResult<Vec<AuditEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.error(e)),
        };

        let mut entries = Vec::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<AuditEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(
                    path = %self.path.display(),
                    line = number + 1,
                    error = %e,
                    "Skipping malformed audit entry"
                ),
            }
        }
        Ok(entries)
    }

    fn acquire_lock(&self) -> PayrollResult<LockGuard> {
        let lock_path = self.lock_path();
        let started = Instant::now();

        loop {
            match try_acquire(&lock_path, self.stale_after) {
                Ok(guard) => return Ok(guard),
                Err(LockState::Stale) => {
                    warn!(path = %lock_path.display(), "Removing stale audit lock");
                    match fs::remove_file(&lock_path) {
                        Ok(()) => continue,
                        // Another writer removed it first.
                        Err(e) if e.kind() == ErrorKind::NotFound => continue,
                        Err(e) => {
                            return Err(PayrollError::AuditLog {
                                path: self.path.display().to_string(),
                                message: format!(
                                    "cannot remove stale lock file {}: {}",
                                    lock_path.display(),
                                    e
                                ),
                            });
                        }
                    }
                }
                Err(LockState::Held) => {}
                Err(LockState::Failed(e)) => return Err(self.error(e)),
            }

            if started.elapsed() >= self.lock_timeout {
                return Err(PayrollError::AuditLog {
                    path: self.path.display().to_string(),
                    message: format!("timed out waiting for lock file {}", lock_path.display()),
                });
            }
            std::thread::sleep(LOCK_RETRY_DELAY);
        }
    }

    fn error(&self, error: impl std::fmt::Display) -> PayrollError {
        PayrollError::AuditLog {
            path: self.path.display().to_string(),
            message: error.to_string(),
        }
    }
}

struct LockGuard {
    path: PathBuf,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[derive(Debug)]
enum LockState {
    Held,
    Stale,
    Failed(std::io::Error),
}

fn try_acquire(lock_path: &Path, stale_after: Duration) -> Result<LockGuard, LockState> {
    match OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(lock_path)
    {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", std::process::id());
            Ok(LockGuard {
                path: lock_path.to_path_buf(),
            })
        }
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            let age = fs::metadata(lock_path)
                .and_then(|m| m.modified())
                .ok()
                .and_then(|modified| SystemTime::now().duration_since(modified).ok());
            match age {
                Some(age) if age >= stale_after => Err(LockState::Stale),
                _ => Err(LockState::Held),
            }
        }
        Err(err) => Err(LockState::Failed(err)),
    }
}
