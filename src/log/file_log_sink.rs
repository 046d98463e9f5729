use std::{
    fs::{self, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use crate::log::{log_error::LogError, log_level::Severity, log_sink::LogSink};

/// Appends lines to a file opened once at construction.
///
/// Lines go straight to the OS handle without a user-space buffer, so a
/// process that exits without dropping the sink loses nothing. If the file
/// could not be opened the sink stays registered but every write is a no-op.
#[derive(Debug)]
pub struct FileLogSink {
    name: String,
    path: PathBuf,
    mask: Severity,
    file: Option<Mutex<File>>,
}

impl FileLogSink {
    /// Opens `path` for appending, creating it and its parent directories if missing.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::OpenSink`] if the file cannot be opened.
    pub fn try_open<P: AsRef<Path>>(path: P, mask: Severity) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = open_append(&path).map_err(|source| LogError::OpenSink {
            path: path.clone(),
            source,
        })?;
        Ok(Self::with_handle(path, mask, Some(file)))
    }

    /// Like [`try_open`](Self::try_open), but a failure is reported on stderr
    /// and yields an inert sink instead of an error.
    #[must_use]
    pub fn open<P: AsRef<Path>>(path: P, mask: Severity) -> Self {
        let path = path.as_ref();
        Self::try_open(path, mask).unwrap_or_else(|e| {
            eprintln!("(logger) {e}; file sink disabled");
            Self::with_handle(path.to_path_buf(), mask, None)
        })
    }

    fn with_handle(path: PathBuf, mask: Severity, file: Option<File>) -> Self {
        Self {
            name: format!("File:{}", path.display()),
            path,
            mask,
            file: file.map(Mutex::new),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `false` if the file failed to open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.file.is_some()
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

impl LogSink for FileLogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn mask(&self) -> Severity {
        self.mask
    }

    fn write(&self, line: &str) {
        if let Some(file) = &self.file {
            let mut f = file.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = f.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.lock().unwrap_or_else(PoisonError::into_inner).flush();
        }
    }
}

impl Drop for FileLogSink {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let mut f = file.into_inner().unwrap_or_else(PoisonError::into_inner);
            let _ = f.flush();
            let _ = f.sync_data();
        }
    }
}
