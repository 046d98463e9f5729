use crate::{
    config::LoggingSettings,
    log::{
        file_log_sink::FileLogSink,
        log_error::LogError,
        log_format::trim_locator,
        log_level::Severity,
        log_msg::LogRecord,
        log_sink::LogSink,
        terminal_log_sink::TerminalLogSink,
        timestamp::Clock,
    },
};

use std::{
    env, io,
    path::{Path, PathBuf},
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

/// Folder name that identifies the project root inside the working directory.
pub const SOLUTION_ROOT_MARKER: &str = "FFmpegPlusPlus";

/// Environment variable that overrides where default log files go.
pub const LOG_ROOT_ENV: &str = "UTILIX_LOG_ROOT";

/// Sub-directory of the root that holds default log files.
pub const LOG_DIR_NAME: &str = "logs";

static GLOBAL: OnceLock<Arc<Dispatcher>> = OnceLock::new();

/// Filtered fan-out of log records to registered sinks.
///
/// # Architecture
///
/// 1. **Registration**: sinks are appended with the `add_*` methods, usually at startup.
/// 2. **Filtering**: each record is offered to every sink whose mask intersects its severity.
/// 3. **Formatting**: the record is stamped and formatted once, then shared by all sinks.
/// 4. **Writing**: each sink serializes its own writes, so lines never tear.
///
/// The sink list only grows. Logging holds a read lock on it, so a record is
/// never offered to a half-registered sink.
pub struct Dispatcher {
    sinks: RwLock<Vec<Arc<dyn LogSink>>>,
    clock: Clock,
    root_marker: String,
    log_root: Option<PathBuf>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Clock::Local)
    }
}

impl Dispatcher {
    /// Creates a dispatcher with no sinks.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
            clock,
            root_marker: SOLUTION_ROOT_MARKER.to_owned(),
            log_root: None,
        }
    }

    /// Replaces the folder name searched for by [`add_default_file_sink`](Self::add_default_file_sink).
    #[must_use]
    pub fn with_root_marker(mut self, marker: impl Into<String>) -> Self {
        self.root_marker = marker.into();
        self
    }

    /// Places default log files under `root/logs`, skipping the marker search.
    #[must_use]
    pub fn with_log_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.log_root = Some(root.into());
        self
    }

    /// Builds a dispatcher and registers the sinks described by `settings`.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let mut dispatcher = Self::new(settings.clock).with_root_marker(&settings.root_marker);
        if let Some(root) = &settings.log_root {
            dispatcher = dispatcher.with_log_root(root);
        }
        if settings.terminal {
            dispatcher.add_terminal_sink(settings.terminal_mask);
        }
        if let Some(path) = &settings.file {
            dispatcher.add_file_sink(path, settings.file_mask);
        }
        if settings.default_file {
            dispatcher.add_default_file_sink(settings.default_file_mask);
        }
        dispatcher
    }

    #[must_use]
    pub const fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn root_marker(&self) -> &str {
        &self.root_marker
    }

    /// Registers any sink. Sinks are visited in registration order.
    pub fn add_sink(&self, sink: Arc<dyn LogSink>) {
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sink);
    }

    /// Registers a sink writing to standard output.
    pub fn add_terminal_sink(&self, mask: Severity) {
        self.add_sink(Arc::new(TerminalLogSink::new(mask)));
    }

    /// Registers a sink appending to `path`.
    ///
    /// If the file cannot be opened a diagnostic is printed on stderr and the
    /// sink is registered inert; other sinks are unaffected.
    pub fn add_file_sink<P: AsRef<Path>>(&self, path: P, mask: Severity) {
        self.add_sink(Arc::new(FileLogSink::open(path, mask)));
    }

    /// Registers a file sink at `<root>/logs/<YYYYMMDD_HHMMSS_fffffff>.log`.
    ///
    /// The root is, in order of preference: `$UTILIX_LOG_ROOT`, the dispatcher's
    /// explicit log root, or the working directory cut right after the root
    /// marker. When none applies a diagnostic is printed and a bare file name
    /// in the working directory is used.
    ///
    /// Returns the path the sink was opened at.
    pub fn add_default_file_sink(&self, mask: Severity) -> PathBuf {
        let path = self.default_log_path();
        self.add_file_sink(&path, mask);
        path
    }

    fn default_log_path(&self) -> PathBuf {
        let env_root = env::var_os(LOG_ROOT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.default_log_path_from(env_root, env::current_dir())
    }

    /// Resolves the default log path from an already-read `$UTILIX_LOG_ROOT`
    /// value and working directory.
    fn default_log_path_from(&self, env_root: Option<PathBuf>, cwd: io::Result<PathBuf>) -> PathBuf {
        let file_name = format!("{}.log", self.clock.file_timestamp());

        if let Some(root) = env_root.or_else(|| self.log_root.clone()) {
            return root.join(LOG_DIR_NAME).join(file_name);
        }

        let found = cwd
            .map_err(LogError::CurrentDir)
            .and_then(|cwd| resolve_marker_root(&cwd, &self.root_marker));
        match found {
            Ok(root) => root.join(LOG_DIR_NAME).join(file_name),
            Err(e) => {
                eprintln!("(logger) {e}; writing default log to ./{file_name}");
                PathBuf::from(file_name)
            }
        }
    }

    /// Logs a record that points at a source line.
    ///
    /// `locator` is usually `file!()`; it is shortened to start at the root
    /// marker when the marker occurs in it.
    pub fn log(&self, severity: Severity, message: &str, locator: &str, line: u32) {
        let locator = trim_locator(locator, &self.root_marker);
        self.dispatch(&LogRecord::new(severity, message, locator, line));
    }

    /// Logs a record identified only by a category, e.g. an external library class name.
    pub fn log_category(&self, severity: Severity, message: &str, category: &str) {
        self.dispatch(&LogRecord::without_line(severity, message, category));
    }

    /// Offers `record` to every sink whose mask matches its severity.
    pub fn dispatch(&self, record: &LogRecord<'_>) {
        let sinks = self.sinks.read().unwrap_or_else(PoisonError::into_inner);

        // Formatted lazily, then shared across sinks.
        let mut line: Option<String> = None;
        for sink in sinks.iter().filter(|s| s.accepts(record.severity)) {
            let line = line.get_or_insert_with(|| record.format(&self.clock.log_timestamp()));
            sink.write(line);
        }
    }

    /// Returns `true` if at least one registered sink accepts `severity`.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|s| s.accepts(severity))
    }

    /// Flushes every registered sink.
    pub fn flush(&self) {
        let sinks = self.sinks.read().unwrap_or_else(PoisonError::into_inner);
        for sink in sinks.iter() {
            sink.flush();
        }
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Names of the registered sinks, in registration order.
    #[must_use]
    pub fn sink_names(&self) -> Vec<String> {
        self.sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|s| s.name().to_owned())
            .collect()
    }
}

/// Returns the process-wide dispatcher, creating an empty one on first use.
///
/// Concurrent first calls still create exactly one instance.
pub fn global() -> &'static Arc<Dispatcher> {
    GLOBAL.get_or_init(|| Arc::new(Dispatcher::default()))
}

/// Installs `dispatcher` as the process-wide instance.
///
/// # Errors
///
/// Returns [`LogError::AlreadyInitialized`] if [`global`] was already called
/// or another dispatcher was installed first.
pub fn install_global(dispatcher: Dispatcher) -> Result<&'static Arc<Dispatcher>, LogError> {
    GLOBAL
        .set(Arc::new(dispatcher))
        .map_err(|_| LogError::AlreadyInitialized)?;
    Ok(global())
}

/// Cuts `cwd` right after the first occurrence of `marker`.
///
/// `/home/me/FFmpegPlusPlus/build/bin` with marker `FFmpegPlusPlus` yields
/// `/home/me/FFmpegPlusPlus`.
///
/// # Errors
///
/// Returns [`LogError::RootMarkerNotFound`] if `marker` is empty or absent.
pub fn resolve_marker_root(cwd: &Path, marker: &str) -> Result<PathBuf, LogError> {
    let cwd_str = cwd.to_string_lossy();
    match cwd_str.find(marker).filter(|_| !marker.is_empty()) {
        Some(pos) => Ok(PathBuf::from(&cwd_str[..pos + marker.len()])),
        None => Err(LogError::RootMarkerNotFound {
            marker: marker.to_owned(),
            cwd: cwd.to_path_buf(),
        }),
    }
}
