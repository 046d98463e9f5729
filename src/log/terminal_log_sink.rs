use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::log::{log_level::Severity, log_sink::LogSink};

/// Every terminal sink shares stdout, so they share one guard too.
static STDOUT_GUARD: Mutex<()> = Mutex::new(());

/// Writes lines to the process's standard output.
#[derive(Debug, Clone)]
pub struct TerminalLogSink {
    mask: Severity,
}

impl TerminalLogSink {
    #[must_use]
    pub const fn new(mask: Severity) -> Self {
        Self { mask }
    }
}

impl Default for TerminalLogSink {
    fn default() -> Self {
        Self::new(Severity::ALL)
    }
}

impl LogSink for TerminalLogSink {
    fn name(&self) -> &str {
        "Terminal"
    }

    fn mask(&self) -> Severity {
        self.mask
    }

    fn write(&self, line: &str) {
        let _guard = STDOUT_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        let mut out = io::stdout().lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    fn flush(&self) {
        let _guard = STDOUT_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = io::stdout().flush();
    }
}
