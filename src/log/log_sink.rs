use crate::log::log_level::Severity;

/// An output destination for formatted log lines.
///
/// Implementations must serialize concurrent [`write`](Self::write) calls so
/// that lines never interleave inside one destination.
pub trait LogSink: Send + Sync {
    /// Human-readable name, e.g. `Terminal` or `File:/var/log/app.log`.
    fn name(&self) -> &str;

    /// The severities this sink was registered for.
    fn mask(&self) -> Severity;

    #[inline]
    fn accepts(&self, severity: Severity) -> bool {
        self.mask().matches(severity)
    }

    /// Appends `line` verbatim. Failures are swallowed.
    fn write(&self, line: &str);

    fn flush(&self) {}
}
