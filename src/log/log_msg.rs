use crate::log::{log_format::format_line, log_level::Severity};

/// A single log event, borrowed from the caller for the duration of one dispatch.
///
/// Records are never stored: the dispatcher formats them into a line and
/// hands that line to every matching sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    /// The severity of the event. Exactly one flag for well-formed records.
    pub severity: Severity,
    /// The message text, written verbatim. Callers supply the trailing newline.
    pub message: &'a str,
    /// Source file, module or category name the event originates from.
    pub locator: &'a str,
    /// Source line, absent for records bridged from an external library.
    pub line: Option<u32>,
}

impl<'a> LogRecord<'a> {
    /// Creates a record that points at a source line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use utilix::log::{log_level::Severity, log_msg::LogRecord};
    ///
    /// let rec = LogRecord::new(Severity::INFO, "ready\n", "src/app.rs", 12);
    /// assert_eq!(
    ///     rec.format("2024-01-01 00:00:00.0000000"),
    ///     "2024-01-01 00:00:00.0000000 [INFO ] src/app.rs:12 ready\n"
    /// );
    /// ```
    #[must_use]
    pub const fn new(severity: Severity, message: &'a str, locator: &'a str, line: u32) -> Self {
        Self {
            severity,
            message,
            locator,
            line: Some(line),
        }
    }

    /// Creates a record that only names a category, such as an external library class.
    #[must_use]
    pub const fn without_line(severity: Severity, message: &'a str, locator: &'a str) -> Self {
        Self {
            severity,
            message,
            locator,
            line: None,
        }
    }

    /// Renders the record as one output line stamped with `timestamp`.
    #[must_use]
    pub fn format(&self, timestamp: &str) -> String {
        format_line(
            timestamp,
            self.severity.label(),
            self.message,
            self.locator,
            self.line,
        )
    }
}
