//! Translation between FFmpeg `AV_LOG_*` levels and [`Severity`].
//!
//! The native library is not linked here. A binding layer installs its own
//! `av_log_set_callback` trampoline, formats the message and forwards it to
//! [`on_external_log_event`].

use crate::log::{dispatcher::Dispatcher, log_error::LogError, log_level::Severity};

pub const AV_LOG_QUIET: i32 = -8;
pub const AV_LOG_PANIC: i32 = 0;
pub const AV_LOG_FATAL: i32 = 8;
pub const AV_LOG_ERROR: i32 = 16;
pub const AV_LOG_WARNING: i32 = 24;
pub const AV_LOG_INFO: i32 = 32;
pub const AV_LOG_VERBOSE: i32 = 40;
pub const AV_LOG_DEBUG: i32 = 48;
pub const AV_LOG_TRACE: i32 = 56;

/// Every level code the library emits, loudest first.
pub const AV_LOG_LEVELS: [i32; 9] = [
    AV_LOG_QUIET,
    AV_LOG_PANIC,
    AV_LOG_FATAL,
    AV_LOG_ERROR,
    AV_LOG_WARNING,
    AV_LOG_INFO,
    AV_LOG_VERBOSE,
    AV_LOG_DEBUG,
    AV_LOG_TRACE,
];

/// Category used when the library does not name the emitting class.
pub const DEFAULT_CLASS_NAME: &str = "FFmpegPlusPlusLib";

/// Maps a level code to a severity.
///
/// # Errors
///
/// Returns [`LogError::UnknownLevelCode`] for codes outside the table.
pub fn try_classify(code: i32) -> Result<Severity, LogError> {
    match code {
        AV_LOG_QUIET => Ok(Severity::NONE),
        AV_LOG_PANIC => Ok(Severity::PANIC),
        AV_LOG_FATAL | AV_LOG_ERROR => Ok(Severity::ERROR),
        AV_LOG_WARNING => Ok(Severity::WARN),
        AV_LOG_INFO => Ok(Severity::INFO),
        AV_LOG_VERBOSE | AV_LOG_DEBUG => Ok(Severity::DEBUG),
        AV_LOG_TRACE => Ok(Severity::TRACE),
        _ => Err(LogError::UnknownLevelCode(code)),
    }
}

/// Maps a level code to a severity; unknown codes are reported on stderr
/// and become [`Severity::NONE`] so they reach no sink.
#[must_use]
pub fn classify(code: i32) -> Severity {
    try_classify(code).unwrap_or_else(|e| {
        eprintln!("(logger) {e}");
        Severity::NONE
    })
}

/// Maps a single severity back to a level code.
///
/// # Errors
///
/// Returns [`LogError::UnmappedSeverity`] for `TIME`, combined masks and foreign bits.
pub fn try_delevel(severity: Severity) -> Result<i32, LogError> {
    const TABLE: [(Severity, i32); 7] = [
        (Severity::NONE, AV_LOG_QUIET),
        (Severity::PANIC, AV_LOG_PANIC),
        (Severity::ERROR, AV_LOG_ERROR),
        (Severity::WARN, AV_LOG_WARNING),
        (Severity::INFO, AV_LOG_INFO),
        (Severity::DEBUG, AV_LOG_DEBUG),
        (Severity::TRACE, AV_LOG_TRACE),
    ];
    TABLE
        .iter()
        .find(|(s, _)| *s == severity)
        .map(|(_, code)| *code)
        .ok_or(LogError::UnmappedSeverity(severity))
}

/// Maps a severity back to a level code; anything unmapped is reported on
/// stderr and becomes [`AV_LOG_QUIET`].
#[must_use]
pub fn delevel(severity: Severity) -> i32 {
    try_delevel(severity).unwrap_or_else(|e| {
        eprintln!("(logger) {e}");
        AV_LOG_QUIET
    })
}

/// Entry point for the binding layer's log callback.
///
/// `text` is the already formatted message, newline included.
pub fn on_external_log_event(
    dispatcher: &Dispatcher,
    raw_level: i32,
    text: &str,
    class_name: Option<&str>,
) {
    let severity = classify(raw_level);
    if severity.is_empty() {
        return;
    }
    dispatcher.log_category(severity, text, class_name.unwrap_or(DEFAULT_CLASS_NAME));
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::{log_sink::LogSink, timestamp::Clock};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CaptureSink(Mutex<Vec<String>>);

    impl LogSink for CaptureSink {
        fn name(&self) -> &str {
            "Capture"
        }
        fn mask(&self) -> Severity {
            Severity::ALL
        }
        fn write(&self, line: &str) {
            self.0.lock().unwrap().push(line.to_owned());
        }
    }

    #[test]
    fn classify_table() {
        assert_eq!(classify(AV_LOG_QUIET), Severity::NONE);
        assert_eq!(classify(AV_LOG_PANIC), Severity::PANIC);
        assert_eq!(classify(AV_LOG_FATAL), Severity::ERROR);
        assert_eq!(classify(AV_LOG_ERROR), Severity::ERROR);
        assert_eq!(classify(AV_LOG_WARNING), Severity::WARN);
        assert_eq!(classify(AV_LOG_INFO), Severity::INFO);
        assert_eq!(classify(AV_LOG_VERBOSE), Severity::DEBUG);
        assert_eq!(classify(AV_LOG_DEBUG), Severity::DEBUG);
        assert_eq!(classify(AV_LOG_TRACE), Severity::TRACE);
    }

    #[test]
    fn unknown_codes_classify_to_none() {
        assert_eq!(classify(17), Severity::NONE);
        assert!(matches!(try_classify(99), Err(LogError::UnknownLevelCode(99))));
    }

    #[test]
    fn delevel_inverts_classify_where_possible() {
        for code in [
            AV_LOG_QUIET,
            AV_LOG_PANIC,
            AV_LOG_ERROR,
            AV_LOG_WARNING,
            AV_LOG_INFO,
            AV_LOG_DEBUG,
            AV_LOG_TRACE,
        ] {
            assert_eq!(delevel(classify(code)), code);
        }
        assert_eq!(delevel(classify(AV_LOG_FATAL)), AV_LOG_ERROR);
        assert_eq!(delevel(classify(AV_LOG_VERBOSE)), AV_LOG_DEBUG);
    }

    #[test]
    fn unmapped_severities_delevel_to_quiet() {
        assert_eq!(delevel(Severity::TIME), AV_LOG_QUIET);
        assert_eq!(delevel(Severity::INFO | Severity::WARN), AV_LOG_QUIET);
        assert!(matches!(
            try_delevel(Severity::TIME),
            Err(LogError::UnmappedSeverity(_))
        ));
    }

    #[test]
    fn external_events_are_line_less() {
        let d = Dispatcher::new(Clock::Utc);
        let sink = Arc::new(CaptureSink::default());
        d.add_sink(sink.clone());

        on_external_log_event(&d, AV_LOG_WARNING, "probe size too small\n", Some("AVFormatContext"));
        on_external_log_event(&d, AV_LOG_ERROR, "decode failed\n", None);
        on_external_log_event(&d, AV_LOG_QUIET, "silent\n", None);
        on_external_log_event(&d, 1234, "unknown\n", None);

        let lines = sink.0.lock().unwrap().clone();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[WARN ] AVFormatContext: probe size too small\n"));
        assert!(lines[1].ends_with("[ERROR] FFmpegPlusPlusLib: decode failed\n"));
    }
}
