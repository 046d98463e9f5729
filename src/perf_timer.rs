use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crate::log::{dispatcher::Dispatcher, log_level::Severity};

/// Category attached to timing records.
pub const TIMER_CATEGORY: &str = "PerformanceTimer";

/// Measures how long a scope takes and reports it as one `TIME` record.
///
/// The record is emitted by [`stop`](Self::stop) or, if that was never
/// called, when the timer is dropped.
///
/// # Example
///
/// ```rust,ignore
/// let _t = PerformanceTimer::start(Arc::clone(global()), "decode");
/// // ... work ...
/// // on drop: "<ts> [TIME ] PerformanceTimer: decode took: 1.2ms\n"
/// ```
pub struct PerformanceTimer {
    id: String,
    dispatcher: Arc<Dispatcher>,
    started: Instant,
    reported: bool,
}

impl PerformanceTimer {
    #[must_use]
    pub fn start(dispatcher: Arc<Dispatcher>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dispatcher,
            started: Instant::now(),
            reported: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stops the timer, emits the record and returns the measured duration.
    pub fn stop(mut self) -> Duration {
        let elapsed = self.elapsed();
        self.report(elapsed);
        elapsed
    }

    fn report(&mut self, elapsed: Duration) {
        if self.reported {
            return;
        }
        self.reported = true;
        let msg = format!("{} took: {elapsed:?}\n", self.id);
        self.dispatcher
            .log_category(Severity::TIME, &msg, TIMER_CATEGORY);
    }
}

impl Drop for PerformanceTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        self.report(elapsed);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::{log_sink::LogSink, timestamp::Clock};
    use std::sync::Mutex;

    struct TimeSink(Mutex<Vec<String>>);

    impl LogSink for TimeSink {
        fn name(&self) -> &str {
            "Time"
        }
        fn mask(&self) -> Severity {
            Severity::TIME
        }
        fn write(&self, line: &str) {
            self.0.lock().unwrap().push(line.to_owned());
        }
    }

    fn setup() -> (Arc<Dispatcher>, Arc<TimeSink>) {
        let d = Arc::new(Dispatcher::new(Clock::Utc));
        let sink = Arc::new(TimeSink(Mutex::new(Vec::new())));
        d.add_sink(sink.clone());
        (d, sink)
    }

    #[test]
    fn reports_once_on_drop() {
        let (d, sink) = setup();
        {
            let _t = PerformanceTimer::start(Arc::clone(&d), "scope");
        }
        let lines = sink.0.lock().unwrap().clone();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[TIME ] PerformanceTimer: scope took: "));
        assert!(lines[0].ends_with('\n'));
    }

    #[test]
    fn stop_reports_and_drop_does_not_repeat() {
        let (d, sink) = setup();
        let t = PerformanceTimer::start(Arc::clone(&d), "work");
        assert_eq!(t.id(), "work");
        std::thread::sleep(Duration::from_millis(2));
        let took = t.stop();
        assert!(took >= Duration::from_millis(2));
        assert_eq!(sink.0.lock().unwrap().len(), 1);
    }
}
