use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;

use utilix::log::{Dispatcher, Severity, timestamp::Clock};

const THREADS: usize = 8;
const PER_THREAD: usize = 500;
const PAD: usize = 64;

#[test]
fn concurrent_writers_never_tear_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("concurrent.log");

    let dispatcher = Arc::new(Dispatcher::new(Clock::Utc));
    dispatcher.add_file_sink(&path, Severity::ALL);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let d = Arc::clone(&dispatcher);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let msg = format!("worker-{t} message-{i} {}\n", "x".repeat(PAD));
                    d.log(Severity::INFO, &msg, "tests/concurrent_logging.rs", 25);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker panicked");
    }
    dispatcher.flush();

    let content = fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let (_, body) = line
            .split_once(" [INFO ] tests/concurrent_logging.rs:25 ")
            .unwrap_or_else(|| panic!("torn line: {line}"));
        let parts: Vec<&str> = body.split(' ').collect();
        assert_eq!(parts.len(), 3, "torn line: {line}");
        assert!(parts[0].starts_with("worker-"), "torn line: {line}");
        assert!(parts[1].starts_with("message-"), "torn line: {line}");
        assert_eq!(parts[2], "x".repeat(PAD), "torn line: {line}");
        assert!(seen.insert((parts[0], parts[1])), "duplicate line: {line}");
    }
    assert_eq!(seen.len(), THREADS * PER_THREAD);
}

#[test]
fn registration_racing_with_logging_is_safe() {
    let dir = tempfile::tempdir().expect("temp dir");
    let dispatcher = Arc::new(Dispatcher::new(Clock::Utc));

    let logger = {
        let d = Arc::clone(&dispatcher);
        thread::spawn(move || {
            for i in 0..2_000 {
                d.log_category(Severity::WARN, &format!("tick {i}\n"), "race");
            }
        })
    };
    for n in 0..16 {
        dispatcher.add_file_sink(dir.path().join(format!("{n}.log")), Severity::WARN);
    }
    logger.join().expect("logger panicked");

    assert_eq!(dispatcher.sink_count(), 16);
    for n in 0..16 {
        let content = fs::read_to_string(dir.path().join(format!("{n}.log"))).expect("read log");
        assert!(content.lines().all(|l| l.contains("[WARN ] race: tick ")));
    }
}
