use std::process::ExitCode;
use std::sync::Arc;
use std::env;

use utilix::config::{Config, LoggingSettings};
use utilix::ffmpeg_log::{self, AV_LOG_LEVELS};
use utilix::log::{Dispatcher, install_global};
use utilix::perf_timer::PerformanceTimer;
use utilix::{log_debug, log_error, log_info, log_panic, log_time, log_trace, log_warn};

fn main() -> ExitCode {
    // --- Parse CLI args ----------------------------------------------------
    //
    // Supported:
    //   cargo run
    //      -> terminal sink only, every severity
    //
    //   cargo run -- utilix.ini
    //      -> sinks from the [Logging] section of utilix.ini
    let args: Vec<String> = env::args().collect();

    let settings = match args.len() {
        1 => LoggingSettings::default(),
        2 => match Config::load(&args[1]).and_then(|cfg| LoggingSettings::from_config(&cfg)) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("Usage:");
            eprintln!("  {}                # log every severity to the terminal", args[0]);
            eprintln!("  {} [CONFIG]       # e.g. utilix.ini", args[0]);
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = match install_global(Dispatcher::from_settings(&settings)) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let _timer = PerformanceTimer::start(Arc::clone(dispatcher), "utilix demo");

    log_trace!("Application trace message!\n");
    log_time!("Application time message!\n");
    log_debug!("Application debug message!\n");
    log_info!("Application info message!\n");
    log_warn!("Application warning message!\n");
    log_error!("Application error message!\n");
    log_panic!("Application panic message!\n");

    // Replays what the FFmpeg callback would deliver for every level.
    for code in AV_LOG_LEVELS {
        let text = format!("FFmpegLogging test message [{code}]\n");
        ffmpeg_log::on_external_log_event(dispatcher, code, &text, None);
    }

    dispatcher.flush();
    ExitCode::SUCCESS
}
