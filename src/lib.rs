//! Utilix is the logging core of the FFmpegPlusPlus tool set.
//!
//! It fans classified log records out to any number of sinks, each filtered
//! by a severity mask, and writes them as flat, timestamped text lines.
//!
//! The crate is structured into a few modules:
//! - `log`: severities, sinks, formatting and the dispatcher itself.
//! - `ffmpeg_log`: level translation for records bridged from FFmpeg.
//! - `perf_timer`: scoped timing reported as `TIME` records.
//! - `config`: INI configuration describing which sinks to register.

/// Loads the INI configuration and the `[Logging]` settings.
pub mod config;
/// Translates FFmpeg log levels and forwards its log callback.
pub mod ffmpeg_log;
/// Logging core: severities, sinks, formatting and dispatch.
pub mod log;
/// Measures scopes and logs the elapsed time.
pub mod perf_timer;
