pub mod dispatcher;
pub mod file_log_sink;
pub mod log_error;
pub mod log_format;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod terminal_log_sink;
pub mod timestamp;
pub use dispatcher::{Dispatcher, global, install_global};
pub use file_log_sink::FileLogSink;
pub use log_error::LogError;
pub use log_level::Severity;
pub use log_sink::LogSink;
pub use terminal_log_sink::TerminalLogSink;
