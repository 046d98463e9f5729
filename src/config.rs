use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::log::{
    dispatcher::SOLUTION_ROOT_MARKER, log_error::LogError, log_level::Severity, timestamp::Clock,
};

/// Section holding the sink description.
pub const LOGGING_SECTION: &str = "Logging";

/// INI-style key/value file: `[section]` headers, `key = value` pairs, `#` comments.
///
/// Pairs that appear before the first section header belong to no section
/// and are ignored.
#[derive(Debug)]
pub struct Config {
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// # Errors
    ///
    /// Returns [`LogError::ReadConfig`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LogError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses configuration text. Lines that are neither headers nor pairs are ignored.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let (Some(pos), Some(sec)) = (line.find('='), &current_section) {
                let key = line[..pos].trim().to_string();
                let value = line[pos + 1..].trim().trim_matches('"').to_string();
                sections.entry(sec.clone()).or_default().insert(key, value);
            }
        }
        Config { sections }
    }

    pub fn empty() -> Self {
        Self {
            sections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }
}

/// Sinks and path rules read from the `[Logging]` section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingSettings {
    pub terminal: bool,
    pub terminal_mask: Severity,
    pub file: Option<PathBuf>,
    pub file_mask: Severity,
    pub default_file: bool,
    pub default_file_mask: Severity,
    pub root_marker: String,
    pub log_root: Option<PathBuf>,
    pub clock: Clock,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            terminal: true,
            terminal_mask: Severity::ALL,
            file: None,
            file_mask: Severity::ALL,
            default_file: false,
            default_file_mask: Severity::ALL,
            root_marker: SOLUTION_ROOT_MARKER.to_owned(),
            log_root: None,
            clock: Clock::Local,
        }
    }
}

impl LoggingSettings {
    /// Reads the `[Logging]` section; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidMask`] for a bad mask expression and
    /// [`LogError::Config`] for a bad boolean or clock name.
    pub fn from_config(config: &Config) -> Result<Self, LogError> {
        let mut settings = Self::default();
        let get = |key: &str| config.get_non_empty(LOGGING_SECTION, key);

        if let Some(v) = get("terminal") {
            settings.terminal = parse_bool("terminal", v)?;
        }
        if let Some(v) = get("terminal_mask") {
            settings.terminal_mask = Severity::parse_mask(v)?;
        }
        settings.file = get("file").map(expand_path);
        if let Some(v) = get("file_mask") {
            settings.file_mask = Severity::parse_mask(v)?;
        }
        if let Some(v) = get("default_file") {
            settings.default_file = parse_bool("default_file", v)?;
        }
        if let Some(v) = get("default_file_mask") {
            settings.default_file_mask = Severity::parse_mask(v)?;
        }
        if let Some(v) = get("root_marker") {
            settings.root_marker = v.to_owned();
        }
        settings.log_root = get("log_root").map(expand_path);
        if let Some(v) = get("clock") {
            settings.clock = Clock::from_name(v)
                .ok_or_else(|| LogError::Config(format!("clock must be local or utc, got {v:?}")))?;
        }
        Ok(settings)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, LogError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(LogError::Config(format!(
            "{key} must be true or false, got {value:?}"
        ))),
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if path_str.starts_with("~/") || path_str.starts_with("~\\") {
                home_path.push(&path_str[2..]);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
