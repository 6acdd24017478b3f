use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Keep diagnostics latched across prompt iterations instead of clearing
    /// them before each new line. Off by default; the latch mirrors an older
    /// behavior some scripts relied on.
    #[serde(default)]
    pub persist_errors: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    String::from("> ")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            persist_errors: false,
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        match fs::read_to_string(Self::config_path()) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    pub fn save(&self) -> io::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)
    }

    pub fn config_path() -> PathBuf {
        if let Ok(custom) = env::var("LOXC_CONFIG") {
            return PathBuf::from(custom);
        }
        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };
        PathBuf::from(home.unwrap_or_else(|_| String::from(".")))
            .join(".loxc")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_clear_errors_each_prompt() {
        let config = Config::default();
        assert!(!config.persist_errors);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(!config.persist_errors);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            persist_errors: true,
            prompt: String::from("lox> "),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert!(back.persist_errors);
        assert_eq!(back.prompt, "lox> ");
    }
}
