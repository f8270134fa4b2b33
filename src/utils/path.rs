use std::path::PathBuf;

/// Environment variable that relocates the config directory (used by tests
/// and portable installs)
pub const CONFIG_DIR_ENV: &str = "GRIDLOCK_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory (~/.config/gridlock, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    get_home_dir().join(".config").join("gridlock")
}

/// Get the config file path (~/.config/gridlock/config.toml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Default location of the preferences file written by the game
pub fn get_preferences_path() -> PathBuf {
    get_config_dir().join("preferences.toml")
}

/// Directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("gridlock")
}
