//! Where the settings editor keeps its files.
//!
//! Debug builds and `cargo run` keep everything in the working directory. Installed
//! builds use the per-user directories reported by `dirs`, under a `mailroom` folder.

use std::path::PathBuf;

const APP_DIR: &str = "mailroom";

/// True for debug builds and anything launched through cargo
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Directory holding `config.json`
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Directory holding the profile and logs
pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }
    dirs::data_dir().map(|p| p.join(APP_DIR))
}

pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.json"))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

/// Default location of the locally stored profile
pub fn profile_file() -> PathBuf {
    data_dir()
        .map(|p| p.join("profile.json"))
        .unwrap_or_else(|| PathBuf::from("profile.json"))
}

pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Create the config and data directories if they are missing
pub fn ensure_directories() -> std::io::Result<()> {
    for dir in [config_dir(), data_dir()].into_iter().flatten() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_has_json_extension() {
        let path = config_file();
        assert!(path.to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn test_dev_mode_returns_local_paths() {
        // Tests always run through cargo
        assert!(is_dev_mode());
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
        assert_eq!(profile_file(), PathBuf::from("./profile.json"));
        assert_eq!(logs_dir(), PathBuf::from("./logs"));
    }

    #[test]
    fn test_ensure_directories_in_dev_mode() {
        assert!(ensure_directories().is_ok());
    }
}
