use std::path::PathBuf;
use crate::core::error::NavigatorError;

pub fn get_config_directory() -> Result<PathBuf, NavigatorError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => {
            match std::env::var("XDG_CONFIG_HOME") {
                Ok(dir) => PathBuf::from(dir),
                Err(_) => dirs::home_dir()
                    .ok_or(NavigatorError::ConfigDirectoryNotFound)?
                    .join(".config"),
            }
        },
        "macos" => {
            dirs::home_dir()
                .ok_or(NavigatorError::ConfigDirectoryNotFound)?
                .join("Library/Application Support")
        },
        _ => dirs::config_dir().ok_or(NavigatorError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("swapi-navigator"))
}
