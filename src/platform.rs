// linkboard platform paths
// Config: ~/.config/linkboard            (Linux, or $XDG_CONFIG_HOME)
//         ~/Library/Application Support/Linkboard   (macOS)
//         %APPDATA%/Linkboard            (Windows)
// Data mirrors the platform data-dir conventions.

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
}

/// Returns the platform-specific configuration directory for linkboard.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("linkboard")
        } else {
            home_dir().join(".config").join("linkboard")
        }
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("Linkboard")
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\"));
        PathBuf::from(appdata).join("Linkboard")
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".linkboard")
    }
}

/// Returns the platform-specific data directory for linkboard.
///
/// This is where the local storage blobs (`bookmarks.json`,
/// `groups.json`, `tabs.json`) live by default.
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            PathBuf::from(xdg).join("linkboard")
        } else {
            home_dir().join(".local").join("share").join("linkboard")
        }
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("Linkboard")
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\"));
        PathBuf::from(appdata).join("Linkboard")
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".linkboard")
    }
}
