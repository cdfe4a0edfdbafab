//! Path resolution: where Ghostty keeps its config and themes on each
//! platform, and where we keep our own logs and caches.

use std::env;
use std::path::{Path, PathBuf};

use crate::schema::Platform;

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Locate the Ghostty config file for a platform.
///
/// Inputs:
/// - `platform`: Platform whose convention applies.
///
/// Output:
/// - macOS: `~/Library/Application Support/com.mitchellh.ghostty/config`;
///   Linux: `$XDG_CONFIG_HOME/ghostty/config` (defaulting to `~/.config`).
///
/// Details:
/// - The file may not exist yet; callers treat a missing file as an empty
///   config, and the first save creates it.
#[must_use]
pub fn ghostty_config_path(platform: Platform) -> PathBuf {
    match platform {
        Platform::MacOs => {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            Path::new(&home)
                .join("Library")
                .join("Application Support")
                .join("com.mitchellh.ghostty")
                .join("config")
        }
        Platform::Linux => xdg_base_dir("XDG_CONFIG_HOME", &[".config"])
            .join("ghostty")
            .join("config"),
    }
}

/// Theme search directories in priority order: the user's own themes first,
/// then the bundled resources.
#[must_use]
pub fn theme_dirs(platform: Platform) -> Vec<PathBuf> {
    match platform {
        Platform::MacOs => {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            vec![
                Path::new(&home)
                    .join("Library")
                    .join("Application Support")
                    .join("com.mitchellh.ghostty")
                    .join("themes"),
                PathBuf::from("/Applications/Ghostty.app/Contents/Resources/ghostty/themes"),
            ]
        }
        Platform::Linux => vec![
            xdg_base_dir("XDG_CONFIG_HOME", &[".config"])
                .join("ghostty")
                .join("themes"),
            PathBuf::from("/usr/share/ghostty/themes"),
            PathBuf::from("/usr/local/share/ghostty/themes"),
        ],
    }
}

/// Search the theme directories for a file named after the theme.
#[must_use]
pub fn theme_file(platform: Platform, name: &str) -> Option<PathBuf> {
    theme_dirs(platform)
        .into_iter()
        .map(|d| d.join(name))
        .find(|p| p.is_file())
}

/// Our own config directory: `$HOME/.config/ghostcfg` (ensured to exist),
/// with `XDG_CONFIG_HOME` as fallback base.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("ghostcfg");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("ghostcfg");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under our config dir (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
