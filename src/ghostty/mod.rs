//! Boundary to everything outside this process: the Ghostty config path,
//! the running Ghostty process, the `ghostty` CLI, and theme files on disk.

/// Option documentation fetched from the `ghostty` CLI, with a JSON cache.
pub mod docs;
/// Installed monospace fonts via `fc-list`, for the font picker.
pub mod fonts;
/// Platform path resolution for Ghostty and for our own state.
pub mod paths;
/// Finding the running Ghostty process and signaling a config reload.
pub mod process;
/// Theme catalog: listing, locating and parsing Ghostty theme files.
pub mod themes;

pub use process::{NoopReload, ProcessNotFound, ReloadGateway, SignalReload};
pub use themes::{Theme, Variant};

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    static LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
}
