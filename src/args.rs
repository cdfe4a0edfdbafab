//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// ghostcfg - A TUI for browsing and editing the Ghostty terminal configuration
#[derive(Parser, Debug)]
#[command(name = "ghostcfg")]
#[command(version)]
#[command(about = "Browse and edit the Ghostty terminal configuration with live theme preview", long_about = None)]
pub struct Args {
    /// Edit this config file instead of the platform default
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Never signal the running Ghostty to reload
    #[arg(long)]
    pub no_reload: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn args_defaults_and_overrides() {
        let args = Args::parse_from(["ghostcfg"]);
        assert_eq!(args.config, None);
        assert!(!args.no_reload);
        assert_eq!(args.log_level, "info");

        let args = Args::parse_from([
            "ghostcfg",
            "--config",
            "/tmp/config",
            "--no-reload",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("/tmp/config")));
        assert!(args.no_reload);
        assert_eq!(args.log_level, "debug");
    }
}
