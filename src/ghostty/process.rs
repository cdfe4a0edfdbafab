//! Locating the running Ghostty process and asking it to reload its config.
//!
//! Ghostty re-reads its config file on `SIGUSR2`. We find its PIDs with
//! `pgrep -a`: ghostcfg typically runs *inside* Ghostty, which makes Ghostty
//! an ancestor process, and pgrep excludes ancestors unless `-a` is given.

use std::fmt;
use std::process::Command;

/// No running Ghostty process could be found to signal.
///
/// Always a warning at the UI: the save itself has already succeeded.
#[derive(Debug, PartialEq, Eq)]
pub struct ProcessNotFound;

impl fmt::Display for ProcessNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no running ghostty process found")
    }
}

impl std::error::Error for ProcessNotFound {}

/// Seam between the editor and the running emulator. The TUI only ever talks
/// to this trait; tests substitute their own recording implementations.
pub trait ReloadGateway {
    /// Ask the running Ghostty to re-read its config file.
    fn notify_reload(&self) -> Result<(), ProcessNotFound>;
}

/// Production gateway: `pgrep` + `SIGUSR2`.
#[derive(Debug, Default)]
pub struct SignalReload;

/// Gateway used with `--no-reload`: pretends every reload succeeded.
#[derive(Debug, Default)]
pub struct NoopReload;

impl ReloadGateway for NoopReload {
    fn notify_reload(&self) -> Result<(), ProcessNotFound> {
        Ok(())
    }
}

/// Parse `pgrep -a` output ("pid cmdline" per line) into PIDs.
fn parse_pids(out: &str) -> Vec<i32> {
    out.lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|tok| tok.parse::<i32>().ok())
        .collect()
}

/// What: Find running Ghostty PIDs.
///
/// Inputs: none.
///
/// Output:
/// - PIDs from `pgrep -a -x ghostty`, falling back to the looser
///   `pgrep -a ghostty`; empty when neither finds anything or pgrep is
///   unavailable.
#[must_use]
pub fn ghostty_pids() -> Vec<i32> {
    for args in [&["-a", "-x", "ghostty"][..], &["-a", "ghostty"][..]] {
        let Ok(output) = Command::new("pgrep").args(args).output() else {
            continue;
        };
        let pids = parse_pids(&String::from_utf8_lossy(&output.stdout));
        if !pids.is_empty() {
            return pids;
        }
    }
    Vec::new()
}

impl ReloadGateway for SignalReload {
    /// What: Deliver `SIGUSR2` to every running Ghostty process.
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - `Ok(())` when at least one PID was found; per-PID delivery failures
    ///   (process exited between pgrep and kill, permissions) are logged and
    ///   skipped.
    fn notify_reload(&self) -> Result<(), ProcessNotFound> {
        let pids = ghostty_pids();
        if pids.is_empty() {
            return Err(ProcessNotFound);
        }
        for pid in pids {
            #[cfg(unix)]
            {
                use nix::sys::signal::{kill, Signal};
                use nix::unistd::Pid;
                if let Err(err) = kill(Pid::from_raw(pid), Signal::SIGUSR2) {
                    tracing::warn!(pid, %err, "failed to signal ghostty");
                } else {
                    tracing::info!(pid, "sent SIGUSR2 to ghostty");
                }
            }
            #[cfg(not(unix))]
            {
                tracing::warn!(pid, "config reload signaling is unix-only");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_parse_pgrep_output() {
        let out = "1234 /usr/bin/ghostty\n5678 ghostty --some-flag\n";
        assert_eq!(parse_pids(out), vec![1234, 5678]);
        assert_eq!(parse_pids(""), Vec::<i32>::new());
        // Malformed lines are skipped.
        assert_eq!(parse_pids("garbage line\n42 ghostty\n"), vec![42]);
    }

    #[test]
    fn process_noop_gateway_always_succeeds() {
        assert_eq!(NoopReload.notify_reload(), Ok(()));
    }
}
