//! Platform-specific resolution of the command used to open a bookmark.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::api::OpenError;

/// Opener candidates per platform, tried in order.
const OPENERS: &[(&str, &[&str])] = &[
    ("macos", &["open"]),
    ("windows", &["explorer.exe"]),
    ("linux", &["xdg-open"]),
];

/// Hands bookmark URLs to the OS's default handler.
pub struct Launcher {
    platform: String,
    candidates: &'static [&'static str],
}

impl Launcher {
    /// Builds a launcher for the current platform.
    pub fn detect() -> Self {
        Self::for_platform(env::consts::OS)
    }

    /// Builds a launcher for a named platform. Unrecognized platforms get an
    /// empty candidate list and fail at resolve time.
    pub fn for_platform(platform: &str) -> Self {
        let candidates = OPENERS
            .iter()
            .find(|(os, _)| *os == platform)
            .map(|(_, candidates)| *candidates)
            .unwrap_or(&[]);
        Self {
            platform: platform.to_string(),
            candidates,
        }
    }

    /// Picks the first candidate present on `PATH`.
    pub fn resolve(&self) -> Result<&'static str, OpenError> {
        let path_var = env::var_os("PATH").unwrap_or_default();
        self.candidates
            .iter()
            .copied()
            .find(|candidate| find_in_path(candidate, &path_var).is_some())
            .ok_or_else(|| OpenError::NoOpener(self.platform.clone()))
    }

    /// Opens `url` with the resolved opener as a subprocess, blocking until
    /// the opener returns. The opener typically hands off to the OS's shell
    /// integration and exits immediately; its output is not captured.
    pub fn open(&self, url: &str) -> Result<(), OpenError> {
        let opener = self.resolve()?;
        run_opener(opener, url)
    }
}

/// Runs `command` with the URL as its sole argument and checks its exit
/// status.
fn run_opener(command: &str, url: &str) -> Result<(), OpenError> {
    let status = Command::new(command)
        .arg(url)
        .status()
        .map_err(|e| OpenError::Launch {
            command: command.to_string(),
            source: e,
        })?;

    if !status.success() {
        return Err(OpenError::Failed {
            command: command.to_string(),
            status,
        });
    }
    Ok(())
}

/// Searches the given `PATH` value for an executable named `name`.
fn find_in_path(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
