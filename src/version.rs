use chrono::{DateTime, Local, TimeZone};
use log::{debug, warn};
use std::path::Path;
use std::process::Command;

pub const BUILD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Version and build date for one invocation; both artifacts embed the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub version: String,
    pub build_date: String,
}

impl Stamp {
    pub fn new(version: impl Into<String>, build_date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            build_date: build_date.into(),
        }
    }

    /// Resolve both values against the checkout at `root`, using the local clock.
    pub fn resolve(git: &str, root: &Path, fallback: &str) -> Self {
        Self::new(resolve_version(git, root, fallback), build_date(&Local::now()))
    }
}

/// Runs `git describe --tags --always --dirty` in `root`.
///
/// Returns `None` when git is missing, `root` is not a checkout, there are no
/// commits, or the output is unusable.
pub fn describe(git: &str, root: &Path) -> Option<String> {
    let output = match Command::new(git)
        .args(["describe", "--tags", "--always", "--dirty"])
        .current_dir(root)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            warn!("Failed to run {} describe in {}: {}", git, root.display(), e);
            return None;
        }
    };

    if !output.status.success() {
        debug!(
            "{} describe exited with {}: {}",
            git,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let describe = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if describe.is_empty() { None } else { Some(describe) }
}

/// Never fails: anything `describe` cannot resolve becomes `fallback`.
pub fn resolve_version(git: &str, root: &Path, fallback: &str) -> String {
    describe(git, root).unwrap_or_else(|| {
        warn!("Could not resolve version in {}, using {:?}", root.display(), fallback);
        fallback.to_string()
    })
}

pub fn build_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(BUILD_DATE_FORMAT).to_string()
}
