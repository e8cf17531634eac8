use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::version::Stamp;

/// Result of a documentation update attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeUpdate {
    /// Number of marker lines rewritten.
    Updated(usize),
    NoMarker,
}

pub fn version_line(marker: &str, stamp: &Stamp) -> String {
    format!("{}{} (Built: {})", marker, stamp.version, stamp.build_date)
}

/// Replaces every line starting with `marker`, keeping its line ending.
///
/// Returns `None` when no line matches; all other bytes are untouched.
pub fn rewrite_version_lines(content: &str, marker: &str, stamp: &Stamp) -> Option<(String, usize)> {
    let replacement = version_line(marker, stamp);
    let mut rewritten = String::with_capacity(content.len() + replacement.len());
    let mut replaced = 0;

    for line in content.split_inclusive('\n') {
        if line.starts_with(marker) {
            let body_len = line.trim_end_matches(['\r', '\n']).len();
            rewritten.push_str(&replacement);
            rewritten.push_str(&line[body_len..]);
            replaced += 1;
        } else {
            rewritten.push_str(line);
        }
    }

    (replaced > 0).then_some((rewritten, replaced))
}

/// Rewrites the marker line(s) of the documentation file at `path`.
///
/// The file is only written back when something matched.
pub fn update_readme(path: &Path, marker: &str, stamp: &Stamp) -> Result<ReadmeUpdate> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    match rewrite_version_lines(&content, marker, stamp) {
        Some((rewritten, replaced)) => {
            replace_file(path, &rewritten)?;
            info!("Updated {} version line(s) in {}", replaced, path.display());
            Ok(ReadmeUpdate::Updated(replaced))
        }
        None => {
            info!("No line starting with {:?} in {}, leaving it unchanged", marker, path.display());
            Ok(ReadmeUpdate::NoMarker)
        }
    }
}

/// Sibling path the new contents are staged in before the rename.
pub fn staging_path(path: &Path) -> PathBuf {
    let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    path.with_file_name(format!(".{}.fwstamp-tmp", file_name))
}

/// Stages `contents` next to `path` and renames it over the original, so a
/// failed write never leaves `path` truncated.
fn replace_file(path: &Path, contents: &str) -> Result<()> {
    let staging = staging_path(path);

    if let Err(e) = fs::write(&staging, contents) {
        let _ = fs::remove_file(&staging);
        return Err(e).with_context(|| format!("Failed to write {}", staging.display()));
    }

    if let Ok(metadata) = fs::metadata(path) {
        let _ = fs::set_permissions(&staging, metadata.permissions());
    }

    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
    }

    Ok(())
}
