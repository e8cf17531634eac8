use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::version::Stamp;

/// Renders the generated header; identical stamps give identical bytes.
pub fn render_header(stamp: &Stamp) -> String {
    format!(
        "#ifndef VERSION_H\n\
         #define VERSION_H\n\
         #define FIRMWARE_VERSION \"{}\"\n\
         #define BUILD_DATE \"{}\"\n\
         #endif // VERSION_H\n",
        escape_c_string(&stamp.version),
        escape_c_string(&stamp.build_date),
    )
}

/// Overwrites `path` with the rendered header. Parent directories are not
/// created; a missing include directory is an error.
pub fn write_header(path: &Path, stamp: &Stamp) -> Result<()> {
    fs::write(path, render_header(stamp)).with_context(|| format!("Failed to write header {}", path.display()))?;

    info!("Wrote {} with version {}", path.display(), stamp.version);
    Ok(())
}

fn escape_c_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
