//! Markdown section templating between HTML comment markers

use crate::io::error::{Result, file_system_error};
use std::path::Path;
use tracing::warn;

/// Opening and closing comments delimiting the section named `marker`
pub fn markers(marker: &str) -> (String, String) {
    (
        format!("<!-- {marker} starts -->"),
        format!("<!-- {marker} ends -->"),
    )
}

/// Replace everything between the `marker` comments with `chunk`
///
/// Non-inline chunks are wrapped in newlines so they sit on their own lines.
/// The markers themselves are kept. Returns `None` when the opening marker is
/// missing or not followed by a closing one.
pub fn replace_chunk(content: &str, marker: &str, chunk: &str, inline: bool) -> Option<String> {
    let (start, end) = markers(marker);
    let open = content.find(&start)?;
    let body_start = open + start.len();
    let close = body_start + content.get(body_start..)?.rfind(&end)?;

    let mut rewritten = String::with_capacity(content.len() + chunk.len());
    rewritten.push_str(content.get(..body_start)?);
    if inline {
        rewritten.push_str(chunk);
    } else {
        rewritten.push('\n');
        rewritten.push_str(chunk);
        rewritten.push('\n');
    }
    rewritten.push_str(content.get(close..)?);
    Some(rewritten)
}

/// Markdown image links, one per line, labelled `mondrian_<index>`
pub fn image_links<S: AsRef<str>>(targets: &[S]) -> String {
    targets
        .iter()
        .enumerate()
        .map(|(i, target)| format!("![mondrian_{i}]({})", target.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrite the `marker` section of the README at `path` in place
///
/// Returns whether the file was changed; a README without the markers is left
/// untouched.
///
/// # Errors
///
/// Returns `FileSystem` if the README cannot be read or written
pub fn update_readme(path: &Path, marker: &str, chunk: &str) -> Result<bool> {
    let content = std::fs::read_to_string(path).map_err(file_system_error(path, "read"))?;

    let Some(rewritten) = replace_chunk(&content, marker, chunk, false) else {
        warn!(path = %path.display(), marker, "README has no section markers");
        return Ok(false);
    };

    std::fs::write(path, rewritten).map_err(file_system_error(path, "write"))?;
    Ok(true)
}
