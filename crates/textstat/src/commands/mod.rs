//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use std::io::Read;

pub mod analyze;
pub mod case;
pub mod clean;
pub mod count;
pub mod info;
pub mod keywords;
pub mod time;
pub mod watch;

/// Read input text and validate its size against the configured limit.
///
/// `-` reads from stdin. For files, the size is checked via metadata
/// before reading into memory; stdin is checked after reading.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        if let Some(max) = max_bytes {
            let size = content.len();
            if size > max {
                anyhow::bail!("input too large: stdin is {size} bytes (limit: {max} bytes)");
            }
        }
        return Ok(content);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Strip markdown to prose when the input is a `.md` file.
///
/// Counting raw markdown would treat fences and link URLs as words,
/// so analysis commands share this preprocessing step.
pub fn prose_for_analysis(path: &Utf8Path, content: String) -> String {
    if path.extension() == Some("md") {
        textstat_core::markdown::strip_to_prose(&content)
    } else {
        content
    }
}
