//! Registry import and .reg file export
//!
//! The rendered text reaches the registry through `reg.exe import`, which
//! applies the whole file in one call and reports failure through its exit
//! status. The text is staged in a uniquely named temporary file, so
//! concurrent installer runs never clobber each other's document; the file
//! is removed when the handle drops.

use std::path::Path;

use crate::error::{Result, SetupError};

/// Recognizable prefix of the staged temporary .reg file
#[cfg(windows)]
const TEMP_PREFIX: &str = "encoder-menu-";

/// On-disk form of the rendered text: UTF-16LE with a BOM, the registry
/// editor's native .reg encoding. `reg.exe` reads a BOM-less file as the
/// system ANSI codepage, which garbles non-ASCII profile names.
fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Write the rendered text to `dest` for later import
pub fn export(reg_text: &str, dest: &Path) -> Result<()> {
    std::fs::write(dest, encode_utf16le(reg_text)).map_err(|e| SetupError::WriteFailed {
        path: dest.display().to_string(),
        reason: e.to_string(),
    })
}

/// Import the rendered text into the registry.
///
/// Requires an elevated process: the handler keys live under
/// `HKEY_CLASSES_ROOT`. A failed import leaves whatever `reg.exe` already
/// applied in place; re-running with the same document rewrites the same
/// keys, so recovery is another import.
#[cfg(windows)]
pub fn import(reg_text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Command;

    let mut reg_file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".reg")
        .tempfile()?;
    reg_file.write_all(&encode_utf16le(reg_text))?;
    reg_file.flush()?;

    let output = Command::new("reg")
        .arg("import")
        .arg(reg_file.path())
        .output()
        .map_err(|e| SetupError::ImportFailed {
            reason: format!("could not run reg.exe: {e}"),
        })?;

    if !output.status.success() {
        return Err(SetupError::ImportFailed {
            reason: import_failure_reason(&output),
        });
    }
    Ok(())
}

/// Importing is a Windows-only operation; other targets can still generate,
/// preview and export the document
#[cfg(not(windows))]
pub fn import(_reg_text: &str) -> Result<()> {
    Err(SetupError::UnsupportedPlatform)
}

#[cfg(windows)]
fn import_failure_reason(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        format!("reg.exe exited with {}", output.status)
    } else {
        trimmed.to_string()
    }
}
