//! Registry-import text rendering
//!
//! Turns a [`RegistrationDocument`] into the text format `reg.exe import`
//! consumes: header line, blank-line-separated key blocks, CRLF endings,
//! trailing newline. Equal documents render to identical bytes, so repeated
//! installs rewrite the same keys with the same values.

use crate::document::{AssociationEntry, MenuMode, RegistrationDocument, VERB_KEY};

/// First line of every registry-import file
pub const REG_HEADER: &str = "Windows Registry Editor Version 5.00";

/// Hive prefix for per-extension handler keys
const ASSOC_ROOT: &str = r"HKEY_CLASSES_ROOT\SystemFileAssociations";

/// Render the document to registry-import text
pub fn render(document: &RegistrationDocument) -> String {
    let mut blocks = vec![REG_HEADER.to_string()];

    for entry in &document.entries {
        match document.mode {
            MenuMode::Simple => push_simple_blocks(&mut blocks, entry),
            MenuMode::MultiClient => push_submenu_blocks(&mut blocks, entry),
        }
    }

    let mut text = blocks.join("\r\n\r\n");
    text.push_str("\r\n");
    text
}

/// Handler key for one extension, without surrounding brackets
fn handler_key(extension: &str) -> String {
    format!(r"{ASSOC_ROOT}\.{extension}\shell\{VERB_KEY}")
}

fn push_simple_blocks(blocks: &mut Vec<String>, entry: &AssociationEntry) {
    let key = handler_key(&entry.extension);
    blocks.push(
        [
            format!("[{key}]"),
            format!("@=\"{}\"", escape_value(&entry.label)),
            format!("\"Icon\"=\"{}\"", escape_value(&entry.icon)),
        ]
        .join("\r\n"),
    );
    blocks.push(
        [
            format!("[{key}\\command]"),
            format!("@=\"{}\"", escape_value(&entry.command)),
        ]
        .join("\r\n"),
    );
}

fn push_submenu_blocks(blocks: &mut Vec<String>, entry: &AssociationEntry) {
    let key = handler_key(&entry.extension);
    blocks.push(
        [
            format!("[{key}]"),
            format!("\"MUIVerb\"=\"{}\"", escape_value(&entry.label)),
            format!("\"Icon\"=\"{}\"", escape_value(&entry.icon)),
            "\"SubCommands\"=\"\"".to_string(),
        ]
        .join("\r\n"),
    );

    for sub in &entry.sub_entries {
        blocks.push(
            [
                format!("[{key}\\shell\\{}]", sub.key),
                format!("\"MUIVerb\"=\"{}\"", escape_value(&sub.label)),
            ]
            .join("\r\n"),
        );
        blocks.push(
            [
                format!("[{key}\\shell\\{}\\command]", sub.key),
                format!("@=\"{}\"", escape_value(&sub.command)),
            ]
            .join("\r\n"),
        );
    }
}

/// Escape a string value: backslashes double first, then quotes. Key paths
/// are written verbatim, the format only escapes inside quoted values.
fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
