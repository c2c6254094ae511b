//! Typed registration document model
//!
//! The document describes every context-menu entry for one install run.
//! Building it is a pure transformation of the encoder path and the
//! discovered client profiles; serialization to registry-import text lives
//! in [`crate::render`].

use std::path::Path;

use crate::error::{Result, SetupError};
use crate::profiles::ClientProfile;

/// File extensions the encoder is registered for, in output order
pub const EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];

/// Top-level context-menu caption
pub const MENU_LABEL: &str = "Open with Encoder";

/// Caption of the no-profile submenu entry
pub const DEFAULT_LABEL: &str = "Default";

/// Registry verb key holding the handler under each extension
pub const VERB_KEY: &str = "Encoder.Open";

/// Menu layout, selected from the number of discovered client profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// One direct verb per extension
    Simple,
    /// Cascading submenu with a default entry plus one entry per client
    MultiClient,
}

/// One submenu entry in multi-client mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubEntry {
    /// Key segment under `shell\`; the numeric prefix fixes the display
    /// order since Explorer sorts subcommand keys by name. Its width covers
    /// the highest position so the sort stays stable at any profile count
    pub key: String,
    /// Caption shown in the submenu
    pub label: String,
    /// Command line executed when the entry is selected
    pub command: String,
}

/// Handler declaration for one file extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationEntry {
    /// Extension without the leading dot
    pub extension: String,
    /// Menu caption for the handler itself
    pub label: String,
    /// Icon source, the encoder executable
    pub icon: String,
    /// Direct command in simple mode; empty when sub-entries are present
    pub command: String,
    /// Submenu entries, empty in simple mode
    pub sub_entries: Vec<SubEntry>,
}

/// Complete registration for one install run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDocument {
    pub mode: MenuMode,
    pub entries: Vec<AssociationEntry>,
}

impl RegistrationDocument {
    /// Build the document for the given encoder executable and profiles.
    ///
    /// Pure: no filesystem or registry access. With no profiles every
    /// extension gets one direct verb; otherwise every extension gets a
    /// submenu listing [`DEFAULT_LABEL`] first and then each client in the
    /// given order. Fails with [`SetupError::InvalidProfileName`] before
    /// anything else happens when a profile name cannot be embedded in a
    /// registry key or command line.
    pub fn build(exe_path: &Path, profiles: &[ClientProfile]) -> Result<Self> {
        for profile in profiles {
            validate_profile_name(&profile.name)?;
        }

        let exe = exe_path.display().to_string();
        let mode = if profiles.is_empty() {
            MenuMode::Simple
        } else {
            MenuMode::MultiClient
        };

        let entries = EXTENSIONS
            .iter()
            .map(|ext| match mode {
                MenuMode::Simple => AssociationEntry {
                    extension: (*ext).to_string(),
                    label: MENU_LABEL.to_string(),
                    icon: exe.clone(),
                    command: open_command(&exe),
                    sub_entries: Vec::new(),
                },
                MenuMode::MultiClient => AssociationEntry {
                    extension: (*ext).to_string(),
                    label: MENU_LABEL.to_string(),
                    icon: exe.clone(),
                    command: String::new(),
                    sub_entries: sub_entries_for(&exe, profiles),
                },
            })
            .collect();

        Ok(Self { mode, entries })
    }
}

/// Command line opening the selected file with default settings
fn open_command(exe: &str) -> String {
    format!("\"{exe}\" \"%1\"")
}

/// Command line opening the selected file with a client profile
fn client_command(exe: &str, client: &str) -> String {
    format!("\"{exe}\" --client {client} \"%1\"")
}

fn sub_entries_for(exe: &str, profiles: &[ClientProfile]) -> Vec<SubEntry> {
    let width = key_prefix_width(profiles.len());
    let mut subs = Vec::with_capacity(profiles.len() + 1);
    subs.push(SubEntry {
        key: format!("{:0width$}_default", 0),
        label: DEFAULT_LABEL.to_string(),
        command: open_command(exe),
    });
    for (index, profile) in profiles.iter().enumerate() {
        let position = index + 1;
        subs.push(SubEntry {
            key: format!("{position:0width$}_{}", profile.name),
            label: profile.name.clone(),
            command: client_command(exe, &profile.name),
        });
    }
    subs
}

/// Keys sort as text, so the prefix must be at least as wide as the highest
/// position; "100_" would otherwise land before "99_"
fn key_prefix_width(count: usize) -> usize {
    count.to_string().len().max(2)
}

/// A profile name lands in three places: a registry key segment, a quoted
/// menu caption, and an unquoted `--client` argument. Reject names that any
/// of those cannot carry; sanitizing instead would register a menu entry
/// whose `--client` argument matches no directory the encoder can find.
fn validate_profile_name(name: &str) -> Result<()> {
    const STRUCTURAL: &[char] = &['\\', '/', '"', '[', ']'];

    let unsafe_name = name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || STRUCTURAL.contains(&c));

    if unsafe_name {
        return Err(SetupError::InvalidProfileName {
            name: name.to_string(),
        });
    }
    Ok(())
}
