//! Client profile discovery
//!
//! The encoder keeps one directory per client under the configuration root,
//! each carrying the client's default settings and timecode tables. The
//! installer only needs the names: they become submenu entries and
//! `--client` arguments.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Settings file every client profile must carry
pub const DEFAULTS_FILE: &str = "defaults.toml";

/// Timecode file every client profile must carry
pub const CODES_FILE: &str = "codes.toml";

/// A per-client configuration directory found under the config root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientProfile {
    /// Directory base name; doubles as the menu caption and the
    /// `--client` argument
    pub name: String,
    /// Absolute path of the profile directory
    pub path: PathBuf,
}

/// List client profiles directly under `config_root`, sorted by name.
///
/// A subdirectory qualifies only when it directly contains both
/// [`DEFAULTS_FILE`] and [`CODES_FILE`]; anything else under the root is
/// ignored. A missing or unreadable root yields an empty list. The encoder
/// works without client profiles, so this scan never fails.
pub fn scan_profiles(config_root: &Path) -> Vec<ClientProfile> {
    let mut profiles: Vec<ClientProfile> = WalkDir::new(config_root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .filter(|entry| is_profile_dir(entry.path()))
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            Some(ClientProfile {
                name,
                path: entry.path().to_path_buf(),
            })
        })
        .collect();

    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    profiles
}

fn is_profile_dir(path: &Path) -> bool {
    path.join(DEFAULTS_FILE).is_file() && path.join(CODES_FILE).is_file()
}
