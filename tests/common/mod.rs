//! Common test utilities for encoder-register integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Read an exported .reg file back to text, checking the UTF-16LE BOM
pub fn read_reg_file(path: &Path) -> String {
    let bytes = std::fs::read(path).expect("Failed to read .reg file");
    assert_eq!(&bytes[..2], &[0xFF, 0xFE], "missing UTF-16LE BOM");
    let units: Vec<u16> = bytes[2..]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).expect(".reg file was not valid UTF-16")
}

/// A fake install directory: stub encoder executable plus configuration root
pub struct TestInstallRoot {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the install root
    pub path: PathBuf,
}

impl TestInstallRoot {
    /// Create an install root with a stub encoder executable
    pub fn new() -> Self {
        let root = Self::without_encoder();
        std::fs::write(root.exe_path(), b"encoder stub").expect("Failed to write encoder stub");
        root
    }

    /// Create an install root without the encoder executable
    pub fn without_encoder() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Path of the stub encoder executable
    pub fn exe_path(&self) -> PathBuf {
        self.path.join("encoder-gui.exe")
    }

    /// Path of the configuration root
    pub fn config_root(&self) -> PathBuf {
        self.path.join("config")
    }

    /// Create a client profile carrying both settings files
    pub fn add_profile(&self, name: &str) -> PathBuf {
        let dir = self.config_root().join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create profile directory");
        std::fs::write(dir.join("defaults.toml"), "fps = 25\n")
            .expect("Failed to write defaults.toml");
        std::fs::write(dir.join("codes.toml"), "start = \"10:00:00:00\"\n")
            .expect("Failed to write codes.toml");
        dir
    }

    /// Create a directory under the configuration root missing one settings file
    #[allow(dead_code)]
    pub fn add_incomplete_profile(&self, name: &str) -> PathBuf {
        let dir = self.config_root().join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create profile directory");
        std::fs::write(dir.join("defaults.toml"), "fps = 25\n")
            .expect("Failed to write defaults.toml");
        dir
    }
}
