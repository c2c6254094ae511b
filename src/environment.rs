//! Installation environment resolution
//!
//! The installer ships in the encoder's directory: the encoder executable and
//! the configuration root are located relative to the installer's own path,
//! with CLI overrides for both. Everything here is read-only filesystem
//! inspection; resolution happens once and the result is passed around as an
//! immutable value.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};

/// File name of the encoder executable expected next to this installer
pub const ENCODER_EXE: &str = "encoder-gui.exe";

/// Directory name of the configuration root expected next to this installer
pub const CONFIG_DIR_NAME: &str = "config";

/// Resolved installation environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallEnv {
    /// Absolute path of the encoder executable, embedded in registry commands
    pub exe_path: PathBuf,
    /// Directory scanned for client profiles; may not exist
    pub config_root: PathBuf,
}

impl InstallEnv {
    /// Resolve the environment from the installer's own location.
    ///
    /// Fails with [`SetupError::MissingExecutable`] when the encoder
    /// executable is not a regular file. Nothing else is checked here: a
    /// missing configuration root is a normal outcome handled by the scanner.
    pub fn resolve(
        exe_override: Option<PathBuf>,
        config_override: Option<PathBuf>,
    ) -> Result<Self> {
        let base_dir = installer_dir()?;
        Self::from_dir(&base_dir, exe_override, config_override)
    }

    /// Resolve against an explicit base directory
    pub fn from_dir(
        base_dir: &Path,
        exe_override: Option<PathBuf>,
        config_override: Option<PathBuf>,
    ) -> Result<Self> {
        let exe_path = exe_override.unwrap_or_else(|| base_dir.join(ENCODER_EXE));
        if !exe_path.is_file() {
            return Err(SetupError::MissingExecutable {
                path: exe_path.display().to_string(),
            });
        }

        // dunce keeps the drive-letter form; \\?\ paths inside registry
        // command values break Explorer's invocation
        let exe_path = dunce::canonicalize(&exe_path)?;
        let config_root = config_override.unwrap_or_else(|| base_dir.join(CONFIG_DIR_NAME));

        Ok(Self {
            exe_path,
            config_root,
        })
    }
}

/// Directory containing the running installer binary
fn installer_dir() -> Result<PathBuf> {
    let own_exe = env::current_exe()?;
    own_exe
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| SetupError::IoError {
            message: format!("Installer path has no parent directory: {}", own_exe.display()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_encoder_stub(dir: &Path) -> PathBuf {
        let exe = dir.join(ENCODER_EXE);
        std::fs::write(&exe, b"stub").unwrap();
        exe
    }

    #[test]
    fn test_from_dir_finds_sibling_encoder() {
        let temp = TempDir::new().unwrap();
        let exe = write_encoder_stub(temp.path());

        let env = InstallEnv::from_dir(temp.path(), None, None).unwrap();
        assert_eq!(env.exe_path, dunce::canonicalize(&exe).unwrap());
        assert_eq!(env.config_root, temp.path().join(CONFIG_DIR_NAME));
    }

    #[test]
    fn test_from_dir_missing_encoder() {
        let temp = TempDir::new().unwrap();

        let result = InstallEnv::from_dir(temp.path(), None, None);
        match result {
            Err(SetupError::MissingExecutable { path }) => {
                assert!(path.contains(ENCODER_EXE));
            }
            other => panic!("Expected MissingExecutable, got {other:?}"),
        }
    }

    #[test]
    fn test_from_dir_exe_override() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom-encoder.exe");
        std::fs::write(&custom, b"stub").unwrap();

        let env = InstallEnv::from_dir(temp.path(), Some(custom.clone()), None).unwrap();
        assert_eq!(env.exe_path, dunce::canonicalize(&custom).unwrap());
    }

    #[test]
    fn test_from_dir_exe_override_missing() {
        let temp = TempDir::new().unwrap();
        write_encoder_stub(temp.path());

        let missing = temp.path().join("elsewhere.exe");
        let result = InstallEnv::from_dir(temp.path(), Some(missing), None);
        match result {
            Err(SetupError::MissingExecutable { path }) => {
                assert!(path.contains("elsewhere.exe"));
            }
            other => panic!("Expected MissingExecutable, got {other:?}"),
        }
    }

    #[test]
    fn test_from_dir_config_override() {
        let temp = TempDir::new().unwrap();
        write_encoder_stub(temp.path());

        let custom_config = temp.path().join("profiles");
        let env =
            InstallEnv::from_dir(temp.path(), None, Some(custom_config.clone())).unwrap();
        assert_eq!(env.config_root, custom_config);
    }

    #[test]
    fn test_config_root_may_not_exist() {
        let temp = TempDir::new().unwrap();
        write_encoder_stub(temp.path());

        let env = InstallEnv::from_dir(temp.path(), None, None).unwrap();
        assert!(!env.config_root.exists());
    }
}
