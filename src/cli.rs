//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// encoder-register - Explorer context-menu installer for the encoder
#[derive(Parser, Debug)]
#[command(
    name = "encoder-register",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Register the encoder in the Explorer context menu for video files",
    long_about = "Registers encoder-gui.exe as a right-click handler for video files \
                  (mp4, mov, avi, mkv). With client profiles under the configuration root \
                  every extension gets a submenu with one entry per client; without \
                  profiles a single entry opens the file with default settings.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  encoder-register                     \x1b[90m# Register encoder-gui.exe next to this installer\x1b[0m\n   \
                  encoder-register --dry-run           \x1b[90m# Preview the registry entries, change nothing\x1b[0m\n   \
                  encoder-register --export menu.reg   \x1b[90m# Write the .reg file for later import\x1b[0m\n   \
                  encoder-register -y --config D:\\cfg  \x1b[90m# Scan another profile directory, skip the prompt\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Encoder executable to register (defaults to encoder-gui.exe next to this installer)
    #[arg(long, value_name = "FILE")]
    pub exe: Option<PathBuf>,

    /// Directory scanned for client profiles (defaults to config/ next to this installer)
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Print the registry entries without touching the registry
    #[arg(long)]
    pub dry_run: bool,

    /// Write the .reg file to this path instead of importing it
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Skip the confirmation prompt before importing
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::try_parse_from(["encoder-register"]).unwrap();
        assert_eq!(cli.exe, None);
        assert_eq!(cli.config, None);
        assert!(!cli.dry_run);
        assert_eq!(cli.export, None);
        assert!(!cli.yes);
    }

    #[test]
    fn test_cli_parsing_dry_run() {
        let cli = Cli::try_parse_from(["encoder-register", "--dry-run"]).unwrap();
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_parsing_overrides() {
        let exe_path = if cfg!(windows) {
            r"C:\Encoder\encoder-gui.exe"
        } else {
            "/opt/encoder/encoder-gui.exe"
        };
        let config_path = if cfg!(windows) {
            r"D:\profiles"
        } else {
            "/srv/profiles"
        };

        let cli = Cli::try_parse_from([
            "encoder-register",
            "--exe",
            exe_path,
            "--config",
            config_path,
        ])
        .unwrap();
        assert_eq!(cli.exe, Some(PathBuf::from(exe_path)));
        assert_eq!(cli.config, Some(PathBuf::from(config_path)));
    }

    #[test]
    fn test_cli_parsing_export() {
        let cli = Cli::try_parse_from(["encoder-register", "--export", "menu.reg"]).unwrap();
        assert_eq!(cli.export, Some(PathBuf::from("menu.reg")));
    }

    #[test]
    fn test_cli_parsing_yes_short_and_long() {
        let short = Cli::try_parse_from(["encoder-register", "-y"]).unwrap();
        assert!(short.yes);

        let long = Cli::try_parse_from(["encoder-register", "--yes"]).unwrap();
        assert!(long.yes);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        let result = Cli::try_parse_from(["encoder-register", "--uninstall"]);
        assert!(result.is_err());
    }
}
