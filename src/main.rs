//! encoder-register - Explorer context-menu installer for the encoder
//!
//! Registers the encoder GUI as a right-click "open with" handler for video
//! files in the Windows registry, adapting the menu layout to the client
//! profiles found next to the installer.

use clap::Parser;

mod cli;
mod commands;
mod document;
mod environment;
mod error;
mod profiles;
mod registry;
mod render;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::install::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
