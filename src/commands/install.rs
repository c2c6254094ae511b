//! Install command implementation
//!
//! The installation steps:
//! 1. Resolve the encoder executable and the configuration root
//! 2. Scan the configuration root for client profiles
//! 3. Build the registration document and render the .reg text
//! 4. Preview (--dry-run), export (--export), or confirm and import

use console::Style;
use inquire::Confirm;

use crate::cli::Cli;
use crate::document::{self, MenuMode, RegistrationDocument};
use crate::environment::InstallEnv;
use crate::error::Result;
use crate::profiles::{self, ClientProfile};
use crate::registry;
use crate::render;

/// Run the registration end to end
pub fn run(cli: Cli) -> Result<()> {
    run_with(cli, confirm_import)
}

/// Same flow with the confirmation step supplied by the caller, so the
/// decline branch stays testable without a terminal
fn run_with(
    cli: Cli,
    confirm: impl FnOnce(&RegistrationDocument) -> Result<bool>,
) -> Result<()> {
    let env = InstallEnv::resolve(cli.exe, cli.config)?;
    let profiles = profiles::scan_profiles(&env.config_root);

    display_plan(&env, &profiles);

    let document = RegistrationDocument::build(&env.exe_path, &profiles)?;
    let reg_text = render::render(&document);

    if cli.dry_run {
        println!();
        print!("{reg_text}");
        return Ok(());
    }

    if let Some(dest) = cli.export {
        registry::export(&reg_text, &dest)?;
        println!(
            "\nWrote {}. Import it later with: reg import <file>",
            Style::new().bold().apply_to(dest.display())
        );
        return Ok(());
    }

    if !cli.yes && !confirm(&document)? {
        println!("Cancelled. No changes were made.");
        return Ok(());
    }

    registry::import(&reg_text)?;
    report_success(&document);
    Ok(())
}

/// Echo what was found and what will be registered
fn display_plan(env: &InstallEnv, profiles: &[ClientProfile]) {
    println!(
        "{} {}",
        Style::new().bold().apply_to("Encoder:"),
        env.exe_path.display()
    );
    println!(
        "{} {}",
        Style::new().bold().apply_to("Profiles:"),
        env.config_root.display()
    );
    if profiles.is_empty() {
        println!(
            "  {}",
            Style::new()
                .dim()
                .apply_to("none found, registering a single menu entry")
        );
    } else {
        for profile in profiles {
            println!("  - {}", Style::new().cyan().apply_to(&profile.name));
        }
    }
    println!(
        "{} {}",
        Style::new().bold().apply_to("Extensions:"),
        document::EXTENSIONS.join(", ")
    );
}

fn confirm_import(document: &RegistrationDocument) -> Result<bool> {
    let verbs: usize = match document.mode {
        MenuMode::Simple => document.entries.len(),
        MenuMode::MultiClient => document.entries.iter().map(|e| e.sub_entries.len()).sum(),
    };
    println!(
        "\n{verbs} menu entries across {} extensions will be written to HKEY_CLASSES_ROOT.",
        document.entries.len()
    );

    Ok(Confirm::new("Apply these entries to the registry?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?)
}

fn report_success(document: &RegistrationDocument) {
    let menu_shape = match document.mode {
        MenuMode::Simple => "a single entry".to_string(),
        MenuMode::MultiClient => format!(
            "a submenu with {} entries",
            document.entries.first().map_or(0, |e| e.sub_entries.len())
        ),
    };
    println!(
        "\n{} Right-clicking a video file now shows {menu_shape}.",
        Style::new().green().apply_to("Registered.")
    );
}
