//! Config subcommands handler

use anyhow::Result;

use qstories::cli::ConfigCommand;
use qstories::tui::current_theme;
use qstories::Config;

pub fn handle(command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => handle_show(),
        ConfigCommand::Path => handle_path(),
        ConfigCommand::Init => handle_init(),
    }
}

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Print where the config file lives.
#[cfg(not(tarpaulin_include))]
fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default config unless a file already exists.
#[cfg(not(tarpaulin_include))]
fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    let theme = current_theme();
    if path.exists() {
        println!(
            "{}",
            theme.secondary_text(&format!("Config already exists at {}", path.display()))
        );
        return Ok(());
    }
    Config::default().save_to(&path)?;
    println!(
        "{}",
        theme.accent_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
