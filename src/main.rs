//! dui CLI - Developer User Interface
//!
//! Usage: dui [OPTIONS] [COMMAND]
//!
//! Commands:
//!   set-menu     Store the location of the JSON menu description
//!   show-config  Print the configuration in effect

mod cli;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use dui::config::{default_config_path, resolve_menu_path, Config};
use dui::ui::terminal::detect_capabilities;
use dui::{build_session_tree, load_menu_file, logging, Session, StdTerminal};

use cli::{Cli, Commands};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let loaded = Config::load_or_init(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    if loaded.created {
        println!("Default config file created at: {}", config_path.display());
    }
    for warning in &loaded.warnings {
        eprintln!("warning: {warning}");
    }
    let file_config = loaded.config;
    let config = file_config.clone().with_env_overrides();

    init_logging(cli.verbose, &config, &config_path);
    tracing::debug!(
        file = %config_path.display(),
        created = loaded.created,
        "config loaded"
    );

    match cli.command {
        Some(Commands::SetMenu { path }) => cmd_set_menu(file_config, &config_path, &path),
        Some(Commands::ShowConfig) => cmd_show_config(&config, &config_path),
        None => cmd_browse(&config, cli.menu.as_deref()),
    }
}

fn init_logging(verbose: u8, config: &Config, config_path: &Path) {
    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    match logging::init(verbose, &config.logs_dir_or(config_dir)) {
        Ok(Some(path)) => tracing::debug!(file = %path.display(), "logging enabled"),
        Ok(None) => {}
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }
}

fn cmd_set_menu(mut config: Config, config_path: &Path, menu: &Path) -> Result<()> {
    config.set_menu(menu)?;
    config.save(config_path)?;
    println!("Config updated successfully.");
    Ok(())
}

fn cmd_show_config(config: &Config, config_path: &Path) -> Result<()> {
    println!("# {}", config_path.display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn cmd_browse(config: &Config, menu_flag: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let menu_path: Option<PathBuf> = resolve_menu_path(menu_flag, config, &cwd);
    let user_menu = menu_path.as_deref().map(load_menu_file).transpose()?;
    let root = build_session_tree(user_menu.as_ref())?;

    let caps = detect_capabilities();
    if !caps.is_tty {
        bail!("dui needs an interactive terminal");
    }

    install_panic_hook();
    let mut session = Session::new(root, StdTerminal::new(), caps);
    session.run()?;
    Ok(())
}

/// Leave raw mode before the panic message is printed
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        original_hook(panic_info);
    }));
}
