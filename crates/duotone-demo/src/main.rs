//! Worked example: a terminal theme switcher built on `duotone`.
//!
//! One-shot subcommands (`status`, `light`, `dark`, `toggle`) treat the
//! binary like the page's global accessor functions; `watch` runs an
//! interactive loop with the key bindings the original UI offered
//! (toggle shortcut plus explicit light/dark controls) and a terminal
//! [`Surface`] that repaints a banner on every transition.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::{Key, Style, Term};
use duotone::{
    FileStore, NotifyError, NullSurface, PreferenceSource, Surface, SystemPreference, Theme,
    ThemeManager,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "duotone", version, about = "Light/dark theme switcher demo")]
struct Cli {
    /// File holding the persisted theme choice
    #[arg(long, value_name = "PATH", default_value = ".duotone/mode")]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the active theme
    Status {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Switch to the light theme
    Light,
    /// Switch to the dark theme
    Dark,
    /// Flip between light and dark
    Toggle,
    /// Interactive mode: t toggles, l/d select, q quits
    Watch,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Status { json: false });

    match command {
        Command::Status { json } => status(&cli.state_file, json),
        Command::Light => set(&cli.state_file, Theme::Light),
        Command::Dark => set(&cli.state_file, Theme::Dark),
        Command::Toggle => toggle(&cli.state_file),
        Command::Watch => watch(&cli.state_file),
    }
}

/// A manager wired to the state file with no presentation side
/// effects, for the one-shot subcommands.
fn quiet_manager(state_file: &Path) -> ThemeManager {
    let mut manager = ThemeManager::new(
        Box::new(FileStore::new(state_file)),
        Box::new(NullSurface),
    );
    manager.initialize(&SystemPreference::new());
    manager
}

#[derive(Serialize)]
struct Status {
    theme: Theme,
    persisted: bool,
}

fn status(state_file: &Path, json: bool) -> Result<()> {
    let manager = quiet_manager(state_file);
    if json {
        let status = Status {
            theme: manager.current_theme(),
            persisted: manager.has_persisted_choice(),
        };
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", banner(manager.current_theme()));
    }
    Ok(())
}

fn set(state_file: &Path, theme: Theme) -> Result<()> {
    let mut manager = quiet_manager(state_file);
    manager.set_theme(theme);
    println!("{}", banner(manager.current_theme()));
    Ok(())
}

fn toggle(state_file: &Path) -> Result<()> {
    let mut manager = quiet_manager(state_file);
    manager.toggle_theme();
    println!("{}", banner(manager.current_theme()));
    Ok(())
}

/// Renders the active theme as an inverted-color banner.
fn banner(theme: Theme) -> String {
    let style = match theme {
        Theme::Light => Style::new().black().on_white(),
        Theme::Dark => Style::new().white().on_black(),
    };
    style.apply_to(format!(" {theme} ")).to_string()
}

/// One line of selector "buttons" with the active one highlighted.
fn indicator_row(active: Theme) -> String {
    let mut row = String::new();
    for candidate in [Theme::Light, Theme::Dark] {
        let label = format!("[{candidate}]");
        let styled = if candidate == active {
            Style::new().bold().underlined().apply_to(label)
        } else {
            Style::new().dim().apply_to(label)
        };
        row.push_str(&styled.to_string());
        row.push(' ');
    }
    row.trim_end().to_string()
}

/// Presentation port for the interactive loop: the banner is the
/// "document" and the selector row is the indicator state.
struct TermSurface {
    term: Term,
}

impl Surface for TermSurface {
    fn apply(&mut self, theme: Theme) {
        let _ = self.term.write_line(&banner(theme));
    }

    fn refresh_indicators(&mut self, theme: Theme) {
        let _ = self.term.write_line(&indicator_row(theme));
    }
}

/// Maps a pressed key to a theme name request. Unknown letters pass
/// through verbatim so the manager's rejection path handles them.
fn key_to_name(key: char) -> String {
    match key {
        'l' => "light".to_string(),
        'd' => "dark".to_string(),
        other => other.to_string(),
    }
}

fn watch(state_file: &Path) -> Result<()> {
    let term = Term::stdout();
    let mut manager = ThemeManager::new(
        Box::new(FileStore::new(state_file)),
        Box::new(TermSurface { term: term.clone() }),
    );
    let prefs = SystemPreference::new();
    manager.initialize(&prefs);

    {
        let term = term.clone();
        manager.subscribe(move |new, previous| {
            term.write_line(&format!("  {previous} -> {new}"))
                .map_err(|e| NotifyError::new("could not write transition line").with_source(e))
        });
    }

    term.write_line("t toggles, l/d select, q quits; other letters are rejected")?;
    term.write_line(&indicator_row(manager.current_theme()))?;

    let mut last_preference = prefs.current();
    loop {
        match term.read_key()? {
            Key::Char('q') | Key::Escape => break,
            Key::Char('t') => manager.toggle_theme(),
            Key::Char(key) => manager.set_theme_named(&key_to_name(key)),
            _ => {}
        }

        // No push API for the OS signal here; poll it between keys.
        let preference = prefs.current();
        if preference != last_preference {
            last_preference = preference;
            manager.system_preference_changed(preference);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_key_to_name_mappings() {
        assert_eq!(key_to_name('l'), "light");
        assert_eq!(key_to_name('d'), "dark");
        assert_eq!(key_to_name('x'), "x");
    }

    #[test]
    fn test_quiet_manager_round_trip() {
        let dir = TempDir::new().unwrap();
        let state_file = dir.path().join("mode");

        let mut manager = quiet_manager(&state_file);
        manager.set_theme(Theme::Dark);

        let manager = quiet_manager(&state_file);
        assert_eq!(manager.current_theme(), Theme::Dark);
    }

    #[test]
    fn test_indicator_row_marks_the_active_theme() {
        console::set_colors_enabled(true);
        let light_row = indicator_row(Theme::Light);
        let dark_row = indicator_row(Theme::Dark);
        assert_ne!(light_row, dark_row);
        assert!(light_row.contains("light"));
        assert!(light_row.contains("dark"));
    }
}
