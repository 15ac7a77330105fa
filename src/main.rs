use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;

use flyout_nav::config::Config;
use flyout_nav::host::{BlankLoader, ConsoleHost};
use flyout_nav::logging::init_tracing;
use flyout_nav::navigator::{NavigationRequest, Navigator};
use flyout_nav::session::SessionStore;

/// Drive the section navigator for one process lifetime.
///
/// Each invocation restores the saved session, runs one command and saves
/// the session again, the way a mobile shell would across process death.
#[derive(Parser, Debug)]
#[command(name = "flyout-nav", version, about)]
struct Cli {
    /// Config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Session file (overrides the config).
    #[arg(long)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Forget the saved session.
    Reset,

    #[command(flatten)]
    Session(SessionCommand),
}

/// Commands that run inside a restored session.
#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Show the screen for a view-model type, e.g. `EnterTimeViewModel`.
    Show { view_model: String },
    /// Tap the menu row at POSITION (0-based).
    Menu { position: usize },
    /// Set a field on the displayed view-model. VALUE is parsed as JSON when possible.
    Set { key: String, value: String },
    /// Print the navigator state.
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    init_tracing(&config.logging);

    let store = SessionStore::new(cli.session.clone().unwrap_or_else(|| config.session_path()));

    match cli.command {
        Command::Reset => {
            store.clear().context("removing session file")?;
            println!("Session cleared: {}", store.path().display());
            Ok(())
        }
        Command::Session(command) => run_session(&config, &store, command),
    }
}

/// One process lifetime: restore, run `command`, save.
fn run_session(
    config: &Config,
    store: &SessionStore,
    command: SessionCommand,
) -> anyhow::Result<()> {
    let mut nav = Navigator::new(
        BlankLoader::new(),
        ConsoleHost::new(io::stdout()),
        config.menu_index(),
        config.menu.drawer_title.clone(),
    );
    nav.launch(store.load())?;

    match command {
        SessionCommand::Show { view_model } => {
            nav.show(&NavigationRequest::new(view_model))?;
        }
        SessionCommand::Menu { position } => {
            nav.select_menu_item(position)?;
        }
        SessionCommand::Set { key, value } => {
            let Some(section) = nav.active_section() else {
                bail!("no section is displayed");
            };
            let value = serde_json::from_str(&value).unwrap_or(Value::String(value));
            let Some(view_model) = nav.view_model_mut(section) else {
                bail!("section '{}' has no view-model", section);
            };
            match view_model.state_mut() {
                Value::Object(map) => {
                    map.insert(key, value);
                }
                other => {
                    let mut map = serde_json::Map::new();
                    map.insert(key, value);
                    *other = Value::Object(map);
                }
            }
        }
        SessionCommand::Status => print_status(&nav)?,
    }

    store
        .save(&nav.save_session())
        .context("saving session")?;
    Ok(())
}

fn print_status<L, W>(nav: &Navigator<L, ConsoleHost<W>>) -> io::Result<()>
where
    L: flyout_nav::navigator::ViewModelLoader,
    W: Write,
{
    let mut out = io::stdout().lock();
    writeln!(out, "title: {}", nav.displayed_title())?;
    for (position, item) in nav.menu().items().iter().enumerate() {
        let mark = if nav.host().checked() == Some(position) { "*" } else { " " };
        writeln!(out, "{} {} {} ({})", mark, position, item.title, item.section)?;
    }
    for screen in nav.screens() {
        let state = screen
            .view_model()
            .map(|vm| vm.state().to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "  [{}] {}", screen.section(), state)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_handled_without_a_session() {
        let cli = Cli::try_parse_from(["flyout-nav", "reset"]).unwrap();
        assert!(matches!(cli.command, Command::Reset));
    }

    #[test]
    fn navigation_commands_run_in_a_session() {
        let cli = Cli::try_parse_from(["flyout-nav", "show", "EnterTimeViewModel"]).unwrap();
        match cli.command {
            Command::Session(SessionCommand::Show { view_model }) => {
                assert_eq!(view_model, "EnterTimeViewModel");
            }
            other => panic!("expected show, got {:?}", other),
        }

        let cli = Cli::try_parse_from(["flyout-nav", "--session", "/tmp/s.json", "menu", "1"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Session(SessionCommand::Menu { position: 1 })
        ));
        assert_eq!(cli.session, Some(PathBuf::from("/tmp/s.json")));
    }
}
