mod config;
mod logging;
mod replay;
mod todo;
mod tui;

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use logging::LogOutput;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{info, warn};
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "todo-widget")]
#[command(about = "An in-memory todo list for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Apply JSON Lines intents to an empty list and print the result")]
    Apply {
        #[arg(help = "Intent file, or '-' for stdin", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (id_strategy, log_level or log_dir)")]
        key: String,
        #[arg(help = "Configuration value")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Apply { file }) => run_apply(file),
        Some(Commands::Config { action }) => {
            handle_config_command(action).map_err(anyhow::Error::from)
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
            Ok(())
        }
        None => run_main_app(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for key in config::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    Ok(())
}

fn load_config() -> Result<Config> {
    Config::load().context("Configuration error")
}

fn run_apply(file: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    logging::init_tracing(&config, LogOutput::Stderr)?;

    let state = match file {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open intent file: {}", path.display()))?;
            replay::replay_intents(BufReader::new(file), config.id_strategy)?
        }
        _ => replay::replay_intents(io::stdin().lock(), config.id_strategy)?,
    };

    let json = serde_json::to_string_pretty(&state).context("Failed to serialize state")?;
    println!("{}", json);
    Ok(())
}

fn run_main_app() -> Result<()> {
    let config = load_config()?;
    logging::init_tracing(&config, LogOutput::File)?;
    info!(id_strategy = %config.id_strategy, "starting session");

    let mut app = App::new(config.id_strategy);
    run_tui(&mut app)?;

    info!(
        todos = app.total_items(),
        completed = app.completed_items(),
        "session ended"
    );
    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal even if the loop failed
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to disable raw mode");
    }
    if let Err(e) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
        warn!(error = %e, "failed to leave alternate screen");
    }
    if let Err(e) = terminal.show_cursor() {
        warn!(error = %e, "failed to show cursor");
    }

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases as well as presses
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
