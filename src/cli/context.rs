//! Shell state: startup phase, the session ledger, and command dispatch.

use std::{env, io, time::Duration};

use thiserror::Error;

use crate::{
    auth::CredentialStore,
    cli::{
        commands,
        output::{self, OutputPreferences},
        registry::{Availability, CommandRegistry},
        splash::Splash,
        view::AccountBookView,
    },
    config::Config,
    core::services::SummaryService,
    errors::{AuthError, ConfigError, EntryError},
    ledger::Ledger,
    time::{parse_fixed_now, FixedClock, SystemClock},
};

const FIXED_NOW_ENV: &str = "ACCOUNT_BOOK_FIXED_NOW";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Startup sequence. The shell only ever moves forward through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Splash,
    Login,
    AccountBook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell errors that end the process.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Recoverable command failures; reported and then the shell carries on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Please log in first. Use `login <username> <password>`.")]
    LoginRequired,
    #[error("Already logged in.")]
    AlreadyLoggedIn,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) phase: Phase,
    pub(crate) running: bool,
    pub(crate) config: Config,
    pub(crate) credentials: CredentialStore,
    pub(crate) ledger: Ledger,
    pub(crate) registry: CommandRegistry,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: Config) -> Self {
        let ledger = match env::var(FIXED_NOW_ENV).ok().as_deref().and_then(parse_fixed_now) {
            Some(instant) => {
                tracing::info!(%instant, "using fixed clock");
                Ledger::with_clock(FixedClock::new(instant))
            }
            None => Ledger::with_clock(SystemClock),
        };
        Self::with_ledger(mode, config, ledger)
    }

    pub fn with_ledger(mode: CliMode, config: Config, ledger: Ledger) -> Self {
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
        });
        Self {
            mode,
            phase: Phase::Splash,
            running: true,
            credentials: config.credential_store(),
            config,
            ledger,
            registry: commands::build_registry(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Shows the splash (timed in interactive mode) and opens the login gate.
    pub fn start(&mut self) {
        if self.phase != Phase::Splash {
            return;
        }
        let delay = match self.mode {
            CliMode::Interactive => Duration::from_millis(self.config.splash_duration_ms),
            CliMode::Script => Duration::ZERO,
        };
        Splash::new(&self.config.brand).show(delay);
        self.phase = Phase::Login;
        tracing::debug!("login gate opened");
    }

    pub(crate) fn login(&mut self, username: &str, password: &str) -> CommandResult {
        if self.phase == Phase::AccountBook {
            return Err(CommandError::AlreadyLoggedIn);
        }
        self.credentials.validate(username, password)?;
        self.phase = Phase::AccountBook;
        output::success(format!("Welcome, {}.", username.trim()));
        self.render_account_book();
        Ok(())
    }

    pub(crate) fn view(&self) -> AccountBookView<'_> {
        AccountBookView::new(
            &self.config.title,
            &self.config.currency_symbol,
            output::current_preferences().color_enabled,
        )
    }

    pub(crate) fn render_account_book(&self) {
        let dashboard = SummaryService::current(&self.ledger);
        output::lines(self.view().render(&dashboard));
    }

    pub(crate) fn prompt(&self) -> String {
        match self.phase {
            Phase::AccountBook => format!("{} > ", self.config.title),
            _ => "login > ".to_string(),
        }
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let Some(entry) = self.registry.get(command) else {
            output::warning(format!(
                "Unknown command `{}`. Type `help` to see available commands.",
                command
            ));
            return Ok(LoopControl::Continue);
        };

        match (entry.availability, self.phase) {
            (Availability::AfterLogin, phase) if phase != Phase::AccountBook => {
                return Err(CommandError::LoginRequired)
            }
            (Availability::BeforeLogin, Phase::AccountBook) => {
                return Err(CommandError::AlreadyLoggedIn)
            }
            _ => {}
        }

        let handler = entry.handler;
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(&err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((first, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let command = first.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        match self.dispatch(&command, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help` for usage details.");
            }
            other => {
                tracing::debug!(error = %other, "command failed");
                output::error(other);
            }
        }
    }
}
