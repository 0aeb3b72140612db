//! Interactive terminal entry point.
//!
//! Runs a line-oriented REPL over the coordinator. Every command is turned
//! into an event, the handler mutates state and emits actions, and the
//! [`Dispatcher`] runs those actions in the background. Completions are fed
//! back as events as soon as they arrive, so the dashboard redraws while the
//! user is still typing.
//!
//! # Loop
//!
//! ```text
//! ┌──────────────┐  line   ┌──────────────┐ actions ┌──────────────┐
//! │    stdin     │ ──────▶ │ handle_event │ ──────▶ │  Dispatcher  │
//! └──────────────┘         └──────────────┘         └──────────────┘
//!                                 ▲                        │
//!                                 └────── completions ─────┘
//! ```
//!
//! # Startup
//!
//! 1. **Config**: file, then `RAGDESK_*` environment, then flags
//! 2. **Tracing**: OTLP spans to the data directory
//! 3. **Health**: probe the backend once and warn if it is unreachable
//! 4. **Draw**: render the empty dashboard and wait for input

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ragdesk::app::input::USAGE;
use ragdesk::app::{handle_event, parse_command, Action, CoordinatorState, Event};
use ragdesk::runtime::Dispatcher;
use ragdesk::service::IndexService;
use ragdesk::ui::{self, Theme};
use ragdesk::{initialize, observability, Config, Dashboard};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Parser)]
#[command(name = "ragdesk", version, about = "Upload, list and search documents on a retrieval backend")]
struct Cli {
    /// Configuration file (default: <config dir>/ragdesk/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:56165
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Trace level for the span log (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// Disable colors and screen clearing
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(level) = &self.trace_level {
            config.trace_level = Some(level.clone());
        }
    }
}

/// Whether the loop should keep reading input.
enum Flow {
    Continue,
    Exit,
}

struct Session {
    state: CoordinatorState,
    theme: Theme,
    dispatcher: Dispatcher,
    default_limit: u8,
}

impl Session {
    fn draw(&self, notice: Option<&str>) {
        let mut frame = String::new();
        if self.theme.enabled {
            frame.push_str(CLEAR_SCREEN);
        }
        frame.push_str(&ui::render(&ui::project(&self.state), &self.theme));
        if let Some(notice) = notice {
            frame.push('\n');
            frame.push_str(notice);
        }
        print!("{frame}\n> ");
        let _ = std::io::stdout().flush();
    }

    /// Applies one event and dispatches its actions. Returns whether the
    /// state changed, or `None` once the user asked to leave.
    fn apply(&mut self, event: &Event) -> ragdesk::Result<Option<bool>> {
        let (changed, actions) = handle_event(&mut self.state, event)?;
        let mut exit = false;
        for action in actions {
            if matches!(action, Action::Exit) {
                exit = true;
            } else {
                self.dispatcher.dispatch(action);
            }
        }
        Ok((!exit).then_some(changed))
    }

    fn handle_line(&mut self, line: &str) -> ragdesk::Result<Flow> {
        let span = tracing::debug_span!("command", line = %line);
        let _guard = span.entered();

        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                self.draw(None);
                return Ok(Flow::Continue);
            }
            Err(e) => {
                self.notify_error(&e, true);
                return Ok(Flow::Continue);
            }
        };

        match command.into_event(&self.state, self.default_limit) {
            Ok(Some(event)) => {
                if self.apply(&event)?.is_none() {
                    return Ok(Flow::Exit);
                }
                self.draw(None);
                Ok(Flow::Continue)
            }
            Ok(None) => {
                self.draw(Some(USAGE));
                Ok(Flow::Continue)
            }
            Err(e) => {
                self.notify_error(&e, false);
                Ok(Flow::Continue)
            }
        }
    }

    fn notify_error(&self, error: &ragdesk::RagdeskError, with_usage: bool) {
        tracing::debug!(error = %error, "command rejected");
        let mut notice = self.theme.paint(&self.theme.colors.error_fg, &error.to_string());
        if with_usage {
            notice.push('\n');
            notice.push_str(USAGE);
        }
        self.draw(Some(&notice));
    }
}

async fn run(cli: Cli) -> ragdesk::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?.with_env_overrides(|key| std::env::var(key).ok());
    cli.apply(&mut config);

    let trace_file = observability::init_tracing(&config);
    tracing::info!(base_url = %config.base_url, trace_file = ?trace_file, "starting ragdesk");

    let Dashboard { state, theme, service } = initialize(&config)?;
    let theme = if cli.no_color { Theme::plain() } else { theme };

    let health_notice = if service.check_health().await {
        None
    } else {
        tracing::warn!(base_url = %service.base_url(), "backend health check failed");
        Some(theme.paint(
            &theme.colors.error_fg,
            &format!("warning: backend at {} is not reachable", service.base_url()),
        ))
    };

    let (dispatcher, mut completions) = Dispatcher::new(service);
    let mut session = Session {
        state,
        theme,
        dispatcher,
        default_limit: config.default_limit,
    };
    session.draw(health_notice.as_deref());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if matches!(session.handle_line(&line)?, Flow::Exit) {
                    break;
                }
            }
            Some(completion) = completions.recv() => {
                if session.apply(&Event::Completed(completion))? == Some(true) {
                    session.draw(None);
                }
            }
        }
    }

    tracing::info!("ragdesk exiting");
    println!();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ragdesk: {e}");
            ExitCode::FAILURE
        }
    }
}
