//! REPL command parsing.
//!
//! Turns one line of user input into a [`Command`], and a command into the
//! [`Event`] the handler understands. Parsing never touches state; resolving a
//! command into an event reads the current selection (for `upload`) and the
//! filesystem (for `select`).
//!
//! # Commands
//!
//! ```text
//! select <path>...               replace the selection
//! clear                          empty the selection
//! upload                         upload the current selection
//! refresh                        fetch the indexed document list
//! search [-n <limit>] <text...>  run a query
//! tab upload|documents|search    switch the visible tab (or 1/2/3)
//! help                           redraw the dashboard
//! quit | exit                    leave
//! ```
//!
//! Paths containing spaces can be wrapped in double quotes.

use super::handler::Event;
use super::state::CoordinatorState;
use super::View;
use crate::domain::{PendingFile, RagdeskError, Result};
use crate::infrastructure::expand_tilde;
use std::path::PathBuf;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(Vec<PathBuf>),
    Clear,
    Upload,
    Refresh,
    Search {
        text: String,
        /// `None` means the configured default.
        limit: Option<i64>,
    },
    Tab(View),
    Help,
    Quit,
}

/// Usage text printed by `help` and after a parse error.
pub const USAGE: &str = "\
commands:
  select <path>...               replace the selection
  clear                          empty the selection
  upload                         upload the current selection
  refresh                        fetch the indexed document list
  search [-n <limit>] <text...>  run a query (limit 1-20)
  tab upload|documents|search    switch tab (or 1/2/3)
  help                           show this help
  quit                           leave";

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`RagdeskError::Input`] for unknown commands, missing arguments,
/// unterminated quotes and non-numeric limits.
///
/// # Example
///
/// ```
/// use ragdesk::app::input::{parse_command, Command};
///
/// let command = parse_command("search -n 3 invoice totals")?;
/// assert_eq!(command, Some(Command::Search { text: "invoice totals".into(), limit: Some(3) }));
/// # Ok::<(), ragdesk::RagdeskError>(())
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let tokens = split_args(line)?;
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "select" | "add" => {
            if args.is_empty() {
                return Err(RagdeskError::Input("select needs at least one path".to_string()));
            }
            Command::Select(args.iter().map(|arg| PathBuf::from(expand_tilde(arg))).collect())
        }
        "clear" => Command::Clear,
        "upload" => Command::Upload,
        "refresh" | "list" => Command::Refresh,
        "search" | "find" => parse_search(args)?,
        "tab" | "view" => {
            let [target] = args else {
                return Err(RagdeskError::Input("tab needs exactly one of upload, documents, search".to_string()));
            };
            Command::Tab(target.parse().map_err(RagdeskError::Input)?)
        }
        "1" | "2" | "3" => Command::Tab(name.parse().map_err(RagdeskError::Input)?),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(RagdeskError::Input(format!("unknown command {other:?}, try `help`"))),
    };

    Ok(Some(command))
}

fn parse_search(args: &[String]) -> Result<Command> {
    let (limit, rest) = match args {
        [flag, value, rest @ ..] if flag == "-n" || flag == "--limit" => {
            let limit = value
                .parse::<i64>()
                .map_err(|_| RagdeskError::Input(format!("limit must be a number, got {value:?}")))?;
            (Some(limit), rest)
        }
        [flag] if flag == "-n" || flag == "--limit" => {
            return Err(RagdeskError::Input("-n needs a number".to_string()));
        }
        rest => (None, rest),
    };

    Ok(Command::Search {
        text: rest.join(" "),
        limit,
    })
}

/// Splits a line on whitespace, keeping double-quoted runs together.
fn split_args(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(RagdeskError::Input("unterminated quote".to_string()));
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

impl Command {
    /// Resolves the command into a handler event.
    ///
    /// `Help` resolves to `None`: it only asks for a redraw.
    ///
    /// # Errors
    ///
    /// Returns [`RagdeskError::Io`] if a selected path is missing or is not
    /// a regular file. Nothing is selected in that case.
    pub fn into_event(self, state: &CoordinatorState, default_limit: u8) -> Result<Option<Event>> {
        let event = match self {
            Self::Select(paths) => {
                let files = paths
                    .iter()
                    .map(PendingFile::from_path)
                    .collect::<Result<Vec<_>>>()?;
                Event::SelectFiles(files)
            }
            Self::Clear => Event::ClearSelection,
            Self::Upload => Event::StartUpload {
                files: state.pending_files.clone(),
            },
            Self::Refresh => Event::RefreshDocuments,
            Self::Search { text, limit } => Event::RunSearch {
                text,
                limit: limit.unwrap_or_else(|| i64::from(default_limit)),
            },
            Self::Tab(view) => Event::SwitchView(view),
            Self::Help => return Ok(None),
            Self::Quit => Event::Quit,
        };
        Ok(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("upload").unwrap(), Some(Command::Upload));
        assert_eq!(parse_command("REFRESH").unwrap(), Some(Command::Refresh));
        assert_eq!(parse_command("clear").unwrap(), Some(Command::Clear));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("tab documents").unwrap(), Some(Command::Tab(View::Documents)));
        assert_eq!(parse_command("3").unwrap(), Some(Command::Tab(View::Search)));
    }

    #[test]
    fn search_limit_is_optional() {
        assert_eq!(
            parse_command("search cats and dogs").unwrap(),
            Some(Command::Search {
                text: "cats and dogs".to_string(),
                limit: None
            })
        );
        assert_eq!(
            parse_command("search --limit 50 cats").unwrap(),
            Some(Command::Search {
                text: "cats".to_string(),
                limit: Some(50)
            })
        );
        assert!(matches!(parse_command("search -n many cats"), Err(RagdeskError::Input(_))));
    }

    #[test]
    fn quoted_paths_keep_spaces() {
        assert_eq!(
            parse_command(r#"select "/tmp/my report.pdf" /tmp/b.pdf"#).unwrap(),
            Some(Command::Select(vec![
                PathBuf::from("/tmp/my report.pdf"),
                PathBuf::from("/tmp/b.pdf")
            ]))
        );
        assert!(matches!(parse_command(r#"select "/tmp/a"#), Err(RagdeskError::Input(_))));
    }

    #[test]
    fn bad_input_is_an_input_error() {
        assert!(matches!(parse_command("frobnicate"), Err(RagdeskError::Input(_))));
        assert!(matches!(parse_command("select"), Err(RagdeskError::Input(_))));
        assert!(matches!(parse_command("tab settings"), Err(RagdeskError::Input(_))));
    }

    #[test]
    fn upload_uses_current_selection() {
        let mut state = CoordinatorState::new();
        state.pending_files = vec![PendingFile::new("/tmp/a.pdf", "a.pdf", 1, "application/pdf")];

        let event = Command::Upload.into_event(&state, 5).unwrap();
        assert_eq!(
            event,
            Some(Event::StartUpload {
                files: state.pending_files.clone()
            })
        );
    }

    #[test]
    fn search_falls_back_to_default_limit() {
        let event = Command::Search {
            text: "cats".to_string(),
            limit: None,
        }
        .into_event(&CoordinatorState::new(), 7)
        .unwrap();
        assert_eq!(
            event,
            Some(Event::RunSearch {
                text: "cats".to_string(),
                limit: 7
            })
        );
    }

    #[test]
    fn select_reads_file_metadata() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4").unwrap();

        let event = Command::Select(vec![file.path().to_path_buf()])
            .into_event(&CoordinatorState::new(), 5)
            .unwrap();
        let Some(Event::SelectFiles(files)) = event else {
            panic!("expected a selection event");
        };
        assert_eq!(files[0].size_bytes, 8);
        assert_eq!(files[0].mime_type, "application/pdf");
    }

    #[test]
    fn select_of_missing_file_fails() {
        let result = Command::Select(vec![PathBuf::from("/definitely/missing.pdf")]).into_event(&CoordinatorState::new(), 5);
        assert!(matches!(result, Err(RagdeskError::Io(_))));
    }

    #[test]
    fn help_only_redraws() {
        assert_eq!(Command::Help.into_event(&CoordinatorState::new(), 5).unwrap(), None);
    }
}
