use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::EnvFilter;

use glimpse_core::config::Config;
use glimpse_core::gitlab::GitlabDirectory;
use glimpse_gitlab::GitlabClient;
use glimpse_interaction::{InteractionResult, ProfilerSession};
use glimpse_render::{render_profile, render_project_visuals};

/// CLI helper for rustyline that completes and highlights the view
/// commands.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/profile".to_string(), "/projects".to_string()],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Entry point for the Glimpse REPL.
///
/// Each accepted line runs to completion before the next prompt: a
/// free-text line resolves a username, `/profile` and `/projects` show
/// the two sub-views of the selected user. There is no background
/// work; a slow network call blocks until the transport gives up.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let directory: Arc<dyn GitlabDirectory> = Arc::new(GitlabClient::new(&config));
    let mut session = ProfilerSession::new(Arc::clone(&directory));

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Glimpse - GitLab profiler ===".bright_magenta().bold());
    println!(
        "{}",
        "Enter a username to look up, /profile or /projects to explore, 'quit' to exit."
            .bright_black()
    );
    println!();
    println!("{}", glimpse_interaction::GREETING.bright_blue());

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if !trimmed.starts_with('/') {
                    println!(
                        "{}",
                        format!("Searching for '{trimmed}'...").bright_black()
                    );
                }

                match session.handle_input(trimmed).await {
                    InteractionResult::NewMessage(message) => {
                        for line in message.lines() {
                            println!("{}", line.bright_blue());
                        }
                    }
                    InteractionResult::ShowProfile { user, show_raw } => {
                        render_profile(&user, show_raw);
                    }
                    InteractionResult::ShowVisuals(projects) => {
                        if let Err(err) =
                            render_project_visuals(directory.as_ref(), &projects).await
                        {
                            eprintln!("{}", format!("Rendering failed: {err}").red());
                        }
                    }
                    InteractionResult::NoOp => {
                        println!("{}", "Unknown command".bright_black());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}
