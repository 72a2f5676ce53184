//! Conversation handling for a profiling session.
//!
//! `ProfilerSession` owns the session state and drives the implicit
//! session state machine: free text is a username lookup
//! (Idle → Resolving → Found/NotFound), and the two view commands are
//! independent, re-entrant sub-views available once a user is selected.

use std::sync::Arc;

use tracing::warn;

use glimpse_core::gitlab::{GitlabDirectory, Project, UserProfile};
use glimpse_core::session::Session;

/// Greeting seeded into every new session transcript.
pub const GREETING: &str = "Hi there! Enter a GitLab username to begin profiling.";

/// Nudge shown when a view is requested before any user is selected.
const NO_USER_SELECTED: &str = "Look up a user first by entering their username.";

/// Result of handling one line of user input.
///
/// The caller renders the result; nothing here draws to the terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionResult {
    /// Nothing to do (empty input or unknown command).
    NoOp,
    /// An assistant message to display.
    NewMessage(String),
    /// Show the profile view for the selected user.
    ShowProfile {
        /// The currently selected user.
        user: UserProfile,
        /// Whether to include the raw server record.
        show_raw: bool,
    },
    /// Show the project visualizations for the fetched projects.
    ShowVisuals(Vec<Project>),
}

/// Manages the chat transcript and current user for one session.
///
/// Passed explicitly through the REPL; there is no ambient process-wide
/// state. All mutation happens from the single active handler.
pub struct ProfilerSession {
    session: Session,
    directory: Arc<dyn GitlabDirectory>,
}

impl ProfilerSession {
    /// Creates a new session seeded with the assistant greeting.
    pub fn new(directory: Arc<dyn GitlabDirectory>) -> Self {
        let mut session = Session::new();
        session.push_assistant(GREETING);
        Self { session, directory }
    }

    /// Read access to the underlying session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handles one line of input and runs it to completion.
    pub async fn handle_input(&mut self, input: &str) -> InteractionResult {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return InteractionResult::NoOp;
        }

        if trimmed.starts_with('/') {
            self.handle_command(trimmed).await
        } else {
            self.lookup_user(trimmed).await
        }
    }

    /// Dispatches the two view commands. View triggers are not chat
    /// messages, so they are not recorded in the transcript; the
    /// "no user selected" nudge is a conversational reply and is.
    async fn handle_command(&mut self, command: &str) -> InteractionResult {
        let mut parts = command.split_whitespace();
        match parts.next() {
            Some("/profile") => match self.session.current_user.clone() {
                Some(user) => InteractionResult::ShowProfile {
                    user,
                    show_raw: parts.next() == Some("full"),
                },
                None => self.nudge(),
            },
            Some("/projects") => match &self.session.current_user {
                Some(user) => {
                    let user_id = user.id;
                    let projects = match self.directory.list_projects(user_id).await {
                        Ok(projects) => projects,
                        Err(err) => {
                            // Indistinguishable from "no projects" at the
                            // UI boundary, by design.
                            warn!(user_id, error = %err, "project listing failed");
                            Vec::new()
                        }
                    };
                    InteractionResult::ShowVisuals(projects)
                }
                None => self.nudge(),
            },
            _ => InteractionResult::NoOp,
        }
    }

    /// Resolves a username and updates the session.
    ///
    /// The previous user is cleared before the lookup, so a failed
    /// resolution leaves no stale selection behind.
    async fn lookup_user(&mut self, username: &str) -> InteractionResult {
        self.session.push_user(username);
        self.session.clear_current_user();

        let resolved = match self.directory.resolve_user(username).await {
            Ok(user) => user,
            Err(err) => {
                warn!(username, error = %err, "user lookup failed");
                None
            }
        };

        let reply = match resolved {
            Some(user) => {
                let reply = format!(
                    "Found user {} ({}). Try /profile for the full profile or /projects for visualizations.",
                    user.name, user.username
                );
                self.session.set_current_user(user);
                reply
            }
            None => format!(
                "Sorry, I couldn't find a user with the username '{username}'."
            ),
        };

        self.session.push_assistant(reply.clone());
        InteractionResult::NewMessage(reply)
    }

    fn nudge(&mut self) -> InteractionResult {
        self.session.push_assistant(NO_USER_SELECTED);
        InteractionResult::NewMessage(NO_USER_SELECTED.to_string())
    }
}
