//! Application state and update logic.
//!
//! All state mutation happens on the UI thread: key events are applied
//! directly, and the two network operations (initial load, create) report
//! their completions as [`NetEvent`]s that the event loop drains on the
//! same thread. Failed operations are logged and otherwise swallowed; the
//! list stays empty on a failed load, and a failed add is observable only
//! as the absence of the confirmation notice.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use roster_client::{ClientError, NewUser};
use roster_core::{Directory, User};
use tracing::{debug, error};

/// Which control currently receives text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Name,
    Email,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Name,
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Search,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Email,
            Focus::Name => Focus::Search,
            Focus::Email => Focus::Name,
        }
    }
}

pub enum MessageKind {
    Success,
    Error,
}

pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Completion of a network operation, delivered to the UI thread.
#[derive(Debug)]
pub enum NetEvent {
    UsersLoaded(Result<Vec<User>, ClientError>),
    UserCreated(Result<User, ClientError>),
}

/// Work the event loop must start on behalf of the UI.
#[derive(Debug)]
pub enum Effect {
    SubmitUser(NewUser),
}

pub struct App {
    pub directory: Directory,
    pub focus: Focus,
    pub name_input: String,
    pub email_input: String,
    pub message: Option<StatusMessage>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            directory: Directory::new(),
            focus: Focus::Search,
            name_input: String::new(),
            email_input: String::new(),
            message: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply a key press. Returns work for the event loop to start.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return None;
        }

        // Any further input dismisses the current notice.
        self.message = None;

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Left => {
                self.page_left();
                None
            }
            KeyCode::Right => {
                self.page_right();
                None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.pop_char();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.push_char(c);
                None
            }
            _ => None,
        }
    }

    /// Apply a completed network operation.
    pub fn handle_net(&mut self, event: NetEvent) {
        match event {
            NetEvent::UsersLoaded(Ok(users)) => {
                debug!(users = users.len(), "User collection loaded");
                self.directory.load(users);
            }
            NetEvent::UsersLoaded(Err(error)) => {
                // The list silently stays empty; the log is the only witness.
                error!(%error, "Failed to fetch user collection");
            }
            NetEvent::UserCreated(Ok(user)) => {
                self.directory.add_user(user);
                self.set_message(MessageKind::Success, "User added successfully");
            }
            NetEvent::UserCreated(Err(error)) => {
                error!(%error, "Failed to add user");
            }
        }
    }

    fn push_char(&mut self, c: char) {
        match self.focus {
            Focus::Search => {
                let mut term = self.directory.search_term().to_string();
                term.push(c);
                self.directory.search(term);
            }
            Focus::Name => self.name_input.push(c),
            Focus::Email => self.email_input.push(c),
        }
    }

    fn pop_char(&mut self) {
        match self.focus {
            Focus::Search => {
                let mut term = self.directory.search_term().to_string();
                term.pop();
                self.directory.search(term);
            }
            Focus::Name => {
                self.name_input.pop();
            }
            Focus::Email => {
                self.email_input.pop();
            }
        }
    }

    /// Move to the adjacent page control, if one exists.
    fn page_left(&mut self) {
        let pages = self.directory.page_count();
        if pages == 0 {
            return;
        }
        let target = self.directory.current_page().saturating_sub(1).clamp(1, pages);
        self.directory.paginate(target);
    }

    fn page_right(&mut self) {
        let pages = self.directory.page_count();
        if pages == 0 {
            return;
        }
        let target = (self.directory.current_page() + 1).clamp(1, pages);
        self.directory.paginate(target);
    }

    /// Submit the add-user form.
    ///
    /// Both fields are required and the email must have a `local@domain`
    /// shape; no further validation happens here or on the server.
    fn submit(&mut self) -> Option<Effect> {
        match self.focus {
            Focus::Name | Focus::Email => {
                if self.name_input.is_empty() || self.email_input.is_empty() {
                    self.set_message(MessageKind::Error, "Name and email are required");
                    return None;
                }
                if !looks_like_email(&self.email_input) {
                    self.set_message(MessageKind::Error, "Enter a valid email address");
                    return None;
                }
                Some(Effect::SubmitUser(NewUser::new(
                    self.name_input.clone(),
                    self.email_input.clone(),
                )))
            }
            Focus::Search => None,
        }
    }

    fn set_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }
}

fn looks_like_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
