//! Help plugin: command documentation and pastebin command listings.
//!
//! This module implements the `help` plugin registered in the host bot. It reads
//! the documentation the host collected for every command and answers users,
//! publishing the full command listing to a pastebin through the
//! [`Poster`](crate::paste::Poster).
//!
//! # Architecture
//!
//! ```text
//! Chat message
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + handle()
//! └─────────────┘
//!      │
//!      ├── parse() ──────────► command::Command
//!      │
//!      └── handle() ─────────┐
//!                            ▼
//!                 ┌─────────────────────┐
//!                 │ Action Handlers     │
//!                 │  - handle_doc       │
//!                 │  - handle_commands  │ ──► Poster ──► pastebin
//!                 │  - handle_greeting  │
//!                 └─────────────────────┘
//!                            │
//!                            ▼
//!                 ┌────────────────────┐
//!                 │  CommandResult     │ ──► Host (reply / say / msg)
//!                 └────────────────────┘
//! ```
//!
//! # Commands
//!
//! | Message | Description |
//! |---------|-------------|
//! | `.help <command>`, `.commands <command>` | Show the documentation of a command |
//! | `.help`, `.commands` | Post the command listing to a pastebin and share the link |
//! | `<nick>: help <command>`, `<nick>: doc <command>` | Same as `.help <command>` |
//! | `<nick>: help` | Short introduction of the bot |
//!
//! The `.` prefix is the configured [`help_prefix`](crate::config::CoreSection::help_prefix).
//!
//! # Module Organization
//!
//! - `commander` - Main orchestrator for parsing and executing commands
//! - `command` - Command enum and parsing rules
//! - `actions` - Individual command handler implementations
//! - `listing` - Command listing layout
//! - `responses` - User facing texts

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use mockall::automock;

mod actions;
mod command;
mod commander;
mod listing;
mod responses;

pub use crate::commands::command::Command;
pub use crate::commands::commander::Commander;

/// Message-sending primitives provided by the host bot.
#[automock]
#[async_trait]
pub trait Host: Send + Sync {
    /// Answers the user who triggered the command, in the same channel.
    async fn reply(&self, text: &str);
    /// Says something in the channel the command came from.
    async fn say(&self, text: &str);
    /// Sends a private message to `target`.
    async fn msg(&self, target: &str, text: &str);
}

/// A message received by the bot.
#[derive(Debug, Clone)]
pub struct Trigger {
    /// Nick of the user who sent the message
    pub nick: String,
    /// Channel the message was sent to, or the user nick for private messages
    pub sender: String,
    /// Raw message text
    pub text: String,
}

impl Trigger {
    /// Whether the message was sent privately to the bot.
    pub fn is_private(&self) -> bool {
        self.nick == self.sender
    }
}

/// Documentation of a single command.
#[derive(Debug, Clone, Default)]
pub struct CommandDoc {
    /// Documentation lines
    pub lines: Vec<String>,
    /// Usage example, e.g. `.help tell`
    pub example: Option<String>,
}

/// Commands known by the host bot.
///
/// # Fields
///
/// * `docs` - Documentation of each command, keyed by lowercase command name
/// * `groups` - Command names grouped by plugin category
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub docs: HashMap<String, CommandDoc>,
    pub groups: BTreeMap<String, Vec<String>>,
}

/// A message to deliver through the [`Host`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    /// [`Host::reply`]
    Reply(String),
    /// [`Host::say`]
    Say(String),
    /// [`Host::msg`]: (target, text)
    Msg(String, String),
}

/// Listing URL remembered between two listing requests.
///
/// The listing is reused as long as the number of command groups and the
/// configured backend did not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedListing {
    /// Number of command groups when the listing was posted
    pub group_count: usize,
    /// URL of the posted listing
    pub url: String,
    /// Backend the listing was posted to
    pub backend: String,
}

/// Result of command execution.
///
/// Handlers don't talk to the host directly. They return the messages to send
/// and the listing to remember, and the [`Commander`] applies them. The only
/// message sent before a handler runs is the wait notice the [`Commander`]
/// delivers ahead of posting a new listing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Messages to deliver, in order
    pub messages: Vec<Outgoing>,
    /// Listing to remember for the next requests
    pub listing: Option<CachedListing>,
}
