//! Command action handlers.
//!
//! Individual handler functions for each help command. Each handler returns a
//! [`CommandResult`](crate::commands::CommandResult) holding the messages to
//! deliver and, for the listing, the URL to remember.
//!
//! # Available Handlers
//!
//! - [`handle_doc`] - Show the documentation of one command
//! - [`handle_commands`] - Post the command listing to a pastebin
//! - [`handle_greeting`] - Introduce the bot

mod commands;
mod doc;
mod greeting;

pub use crate::commands::actions::{
    commands::{ListingContext, handle_commands},
    doc::handle_doc,
    greeting::handle_greeting,
};
