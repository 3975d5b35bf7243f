//! Greeting handler, answering `<nick>: help`.

use log::debug;

use crate::commands::{CommandResult, Outgoing, responses::format_greeting};

/// Introduces the bot and points to the command listing.
pub fn handle_greeting(prefix: char, owner: &str) -> CommandResult {
    debug!("handling greeting");

    CommandResult {
        messages: vec![Outgoing::Reply(format_greeting(prefix, owner))],
        listing: None,
    }
}
