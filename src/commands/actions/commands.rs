//! Command listing handler.
//!
//! Builds the listing of every command group, posts it to the configured
//! pastebin and shares the link. Posting failures are reported to the users with
//! a generic message, the details being in the logs.

use log::{debug, error, info};

use crate::{
    commands::{
        CachedListing, Catalog, CommandResult, Outgoing,
        listing::format_listing,
        responses::{POSTING_FAILED, format_listing_header, format_listing_posted},
    },
    paste::{Poster, error_chain},
};

/// Identity of the bot shown in the listing and in the answer.
pub struct ListingContext<'a> {
    /// Bot nick
    pub nick: &'a str,
    /// Chat server host
    pub host: &'a str,
    /// Command prefix
    pub prefix: char,
    /// Backend receiving the listing
    pub backend: &'a str,
}

/// Posts the command listing and returns the message sharing its URL.
///
/// On success the result carries the listing to remember. On failure only the
/// generic failure message is returned.
pub async fn handle_commands(
    poster: &Poster,
    catalog: &Catalog,
    context: &ListingContext<'_>,
) -> CommandResult {
    debug!("handling commands listing");

    let listing = format_listing_header(context.nick, context.host) + &format_listing(&catalog.groups);

    let url = match poster.post(context.backend, &listing).await {
        Ok(url) => url.trim_end().to_string(),
        Err(e) => {
            error!("error posting commands: {}", error_chain(&e));
            return CommandResult {
                messages: vec![Outgoing::Say(POSTING_FAILED.to_string())],
                listing: None,
            };
        }
    };

    info!("command listing posted at {}", url);

    CommandResult {
        messages: vec![Outgoing::Say(format_listing_posted(&url, context.prefix))],
        listing: Some(CachedListing {
            group_count: catalog.groups.len(),
            url,
            backend: context.backend.to_string(),
        }),
    }
}
