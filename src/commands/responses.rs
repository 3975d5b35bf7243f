//! User facing texts of the help plugin.

/// Said before building and posting the command listing.
pub const CREATING_LIST: &str = "Hang on, I'm creating a list.";

/// Said when the command listing could not be posted.
pub const POSTING_FAILED: &str = "Sorry! Something went wrong.";

/// Replied in a channel before sending a long documentation privately.
pub const DOC_TOO_LONG: &str = "The documentation for this command is too long; I'm sending it to you in a private message.";

/// Formats the message sharing the command listing URL.
///
/// # Examples
///
/// ```ignore
/// let message = format_listing_posted("https://clbin.com/abcd", '.');
/// assert!(message.contains(".help <command>"));
/// ```
pub fn format_listing_posted(url: &str, prefix: char) -> String {
    format!(
        "I've posted a list of my commands at {0} - You can see more info about any of these commands by doing {1}help <command> (e.g. {1}help time)",
        url, prefix
    )
}

/// Formats the usage example line of a command documentation.
pub fn format_example(example: &str) -> String {
    format!("e.g. {}", example)
}

/// Formats the bot introduction.
pub fn format_greeting(prefix: char, owner: &str) -> String {
    format!(
        "Hi, I'm a bot. Say {}commands to me in private for a list of my commands. My owner is {}.",
        prefix, owner
    )
}

/// Formats the header of the posted command listing.
pub fn format_listing_header(nick: &str, host: &str) -> String {
    format!("Command listing for {}@{}\n\n", nick, host)
}
