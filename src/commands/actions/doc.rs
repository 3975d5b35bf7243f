//! Command documentation handler.
//!
//! Short documentation is replied in place. Documentation longer than
//! [`MAX_INLINE_LINES`] lines is sent privately so channels are not flooded.

use log::debug;

use crate::commands::{
    Catalog, CommandResult, Outgoing, Trigger,
    responses::{DOC_TOO_LONG, format_example},
};

/// Number of lines, example included, that may be replied in place.
const MAX_INLINE_LINES: usize = 3;

/// Returns the documentation of `name`.
///
/// Unknown commands produce an empty result.
pub fn handle_doc(catalog: &Catalog, trigger: &Trigger, name: &str) -> CommandResult {
    debug!("handling doc command for {}", name);

    let Some(doc) = catalog.docs.get(name) else {
        debug!("no documentation for {}", name);
        return CommandResult::default();
    };

    let mut lines = doc.lines.clone();
    if let Some(example) = &doc.example {
        lines.push(format_example(example));
    }

    let mut messages = Vec::new();
    if lines.len() > MAX_INLINE_LINES {
        // Don't announce the private message if already asked in private
        if !trigger.is_private() {
            messages.push(Outgoing::Reply(DOC_TOO_LONG.to_string()));
        }
        messages.extend(
            lines
                .into_iter()
                .map(|line| Outgoing::Msg(trigger.nick.clone(), line)),
        );
    } else {
        messages.extend(lines.into_iter().map(Outgoing::Reply));
    }

    CommandResult {
        messages,
        listing: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandDoc;

    fn create_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.docs.insert(
            "tell".to_string(),
            CommandDoc {
                lines: vec!["Give someone a message the next time they're seen".to_string()],
                example: Some(".tell alice hello".to_string()),
            },
        );
        catalog.docs.insert(
            "remind".to_string(),
            CommandDoc {
                lines: vec![
                    "Gives you a reminder in the given amount of time.".to_string(),
                    "Units are s, m, h and d.".to_string(),
                    "Several units can be combined.".to_string(),
                ],
                example: Some(".in 3h45m Go to class".to_string()),
            },
        );
        catalog.docs.insert(
            "seen".to_string(),
            CommandDoc {
                lines: vec![
                    "Reports when a user was last seen.".to_string(),
                    "Nicks are case insensitive.".to_string(),
                    "Only channel messages count.".to_string(),
                ],
                example: None,
            },
        );
        catalog
    }

    fn create_trigger(sender: &str) -> Trigger {
        Trigger {
            nick: "alice".to_string(),
            sender: sender.to_string(),
            text: ".help".to_string(),
        }
    }

    #[test]
    fn test_handle_doc_short_is_replied() {
        let result = handle_doc(&create_catalog(), &create_trigger("#chan"), "tell");

        assert_eq!(
            result.messages,
            vec![
                Outgoing::Reply("Give someone a message the next time they're seen".to_string()),
                Outgoing::Reply("e.g. .tell alice hello".to_string()),
            ]
        );
        assert!(result.listing.is_none());
    }

    #[test]
    fn test_handle_doc_three_lines_is_replied() {
        let result = handle_doc(&create_catalog(), &create_trigger("#chan"), "seen");

        assert_eq!(result.messages.len(), 3);
        assert!(
            result
                .messages
                .iter()
                .all(|message| matches!(message, Outgoing::Reply(_)))
        );
    }

    #[test]
    fn test_handle_doc_long_in_channel_is_sent_privately() {
        let result = handle_doc(&create_catalog(), &create_trigger("#chan"), "remind");

        assert_eq!(result.messages.len(), 5);
        assert_eq!(result.messages[0], Outgoing::Reply(DOC_TOO_LONG.to_string()));
        assert_eq!(
            result.messages[4],
            Outgoing::Msg("alice".to_string(), "e.g. .in 3h45m Go to class".to_string())
        );
        assert!(
            result.messages[1..]
                .iter()
                .all(|message| matches!(message, Outgoing::Msg(target, _) if target == "alice"))
        );
    }

    #[test]
    fn test_handle_doc_long_in_private_skips_notice() {
        let result = handle_doc(&create_catalog(), &create_trigger("alice"), "remind");

        assert_eq!(result.messages.len(), 4);
        assert!(
            result
                .messages
                .iter()
                .all(|message| matches!(message, Outgoing::Msg(_, _)))
        );
    }

    #[test]
    fn test_handle_doc_unknown_command() {
        let result = handle_doc(&create_catalog(), &create_trigger("#chan"), "unknown");
        assert_eq!(result, CommandResult::default());
    }
}
