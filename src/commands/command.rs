//! Command parsing.
//!
//! Two message shapes are recognised: prefixed commands (`.help tell`) parsed
//! with [`command_parser`], and messages addressed to the bot by nick
//! (`helpbot: help tell`) matched with regular expressions.

use command_parser::Parser;
use log::debug;
use regex::Regex;

/// Represents a parsed help command.
#[derive(Debug, Hash, PartialEq, Eq)]
pub enum Command {
    /// Show the documentation of a command
    ///
    /// # Fields
    ///
    /// * `String` - Lowercase command name
    Doc(String),
    /// Post the command listing
    List,
    /// Introduce the bot
    Greeting,
}

/// Prefixed commands handled by the plugin.
const COMMAND_NAMES: [&str; 2] = ["help", "commands"];

/// Rules matching messages addressed to the bot by nick.
pub(crate) struct NickRules {
    /// `<nick>: help <command>` or `<nick>: doc <command>`
    doc: Regex,
    /// `<nick>: help`
    greeting: Regex,
}

impl NickRules {
    pub(crate) fn new(nick: &str) -> Self {
        let nick = regex::escape(nick);
        NickRules {
            doc: Regex::new(&format!(
                r"(?i)^{}[:,]\s+(?:help|doc)\s+([A-Za-z]+)\?*$",
                nick
            ))
            .expect("escaped nick forms a valid regex"),
            greeting: Regex::new(&format!(r"(?i)^{}[:,]\s+help[?!]*$", nick))
                .expect("escaped nick forms a valid regex"),
        }
    }
}

impl Command {
    /// Parses a message into a Command.
    ///
    /// Returns `None` when the message is not a help command, which must be
    /// ignored silently.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let parser = Parser::new('.', '-');
    /// let rules = NickRules::new("helpbot");
    /// assert_eq!(Command::parse(&parser, &rules, ".help tell"), Some(Command::Doc("tell".to_string())));
    /// ```
    pub(crate) fn parse(parser: &Parser, rules: &NickRules, body: &str) -> Option<Self> {
        let body = body.trim();

        if let Some(command) = Self::parse_prefixed(parser, body) {
            return Some(command);
        }

        if let Some(captures) = rules.doc.captures(body) {
            debug!("nick addressed doc command: {}", body);
            return Some(Command::Doc(captures[1].to_lowercase()));
        }

        if rules.greeting.is_match(body) {
            debug!("nick addressed greeting: {}", body);
            return Some(Command::Greeting);
        }

        None
    }

    fn parse_prefixed(parser: &Parser, body: &str) -> Option<Self> {
        // The parser ignores the last word, so a dummy word is appended
        let body = body.to_string() + " dummy";

        // This is normal to fail if the message is not a command
        let command = parser.parse(&body).ok()?;

        if !COMMAND_NAMES
            .iter()
            .any(|name| command.name.eq_ignore_ascii_case(name))
        {
            return None;
        }

        debug!("parsing command: {:?}", command);

        // Options and parameters are not command names
        if !command.options.is_empty() || !command.parameters.is_empty() {
            return None;
        }

        if command.arguments.is_empty() {
            return Some(Command::List);
        }

        Some(Command::Doc(command.arguments.join(" ").to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Option<Command> {
        let parser = Parser::new('.', '-');
        let rules = NickRules::new("helpbot");
        Command::parse(&parser, &rules, body)
    }

    #[test]
    fn test_parse_help_without_argument() {
        assert_eq!(parse(".help"), Some(Command::List));
    }

    #[test]
    fn test_parse_commands_without_argument() {
        assert_eq!(parse(".commands"), Some(Command::List));
    }

    #[test]
    fn test_parse_help_with_command() {
        assert_eq!(parse(".help tell"), Some(Command::Doc("tell".to_string())));
    }

    #[test]
    fn test_parse_help_lowercases_command() {
        assert_eq!(parse(".help TELL"), Some(Command::Doc("tell".to_string())));
    }

    #[test]
    fn test_parse_commands_with_command() {
        assert_eq!(
            parse(".commands seen"),
            Some(Command::Doc("seen".to_string()))
        );
    }

    #[test]
    fn test_parse_other_prefixed_command() {
        assert_eq!(parse(".tell alice hello"), None);
    }

    #[test]
    fn test_parse_plain_message() {
        assert_eq!(parse("This is not a command"), None);
    }

    #[test]
    fn test_parse_other_prefix() {
        assert_eq!(parse("!help"), None);
    }

    #[test]
    fn test_parse_nick_doc() {
        assert_eq!(
            parse("helpbot: help tell"),
            Some(Command::Doc("tell".to_string()))
        );
        assert_eq!(
            parse("helpbot, doc Tell??"),
            Some(Command::Doc("tell".to_string()))
        );
        assert_eq!(
            parse("HelpBot: help seen"),
            Some(Command::Doc("seen".to_string()))
        );
    }

    #[test]
    fn test_parse_nick_doc_rejects_non_alphabetic_name() {
        assert_eq!(parse("helpbot: help tell2"), None);
    }

    #[test]
    fn test_parse_nick_greeting() {
        assert_eq!(parse("helpbot: help"), Some(Command::Greeting));
        assert_eq!(parse("helpbot, help?!"), Some(Command::Greeting));
        assert_eq!(parse("helpbot: HELP"), Some(Command::Greeting));
    }

    #[test]
    fn test_parse_nick_requires_separator() {
        assert_eq!(parse("helpbot help me"), None);
        assert_eq!(parse("helpbot help"), None);
        assert_eq!(parse("HelpBot doc tell"), None);
    }

    #[test]
    fn test_parse_help_with_option() {
        assert_eq!(parse(".help -v"), None);
        assert_eq!(parse(".commands --all"), None);
        assert_eq!(parse(".help -key:value"), None);
    }

    #[test]
    fn test_parse_other_nick() {
        assert_eq!(parse("otherbot: help"), None);
        assert_eq!(parse("otherbot: help tell"), None);
    }

    #[test]
    fn test_parse_nick_with_regex_characters() {
        let parser = Parser::new('.', '-');
        let rules = NickRules::new("bot[1]");
        assert_eq!(
            Command::parse(&parser, &rules, "bot[1]: help"),
            Some(Command::Greeting)
        );
        assert_eq!(Command::parse(&parser, &rules, "bot1: help"), None);
    }
}
