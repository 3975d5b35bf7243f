//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, the entry point the host bot
//! calls for every received message. It parses the message, routes the command
//! to its handler and delivers the handler's messages through the [`Host`].
//!
//! # Flow
//!
//! ```text
//! Chat message → parse() → Command → execute() → CommandResult → Host
//! ```
//!
//! # Examples
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use helpbin::commands::{Catalog, Commander, Host, Trigger};
//! # use helpbin::config::Config;
//! # use helpbin::paste::{BackendRegistry, Poster};
//! # async fn example(host: &dyn Host) -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let poster = Arc::new(Poster::new(BackendRegistry::with_defaults(&config.paste)?));
//! let commander = Commander::new(&config.core, &config.help, poster)?;
//!
//! let trigger = Trigger {
//!     nick: "alice".to_string(),
//!     sender: "#chan".to_string(),
//!     text: ".help".to_string(),
//! };
//! commander.handle(host, &trigger, &Catalog::default()).await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use command_parser::Parser;
use log::{debug, info};
use tokio::sync::Mutex;

use crate::{
    commands::{
        CachedListing, Catalog, CommandResult, Host, Outgoing, Trigger,
        actions::{ListingContext, handle_commands, handle_doc, handle_greeting},
        command::{Command, NickRules},
        responses::{CREATING_LIST, format_listing_posted},
    },
    config::{CoreSection, HelpSection},
    paste::{ConfigurationError, Poster},
};

/// Command orchestrator of the help plugin.
///
/// The Commander is responsible for:
/// - Parsing raw message text into structured commands
/// - Routing commands to appropriate handlers
/// - Remembering the last posted command listing
/// - Delivering the answers through the host
pub struct Commander {
    /// Parser of prefixed commands
    parser: Parser,
    /// Matchers of nick-addressed commands
    rules: NickRules,
    nick: String,
    host: String,
    owner: String,
    prefix: char,
    /// Backend receiving the command listing
    output: String,
    poster: Arc<Poster>,
    /// Last posted listing
    listing: Mutex<Option<CachedListing>>,
}

impl Commander {
    /// Creates a new Commander for the bot described by `core`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBackend`] if the configured listing
    /// backend is not known by `poster`.
    pub fn new(
        core: &CoreSection,
        help: &HelpSection,
        poster: Arc<Poster>,
    ) -> Result<Self, ConfigurationError> {
        help.validate(&poster.backend_names())?;

        Ok(Commander {
            parser: Parser::new(core.help_prefix, '-'),
            rules: NickRules::new(&core.nick),
            nick: core.nick.clone(),
            host: core.host.clone(),
            owner: core.owner.clone(),
            prefix: core.help_prefix,
            output: help.output.clone(),
            poster,
            listing: Mutex::new(None),
        })
    }

    /// Parses a message body into a help command.
    ///
    /// Returns `None` for messages the plugin does not handle.
    pub fn parse(&self, body: &str) -> Option<Command> {
        Command::parse(&self.parser, &self.rules, body)
    }

    /// Handles a received message.
    ///
    /// Returns whether the message was a help command.
    pub async fn handle(&self, host: &dyn Host, trigger: &Trigger, catalog: &Catalog) -> bool {
        let Some(command) = self.parse(&trigger.text) else {
            return false;
        };

        info!("{} asked for {:?} in {}", trigger.nick, command, trigger.sender);

        let result = self.execute(&command, host, trigger, catalog).await;
        self.apply(result, host).await;

        true
    }

    /// Executes a parsed command and returns the result.
    ///
    /// A listing request that cannot be served from memory tells the users to
    /// wait before posting, as posting may take several seconds.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Doc`] → [`handle_doc`]
    /// - [`Command::List`] → [`handle_commands`], unless a listing is remembered
    /// - [`Command::Greeting`] → [`handle_greeting`]
    pub async fn execute(
        &self,
        command: &Command,
        host: &dyn Host,
        trigger: &Trigger,
        catalog: &Catalog,
    ) -> CommandResult {
        match command {
            Command::Doc(name) => handle_doc(catalog, trigger, name),
            Command::Greeting => handle_greeting(self.prefix, &self.owner),
            Command::List => {
                if let Some(url) = self.remembered_listing(catalog).await {
                    debug!("reuse command listing {}", url);
                    return CommandResult {
                        messages: vec![Outgoing::Say(format_listing_posted(&url, self.prefix))],
                        listing: None,
                    };
                }

                // Posting may take several seconds
                let notice = CommandResult {
                    messages: vec![Outgoing::Say(CREATING_LIST.to_string())],
                    listing: None,
                };
                self.apply(notice, host).await;

                let context = ListingContext {
                    nick: &self.nick,
                    host: &self.host,
                    prefix: self.prefix,
                    backend: &self.output,
                };
                handle_commands(&self.poster, catalog, &context).await
            }
        }
    }

    /// The last posted listing, if any.
    pub async fn cached_listing(&self) -> Option<CachedListing> {
        self.listing.lock().await.clone()
    }

    /// URL of the remembered listing if it still matches the catalog and backend.
    async fn remembered_listing(&self, catalog: &Catalog) -> Option<String> {
        let listing = self.listing.lock().await;
        listing
            .as_ref()
            .filter(|listing| {
                listing.group_count == catalog.groups.len() && listing.backend == self.output
            })
            .map(|listing| listing.url.clone())
    }

    /// Remembers the posted listing and delivers the messages.
    async fn apply(&self, result: CommandResult, host: &dyn Host) {
        if let Some(listing) = result.listing {
            *self.listing.lock().await = Some(listing);
        }

        for message in result.messages {
            match message {
                Outgoing::Reply(text) => host.reply(&text).await,
                Outgoing::Say(text) => host.say(&text).await,
                Outgoing::Msg(target, text) => host.msg(&target, &text).await,
            }
        }
    }
}
