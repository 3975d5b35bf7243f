//! Configuration file structures for the helpbin plugin.
//!
//! The configuration is a YAML file split into three sections: the bot identity
//! (`core`), the help plugin settings (`help`) and the pastebin settings (`paste`).
//! Every value can be overridden with an environment variable prefixed with
//! `HELPBIN_`, sections being separated by a double underscore.
//!
//! # Configuration File Format
//!
//! ```yaml
//! core:
//!   # Nick of the bot, used in the listing header and nick-addressed commands
//!   nick: "helpbot"
//!   # Host the bot is connected to
//!   host: "irc.libera.chat"
//!   owner: "alice"
//!   help_prefix: "."
//!
//! help:
//!   # Pastebin backend receiving the command listing
//!   output: "clbin"
//!
//! paste:
//!   # Timeout in seconds of every posting attempt
//!   timeout: 10
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export HELPBIN_HELP__OUTPUT="termbin"
//! export HELPBIN_PASTE__TIMEOUT=5
//! ```

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::paste::{
    CLBIN_URL, ConfigurationError, HASTEBIN_URL, TERMBIN_HOST, TERMBIN_PORT, TERMBIN_TIMEOUT,
    ZERO_X0_URL,
};

/// Prefix of the environment variables overriding the file.
const ENV_PREFIX: &str = "HELPBIN_";

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Bot identity
    #[serde(default)]
    pub core: CoreSection,
    /// Help plugin settings
    #[serde(default)]
    pub help: HelpSection,
    /// Pastebin settings
    #[serde(default)]
    pub paste: PasteSection,
}

/// Identity of the bot, owned by the host framework.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CoreSection {
    /// Nick of the bot.
    pub nick: String,
    /// Host name of the chat server.
    pub host: String,
    /// Owner shown in the greeting.
    pub owner: String,
    /// Prefix of the bot commands, e.g. `.` for `.help`.
    pub help_prefix: char,
}

impl Default for CoreSection {
    fn default() -> Self {
        CoreSection {
            nick: "helpbot".to_string(),
            host: "localhost".to_string(),
            owner: "nobody".to_string(),
            help_prefix: '.',
        }
    }
}

/// Help plugin settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HelpSection {
    /// Name of the pastebin backend used to publish the command listing.
    ///
    /// Must be one of the registered backends, see [`HelpSection::validate`].
    pub output: String,
}

impl Default for HelpSection {
    fn default() -> Self {
        HelpSection {
            output: "clbin".to_string(),
        }
    }
}

impl HelpSection {
    /// Checks that [`HelpSection::output`] is one of `names`.
    pub fn validate(&self, names: &[&str]) -> Result<(), ConfigurationError> {
        if names.contains(&self.output.as_str()) {
            Ok(())
        } else {
            Err(ConfigurationError::UnknownBackend(self.output.clone()))
        }
    }
}

/// Pastebin settings.
///
/// Endpoints default to the live services and should only be changed to target a
/// mirror. URL recognition of the answers does not depend on them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasteSection {
    /// Timeout in seconds of a posting attempt. Zero falls back to the default.
    pub timeout: u64,
    /// clbin form endpoint
    pub clbin_url: String,
    /// 0x0 upload endpoint
    pub zero_x0_url: String,
    /// hastebin server, `/documents` is appended
    pub hastebin_url: String,
    /// termbin host
    pub termbin_host: String,
    /// termbin port
    pub termbin_port: u16,
}

impl Default for PasteSection {
    fn default() -> Self {
        PasteSection {
            timeout: TERMBIN_TIMEOUT.as_secs(),
            clbin_url: CLBIN_URL.to_string(),
            zero_x0_url: ZERO_X0_URL.to_string(),
            hastebin_url: HASTEBIN_URL.to_string(),
            termbin_host: TERMBIN_HOST.to_string(),
            termbin_port: TERMBIN_PORT,
        }
    }
}

impl PasteSection {
    /// Finite timeout applied to every backend.
    pub fn timeout(&self) -> Duration {
        match self.timeout {
            0 => TERMBIN_TIMEOUT,
            seconds => Duration::from_secs(seconds),
        }
    }
}

impl Config {
    /// Loads the configuration from a YAML file, then applies `HELPBIN_`
    /// environment variable overrides.
    ///
    /// Missing sections and fields take their default values.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }
}

/// Prompt asking an operator to pick a pastebin backend.
///
/// ```
/// # use helpbin::config::configure_prompt;
/// let prompt = configure_prompt(&["clbin", "termbin"]);
/// assert_eq!(prompt, "Pick a pastebin provider: clbin, termbin: ");
/// ```
pub fn configure_prompt(names: &[&str]) -> String {
    format!("Pick a pastebin provider: {}: ", names.join(", "))
}
