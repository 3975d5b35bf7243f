//! helpbin - help plugin for chat bots, publishing command listings to pastebins.
//!
//! # Overview
//!
//! The plugin answers help requests sent to a host chat bot. Short command
//! documentation is answered in place, while the full list of commands is posted
//! to a pastebin service and shared as a link.
//!
//! # Architecture
//!
//! - [`paste`] - Pastebin backends, their registry and the unified [`Poster`](paste::Poster)
//! - [`commands`] - Help command parsing, handlers and delivery through the host
//! - [`config`] - Configuration sections with environment variable support
//!
//! # Supported Pastebins
//!
//! | Name | Service |
//! |------|---------|
//! | `clbin` | <https://clbin.com> |
//! | `0x0` | <https://0x0.st> |
//! | `hastebin` | <https://hastebin.com> |
//! | `termbin` | `termbin.com:9999` |

pub mod commands;
pub mod config;
pub mod paste;
