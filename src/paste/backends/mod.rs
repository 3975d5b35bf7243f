//! Pastebin service implementations.
//!
//! Three services are reached over HTTP and share the `http` helpers. termbin
//! uses its own line protocol over a raw TCP socket.
//!
//! | Backend | Request | Success |
//! |---------|---------|---------|
//! | clbin | form field `clbin` | body contains `https://clbin.com/` |
//! | 0x0 | multipart file `file` | body contains `https://0x0.st` |
//! | hastebin | raw body to `/documents` | JSON object with a `key` |
//! | termbin | raw TCP, half-close, read to EOF | clean EOF |

mod clbin;
mod hastebin;
mod http;
mod termbin;
mod zero_x0;

pub use crate::paste::backends::{
    clbin::{CLBIN_URL, Clbin},
    hastebin::{HASTEBIN_URL, Hastebin},
    termbin::{TERMBIN_HOST, TERMBIN_PORT, TERMBIN_TIMEOUT, Termbin},
    zero_x0::{ZERO_X0_URL, ZeroX0},
};
pub(crate) use crate::paste::backends::http::build_client;
