//! [termbin](https://termbin.com) backend.
//!
//! termbin does not speak HTTP: the client opens a TCP connection, writes the
//! text, closes its sending half and reads the paste URL until the server
//! closes the connection.

use std::{io, time::Duration};

use async_trait::async_trait;
use log::{debug, error, info};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
    time,
};

use crate::paste::{Backend, PostingError};

/// Live termbin host.
pub const TERMBIN_HOST: &str = "termbin.com";
/// Live termbin port.
pub const TERMBIN_PORT: u16 = 9999;
/// termbin may never be waited on forever.
pub const TERMBIN_TIMEOUT: Duration = Duration::from_secs(10);

const READ_CHUNK_SIZE: usize = 1024;

/// Sends text over termbin's raw socket protocol.
pub struct Termbin {
    host: String,
    port: u16,
    /// Bound on the whole exchange, from connection to end of stream
    timeout: Duration,
}

impl Termbin {
    /// Create a new [Termbin] talking to `host:port`.
    pub fn new(host: &str, port: u16, timeout: Duration) -> Self {
        Termbin {
            host: host.to_string(),
            port,
            timeout,
        }
    }

    async fn exchange(&self, text: &str) -> io::Result<Vec<u8>> {
        let mut stream = TcpStream::connect((self.host.as_str(), self.port)).await?;
        stream.write_all(text.as_bytes()).await?;
        // Half-close so the server knows the paste is complete
        stream.shutdown().await?;

        let mut response = Vec::new();
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            let read = stream.read(&mut chunk).await?;
            if read == 0 {
                break;
            }
            response.extend_from_slice(&chunk[..read]);
        }

        Ok(response)
    }
}

#[async_trait]
impl Backend for Termbin {
    async fn post(&self, text: &str) -> Result<String, PostingError> {
        info!("post {} bytes to termbin", text.len());
        debug!("connect to {}:{}", &self.host, self.port);

        let response = match time::timeout(self.timeout, self.exchange(text)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!("error during communication with termbin: {}", e);
                return Err(PostingError::with_cause("Error uploading to termbin", e));
            }
            Err(elapsed) => {
                error!(
                    "termbin did not answer within {}s",
                    self.timeout.as_secs_f32()
                );
                return Err(PostingError::with_cause(
                    "Error uploading to termbin",
                    elapsed,
                ));
            }
        };

        let url = String::from_utf8_lossy(&response)
            .trim_end_matches(['\0', '\n'])
            .to_string();

        debug!("response from {}:{} -> {}", &self.host, self.port, &url);

        Ok(url)
    }
}
