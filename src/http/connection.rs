use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::config::SiteConfig;
use crate::http::handler::handle;
use crate::http::writer::ResponseWriter;

pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    site: Arc<SiteConfig>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Bytes),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<SiteConfig>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(site.max_request_bytes),
            site,
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request, then closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match timeout(self.site.read_timeout, self.read_request()).await {
                        Ok(read) => match read? {
                            Some(raw) => {
                                self.state = ConnectionState::Processing(raw);
                            }
                            None => {
                                self.state = ConnectionState::Closed;
                            }
                        },
                        Err(_) => {
                            tracing::debug!(
                                timeout = ?self.site.read_timeout,
                                "Request not received in time, closing"
                            );
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(raw) => {
                    let raw = raw.clone();
                    let site = Arc::clone(&self.site);

                    // File reads are blocking
                    let response =
                        tokio::task::spawn_blocking(move || handle(&raw, &site)).await?;

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // No persistent connections
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Collects bytes until the header block ends, the peer stops sending,
    /// or the size budget is used up. `None` means the peer sent nothing.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Bytes>> {
        let limit = self.site.max_request_bytes;

        loop {
            if self.buffer.len() >= limit {
                self.buffer.truncate(limit);
                break;
            }
            if find_headers_end(&self.buffer).is_some() {
                break;
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                break;
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }

        Ok(Some(self.buffer.split().freeze()))
    }
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
