//! [`HttpPeerClient`]: streams peer answers over HTTP

use super::codec::LineDecoder;
use crate::openai::map_transport_error;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use qa_application::{ChunkStream, GatewayError, PeerNetwork, PeerQuery};
use qa_domain::{PeerIdentity, StreamChunk};
use std::fmt::Display;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Buffered chunks per peer before the reader waits for the collector
const CHANNEL_CAPACITY: usize = 64;

pub struct HttpPeerClient {
    client: reqwest::Client,
}

impl HttpPeerClient {
    /// `timeout` caps a whole request, including the streamed body.
    pub fn new(timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn stream_url(peer: &PeerIdentity) -> String {
        format!("{}/stream", peer.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl PeerNetwork for HttpPeerClient {
    async fn open_stream(
        &self,
        peer: &PeerIdentity,
        query: &PeerQuery,
    ) -> Result<ChunkStream, GatewayError> {
        let response = self
            .client
            .post(Self::stream_url(peer))
            .json(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::RequestFailed(format!(
                "{} returned HTTP {}",
                peer,
                status.as_u16()
            )));
        }

        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let label = peer.to_string();
        tokio::spawn(async move {
            forward_chunks(response.bytes_stream(), tx).await;
            trace!("{} stream reader finished", label);
        });

        Ok(ChunkStream::new(rx))
    }
}

/// Decode a byte stream into chunks and forward them until the stream
/// ends, a `Final` chunk arrives, an error occurs, or the receiver is gone.
pub(crate) async fn forward_chunks<S, B, E>(
    stream: S,
    tx: mpsc::Sender<Result<StreamChunk, GatewayError>>,
) where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut decoder = LineDecoder::new();

    while let Some(read) = stream.next().await {
        let bytes = match read {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = tx
                    .send(Err(GatewayError::ConnectionError(format!(
                        "Stream interrupted: {}",
                        e
                    ))))
                    .await;
                return;
            }
        };

        for item in decoder.push(bytes.as_ref()) {
            if !send_item(&tx, item).await {
                return;
            }
        }
    }

    if let Some(item) = decoder.finish() {
        send_item(&tx, item).await;
    }
}

/// Forward one item; `false` means stop reading.
async fn send_item(
    tx: &mpsc::Sender<Result<StreamChunk, GatewayError>>,
    item: Result<StreamChunk, GatewayError>,
) -> bool {
    let stop = match &item {
        Ok(chunk) => chunk.is_terminal(),
        Err(_) => true,
    };
    if tx.send(item).await.is_err() {
        debug!("Chunk receiver dropped, abandoning stream");
        return false;
    }
    !stop
}
