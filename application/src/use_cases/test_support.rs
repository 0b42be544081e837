//! Scripted port implementations shared by use case tests.

use crate::ports::membership::MembershipProvider;
use crate::ports::peer_network::{ChunkStream, PeerNetwork, PeerQuery};
use crate::ports::telemetry::{IterationRecord, TelemetrySink};
use crate::ports::text_generator::{GatewayError, GenerationRequest, TextGenerator};
use crate::ports::weight_submitter::{SubmissionError, WeightSubmitter};
use async_trait::async_trait;
use qa_domain::{MembershipSnapshot, PeerIdentity, PeerUid, StreamChunk, WeightVector};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Replays queued responses in order, failing once the queue is empty.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}

/// Answers by prompt kind: theme lists, question lists, or reference answers.
pub struct RoutedGenerator {
    pub themes: String,
    pub questions: String,
    pub reference: Option<String>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl RoutedGenerator {
    pub fn new(themes: &str, questions: &str, reference: Option<&str>) -> Self {
        Self {
            themes: themes.to_string(),
            questions: questions.to_string(),
            reference: reference.map(str::to_string),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for RoutedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        if request.prompt.contains("creative themes") {
            Ok(self.themes.clone())
        } else if request.prompt.contains("creative questions") {
            Ok(self.questions.clone())
        } else {
            self.reference
                .clone()
                .ok_or_else(|| GatewayError::ConnectionError("reference down".to_string()))
        }
    }
}

/// How a scripted peer behaves
#[derive(Clone)]
pub enum PeerBehavior {
    /// Stream these chunks, then close the stream.
    Chunks(Vec<StreamChunk>),
    /// Accept the query and never send anything.
    Silent,
    /// Refuse the connection.
    Refuse,
}

pub struct ScriptedNetwork {
    behaviors: HashMap<PeerUid, PeerBehavior>,
    // Keeps silent streams open
    parked: Mutex<Vec<mpsc::Sender<Result<StreamChunk, GatewayError>>>>,
    queries: Mutex<Vec<(PeerUid, PeerQuery)>>,
}

impl ScriptedNetwork {
    pub fn new(behaviors: impl IntoIterator<Item = (PeerUid, PeerBehavior)>) -> Self {
        Self {
            behaviors: behaviors.into_iter().collect(),
            parked: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(PeerUid, PeerQuery)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PeerNetwork for ScriptedNetwork {
    async fn open_stream(
        &self,
        peer: &PeerIdentity,
        query: &PeerQuery,
    ) -> Result<ChunkStream, GatewayError> {
        self.queries.lock().unwrap().push((peer.uid, query.clone()));
        match self.behaviors.get(&peer.uid).cloned() {
            Some(PeerBehavior::Chunks(chunks)) => {
                Ok(ChunkStream::from_items(chunks.into_iter().map(Ok).collect()))
            }
            Some(PeerBehavior::Silent) => {
                let (tx, rx) = mpsc::channel(1);
                self.parked.lock().unwrap().push(tx);
                Ok(ChunkStream::new(rx))
            }
            Some(PeerBehavior::Refuse) | None => Err(GatewayError::ConnectionError(format!(
                "peer {} unreachable",
                peer.uid
            ))),
        }
    }
}

pub fn peer(uid: PeerUid) -> PeerIdentity {
    PeerIdentity::new(uid, format!("hotkey-{uid}"), format!("http://127.0.0.1:{}", 8000 + uid))
}

pub struct StaticMembership(pub MembershipSnapshot);

#[async_trait]
impl MembershipProvider for StaticMembership {
    async fn snapshot(&self) -> Result<MembershipSnapshot, GatewayError> {
        Ok(self.0.clone())
    }
}

pub struct FailingMembership;

#[async_trait]
impl MembershipProvider for FailingMembership {
    async fn snapshot(&self) -> Result<MembershipSnapshot, GatewayError> {
        Err(GatewayError::ConnectionError("chain unreachable".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingSubmitter {
    pub fail: bool,
    submissions: Mutex<Vec<(u16, WeightVector)>>,
}

impl RecordingSubmitter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn submissions(&self) -> Vec<(u16, WeightVector)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeightSubmitter for RecordingSubmitter {
    async fn submit(&self, netuid: u16, weights: &WeightVector) -> Result<(), SubmissionError> {
        self.submissions
            .lock()
            .unwrap()
            .push((netuid, weights.clone()));
        if self.fail {
            Err(SubmissionError::Rejected("not registered".to_string()))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct RecordingTelemetry {
    records: Mutex<Vec<IterationRecord>>,
    flushes: Mutex<usize>,
}

impl RecordingTelemetry {
    pub fn records(&self) -> Vec<IterationRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn flush_count(&self) -> usize {
        *self.flushes.lock().unwrap()
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn record(&self, record: &IterationRecord) {
        self.records.lock().unwrap().push(record.clone());
    }

    fn flush(&self) {
        *self.flushes.lock().unwrap() += 1;
    }
}
