//! Peer response collection use case
//!
//! Broadcasts one query to every peer concurrently and waits until each
//! peer's stream has completed, failed, or timed out.

use crate::config::CollectionParams;
use crate::ports::peer_network::{PeerNetwork, PeerQuery};
use crate::ports::progress::{IterationProgress, NoProgress};
use qa_domain::{PeerAnswer, PeerIdentity, PeerUid, StreamChunk};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Every queried peer's answer, keyed by uid
pub type CollectedAnswers = BTreeMap<PeerUid, PeerAnswer>;

/// Fan-out of one query to a set of peers
pub struct PeerResponseCollector {
    network: Arc<dyn PeerNetwork>,
    peer_timeout: Duration,
    progress: Arc<dyn IterationProgress>,
}

impl PeerResponseCollector {
    pub fn new(network: Arc<dyn PeerNetwork>, params: &CollectionParams) -> Self {
        Self {
            network,
            peer_timeout: params.peer_timeout,
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn IterationProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn peer_timeout(&self) -> Duration {
        self.peer_timeout
    }

    /// Query all peers in parallel.
    ///
    /// The result holds exactly one entry per distinct peer uid. Returns no
    /// later than the per-peer timeout (plus scheduling slack), however many
    /// peers stall.
    pub async fn collect(&self, peers: &[PeerIdentity], query: &PeerQuery) -> CollectedAnswers {
        info!("Broadcasting query to {} peers", peers.len());

        let mut join_set = JoinSet::new();

        for peer in peers {
            let network = Arc::clone(&self.network);
            let progress = Arc::clone(&self.progress);
            let peer = peer.clone();
            let query = query.clone();
            let timeout = self.peer_timeout;

            join_set.spawn(async move {
                Self::query_peer(network.as_ref(), &peer, &query, timeout, progress.as_ref()).await
            });
        }

        let mut answers = CollectedAnswers::new();

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok(answer) => {
                    self.progress.on_peer_complete(&answer);
                    answers.insert(answer.peer, answer);
                }
                Err(e) => {
                    warn!("Peer task join error: {}", e);
                }
            }
        }

        // A panicked task never reports back
        for peer in peers {
            if !answers.contains_key(&peer.uid) {
                let answer = PeerAnswer::failed(peer.uid, "collection task aborted");
                self.progress.on_peer_complete(&answer);
                answers.insert(peer.uid, answer);
            }
        }

        let completed = answers.values().filter(|a| a.is_success()).count();
        info!("Collected {}/{} peer answers", completed, answers.len());
        answers
    }

    async fn query_peer(
        network: &dyn PeerNetwork,
        peer: &PeerIdentity,
        query: &PeerQuery,
        timeout: Duration,
        progress: &dyn IterationProgress,
    ) -> PeerAnswer {
        let uid = peer.uid;
        let exchange = async {
            let stream = network.open_stream(peer, query).await?;
            stream
                .collect_answer(|chunk| match chunk {
                    StreamChunk::Fragment(text) => progress.on_peer_chunk(uid, text),
                    StreamChunk::Final(payload) => {
                        debug!("{} sent final payload", peer);
                        progress.on_peer_chunk(uid, &payload.completion);
                    }
                })
                .await
        };

        match tokio::time::timeout(timeout, exchange).await {
            Ok(Ok(text)) => {
                debug!("{} answered ({} chars)", peer, text.len());
                PeerAnswer::completed(uid, text)
            }
            Ok(Err(e)) => {
                warn!("{} stream failed: {}", peer, e);
                PeerAnswer::failed(uid, e.to_string())
            }
            Err(_) => {
                warn!("{} timed out after {:?}", peer, timeout);
                PeerAnswer::timed_out(uid)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{PeerBehavior, ScriptedNetwork, peer};
    use qa_domain::{Engine, StreamOutcome};
    use std::sync::Mutex;
    use tokio::time::Instant;

    #[derive(Default)]
    struct RecordingProgress {
        chunks: Mutex<Vec<(PeerUid, String)>>,
        completed: Mutex<Vec<PeerUid>>,
    }

    impl IterationProgress for RecordingProgress {
        fn on_iteration_start(
            &self,
            _step: u64,
            _question: &qa_domain::Question,
            _engine: &Engine,
            _peers: usize,
        ) {
        }
        fn on_iteration_complete(&self, _step: u64, _record: &qa_domain::ScoreRecord) {}

        fn on_peer_chunk(&self, peer: PeerUid, chunk: &str) {
            self.chunks.lock().unwrap().push((peer, chunk.to_string()));
        }

        fn on_peer_complete(&self, answer: &PeerAnswer) {
            self.completed.lock().unwrap().push(answer.peer);
        }
    }

    fn collector(network: Arc<ScriptedNetwork>) -> PeerResponseCollector {
        PeerResponseCollector::new(
            network,
            &CollectionParams::default().with_peer_timeout(Duration::from_secs(12)),
        )
    }

    fn query() -> PeerQuery {
        PeerQuery::new("What is the capital of France?", Engine::Gpt35Turbo)
    }

    fn chunks(parts: &[&str]) -> PeerBehavior {
        PeerBehavior::Chunks(parts.iter().map(|p| StreamChunk::fragment(*p)).collect())
    }

    #[tokio::test(start_paused = true)]
    async fn test_fragments_reassemble_and_silent_peer_times_out() {
        let network = Arc::new(ScriptedNetwork::new([
            (0, chunks(&["Par", "is"])),
            (1, PeerBehavior::Silent),
        ]));
        let collector = collector(network.clone());

        let answers = collector.collect(&[peer(0), peer(1)], &query()).await;

        assert_eq!(answers.len(), 2);
        assert_eq!(answers[&0].text.as_deref(), Some("Paris"));
        assert!(answers[&0].is_success());
        assert_eq!(answers[&1].text, None);
        assert_eq!(answers[&1].outcome, StreamOutcome::TimedOut);

        let queries = network.queries();
        assert_eq!(queries.len(), 2);
        assert!(queries.iter().all(|(_, q)| q == &query()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_bounded_by_timeout() {
        let behaviors: Vec<(PeerUid, PeerBehavior)> =
            (0..64).map(|uid| (uid, PeerBehavior::Silent)).collect();
        let network = Arc::new(ScriptedNetwork::new(behaviors));
        let collector = collector(network);
        let peers: Vec<PeerIdentity> = (0..64).map(peer).collect();

        let started = Instant::now();
        let answers = collector.collect(&peers, &query()).await;
        let elapsed = started.elapsed();

        assert_eq!(answers.len(), 64);
        assert!(answers.values().all(|a| a.outcome == StreamOutcome::TimedOut));
        assert!(elapsed >= Duration::from_secs(12));
        assert!(elapsed < Duration::from_secs(13));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_peer_does_not_affect_others() {
        let network = Arc::new(ScriptedNetwork::new([
            (0, PeerBehavior::Refuse),
            (
                1,
                PeerBehavior::Chunks(vec![
                    StreamChunk::fragment("Pa"),
                    StreamChunk::final_answer("Paris"),
                ]),
            ),
            (2, chunks(&["Lyon"])),
        ]));
        let collector = collector(network);

        let answers = collector
            .collect(&[peer(0), peer(1), peer(2)], &query())
            .await;

        assert!(matches!(answers[&0].outcome, StreamOutcome::Failed(_)));
        assert_eq!(answers[&0].text, None);
        assert_eq!(answers[&1].text.as_deref(), Some("Paris"));
        assert_eq!(answers[&2].text.as_deref(), Some("Lyon"));
    }

    #[tokio::test]
    async fn test_reports_chunks_and_completions() {
        let network = Arc::new(ScriptedNetwork::new([
            (4, chunks(&["Par", "is"])),
            (5, PeerBehavior::Refuse),
        ]));
        let progress = Arc::new(RecordingProgress::default());
        let collector = collector(network).with_progress(progress.clone());

        collector.collect(&[peer(4), peer(5)], &query()).await;

        assert_eq!(
            *progress.chunks.lock().unwrap(),
            vec![(4, "Par".to_string()), (4, "is".to_string())]
        );
        let mut completed = progress.completed.lock().unwrap().clone();
        completed.sort();
        assert_eq!(completed, vec![4, 5]);
    }

    #[tokio::test]
    async fn test_no_peers_yields_empty_map() {
        let network = Arc::new(ScriptedNetwork::new(Vec::<(PeerUid, PeerBehavior)>::new()));
        let answers = collector(network).collect(&[], &query()).await;
        assert!(answers.is_empty());
    }
}
