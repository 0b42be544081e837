//! Run Validator use case
//!
//! Drives the validator loop. Each iteration:
//!
//! | Step | Action                                              |
//! |------|-----------------------------------------------------|
//! | 1    | Membership snapshot                                 |
//! | 2    | Next question from the rotation                     |
//! | 3    | Engine draw                                         |
//! | 4    | Peer collection and reference answer, concurrently  |
//! | 5    | Scoring and reputation update                       |
//! | 6    | Telemetry record                                    |
//! | 7    | Weight emission when the cadence is due             |
//!
//! Iterations never overlap; errors and panics end only the iteration
//! they happen in.

mod types;

pub use types::{IterationError, IterationOutcome, IterationReport, RunSummary};

use crate::config::{ValidatorConfig, ValidatorParams};
use crate::ports::membership::MembershipProvider;
use crate::ports::peer_network::{PeerNetwork, PeerQuery};
use crate::ports::progress::{IterationProgress, NoProgress};
use crate::ports::telemetry::{IterationRecord, TelemetrySink};
use crate::ports::text_generator::TextGenerator;
use crate::ports::weight_submitter::WeightSubmitter;
use crate::use_cases::collect_responses::PeerResponseCollector;
use crate::use_cases::question_supply::RotatingQuestionSupply;
use crate::use_cases::reference_answer::ReferenceAnswerer;
use chrono::Utc;
use futures::FutureExt;
use qa_domain::{
    DomainError, EnginePolicy, MembershipSnapshot, Question, ReputationVector, RotationCursor,
    ScoreRecord, Scorer, WeightScheduler, WeightVector,
};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// External collaborators the loop talks to
pub struct ValidatorPorts {
    pub generator: Arc<dyn TextGenerator>,
    pub network: Arc<dyn PeerNetwork>,
    pub membership: Arc<dyn MembershipProvider>,
    pub submitter: Arc<dyn WeightSubmitter>,
    pub telemetry: Arc<dyn TelemetrySink>,
}

/// The validator's single owner of rotation and reputation state
pub struct ValidatorLoop {
    membership: Arc<dyn MembershipProvider>,
    submitter: Arc<dyn WeightSubmitter>,
    telemetry: Arc<dyn TelemetrySink>,
    progress: Arc<dyn IterationProgress>,
    supply: RotatingQuestionSupply,
    reference: ReferenceAnswerer,
    collector: PeerResponseCollector,
    scorer: Box<dyn Scorer>,
    engine_policy: EnginePolicy,
    params: ValidatorParams,
    cursor: RotationCursor,
    reputation: ReputationVector,
    scheduler: WeightScheduler,
    /// Completed iterations
    step: u64,
    /// Question of the iteration in progress, for error context
    in_flight: Option<Question>,
}

impl ValidatorLoop {
    pub fn new(config: ValidatorConfig, ports: ValidatorPorts) -> Result<Self, DomainError> {
        config.validate()?;
        let reputation = ReputationVector::new(config.validator.alpha)?;
        let scheduler = WeightScheduler::new(config.validator.weight_emit_cadence)?;

        Ok(Self {
            membership: ports.membership,
            submitter: ports.submitter,
            telemetry: ports.telemetry,
            progress: Arc::new(NoProgress),
            supply: RotatingQuestionSupply::new(ports.generator.clone(), config.generation),
            reference: ReferenceAnswerer::new(ports.generator),
            collector: PeerResponseCollector::new(ports.network, &config.collection),
            scorer: config.scoring.scorer(),
            engine_policy: config.engine,
            params: config.validator,
            cursor: RotationCursor::new(),
            reputation,
            scheduler,
            step: 0,
            in_flight: None,
        })
    }

    pub fn with_progress(mut self, progress: Arc<dyn IterationProgress>) -> Self {
        self.collector = self.collector.with_progress(progress.clone());
        self.progress = progress;
        self
    }

    /// Replace the scorer chosen by the scoring policy.
    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Replace the fallback theme set.
    pub fn with_default_themes(mut self, themes: Vec<String>) -> Self {
        self.supply = self.supply.with_default_themes(themes);
        self
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn reputation(&self) -> &ReputationVector {
        &self.reputation
    }

    pub fn cursor(&self) -> &RotationCursor {
        &self.cursor
    }

    pub fn params(&self) -> &ValidatorParams {
        &self.params
    }

    /// Run iterations until cancelled or `max_iterations` is reached.
    ///
    /// Cancellation is only observed between iterations. Telemetry is
    /// flushed before returning.
    pub async fn run(&mut self, cancel: CancellationToken) -> RunSummary {
        let mut summary = RunSummary::default();
        info!(
            "Validator loop started (netuid {}, alpha {}, cadence {})",
            self.params.netuid,
            self.params.alpha,
            self.scheduler.cadence()
        );

        loop {
            if cancel.is_cancelled() {
                info!("Shutdown requested, stopping before next iteration");
                break;
            }

            summary.iterations += 1;
            let attempt = AssertUnwindSafe(self.run_iteration()).catch_unwind().await;

            match attempt {
                Ok(Ok(report)) => {
                    if !report.is_scored() {
                        summary.skipped_scoring += 1;
                    }
                    if report.weights.is_some() {
                        summary.weight_emissions += 1;
                    }
                }
                Ok(Err(e)) => {
                    summary.failed_iterations += 1;
                    error!(
                        "Iteration at step {} failed (query: {}): {}",
                        self.step,
                        self.in_flight_label(),
                        e
                    );
                }
                Err(panic) => {
                    summary.failed_iterations += 1;
                    error!(
                        "Iteration at step {} panicked (query: {}): {}",
                        self.step,
                        self.in_flight_label(),
                        panic_message(panic.as_ref())
                    );
                }
            }
            self.in_flight = None;

            if let Some(max) = self.params.max_iterations
                && summary.iterations >= max
            {
                info!("Reached {} iterations, stopping", max);
                break;
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("Shutdown requested, stopping");
                    break;
                }
                _ = tokio::time::sleep(self.params.iteration_interval) => {}
            }
        }

        self.telemetry.flush();
        info!(
            "Validator loop finished: {} iterations, {} failed, {} weight emissions",
            summary.iterations, summary.failed_iterations, summary.weight_emissions
        );
        summary
    }

    /// Run one full iteration.
    pub async fn run_iteration(&mut self) -> Result<IterationReport, IterationError> {
        let started = Utc::now();
        let step = self.step;

        let snapshot = self
            .membership
            .snapshot()
            .await
            .map_err(IterationError::Membership)?;

        let question = self.supply.next_question(&mut self.cursor).await?;
        self.in_flight = Some(question.clone());

        let engine = self.engine_policy.select(rand::random::<f64>()).clone();
        info!("Step {}: asking {} peers '{}' ({})", step, snapshot.len(), question, engine);
        self.progress
            .on_iteration_start(step, &question, &engine, snapshot.len());

        let query = PeerQuery::new(question.content(), engine.clone());
        let (answers, reference) = tokio::join!(
            self.collector.collect(snapshot.peers(), &query),
            self.reference.answer(&question, &engine),
        );

        let (record, outcome) = match reference.as_deref() {
            Some(reference) => {
                let record =
                    ScoreRecord::from_answers(self.scorer.as_ref(), reference, answers.values());
                self.reputation.update(&record);
                debug!(
                    "Step {}: scored {} answers with {} (mean {:.3})",
                    step,
                    record.len(),
                    self.scorer.name(),
                    record.mean()
                );
                (record, IterationOutcome::Scored)
            }
            None => {
                warn!(
                    "Step {}: reference answer unavailable for '{}', skipping scoring",
                    step, question
                );
                (ScoreRecord::unscored(answers.values()), IterationOutcome::ScoringSkipped)
            }
        };

        if self.params.telemetry_enabled {
            self.telemetry
                .record(&IterationRecord::new(step, &engine, &question, &record, started));
        }
        self.progress.on_iteration_complete(step, &record);

        self.step += 1;
        let weights = self.maybe_emit_weights(self.step, &snapshot).await;

        Ok(IterationReport {
            step,
            question,
            engine,
            reference,
            answers,
            record,
            outcome,
            weights,
        })
    }

    /// Emit weights if `iteration` completed iterations hit the cadence.
    ///
    /// Normalizes reputation over a fresh membership snapshot (falling back
    /// to `snapshot`) and submits it. Returns the emitted vector, or `None`
    /// off-cadence. A failed submission is logged; reputation is kept so the
    /// next emission carries it forward.
    pub async fn maybe_emit_weights(
        &self,
        iteration: u64,
        snapshot: &MembershipSnapshot,
    ) -> Option<WeightVector> {
        if !self.scheduler.is_due(iteration) {
            return None;
        }

        let fresh = match self.membership.snapshot().await {
            Ok(fresh) => fresh,
            Err(e) => {
                warn!("Fresh membership unavailable for weights, using iteration snapshot: {}", e);
                snapshot.clone()
            }
        };

        let weights = WeightVector::normalize(&self.reputation, &fresh);
        info!(
            "Emitting weights for {} peers after {} iterations",
            weights.len(),
            iteration
        );

        let submitted = match self.submitter.submit(self.params.netuid, &weights).await {
            Ok(()) => true,
            Err(e) => {
                error!("Weight submission failed: {}", e);
                false
            }
        };
        self.progress.on_weights_emitted(&weights, submitted);

        Some(weights)
    }

    fn in_flight_label(&self) -> &str {
        self.in_flight
            .as_ref()
            .map(Question::content)
            .unwrap_or("<none>")
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
