//! Progress reporting for validator iterations

use crate::output::console::{ConsoleFormatter, truncate};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use qa_application::IterationProgress;
use qa_domain::{Engine, PeerAnswer, PeerUid, Question, ScoreRecord, StreamOutcome, WeightVector};
use std::sync::Mutex;

const QUESTION_PREVIEW_CHARS: usize = 60;

fn outcome_label(outcome: &StreamOutcome) -> String {
    match outcome {
        StreamOutcome::Completed => "answered".to_string(),
        StreamOutcome::TimedOut => "timed out".to_string(),
        StreamOutcome::Failed(reason) => format!("failed: {}", reason),
    }
}

/// Reports progress with one progress bar per iteration
pub struct ConsoleReporter {
    multi: MultiProgress,
    iteration_bar: Mutex<Option<ProgressBar>>,
    show_scores: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            iteration_bar: Mutex::new(None),
            show_scores: false,
        }
    }

    /// Print the per-peer score table after every iteration
    pub fn with_scores(mut self, show: bool) -> Self {
        self.show_scores = show;
        self
    }

    fn iteration_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn println(&self, text: &str) {
        if self.multi.println(text).is_err() {
            println!("{}", text);
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl IterationProgress for ConsoleReporter {
    fn on_iteration_start(&self, step: u64, question: &Question, engine: &Engine, peers: usize) {
        let pb = self.multi.add(ProgressBar::new(peers as u64));
        pb.set_style(Self::iteration_style());
        pb.set_prefix(format!("Step {} ({})", step, engine));
        pb.set_message(truncate(question.content(), QUESTION_PREVIEW_CHARS));

        if let Ok(mut slot) = self.iteration_bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_peer_chunk(&self, _peer: PeerUid, _chunk: &str) {
        if let Ok(slot) = self.iteration_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.tick();
        }
    }

    fn on_peer_complete(&self, answer: &PeerAnswer) {
        if let Ok(slot) = self.iteration_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = if answer.is_success() {
                format!("{} #{}", "v".green(), answer.peer)
            } else {
                format!(
                    "{} #{} ({})",
                    "x".red(),
                    answer.peer,
                    outcome_label(&answer.outcome)
                )
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_iteration_complete(&self, step: u64, record: &ScoreRecord) {
        if let Ok(mut slot) = self.iteration_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("mean {:.3}", record.mean()).green().to_string());
        }
        if self.show_scores {
            self.println(&ConsoleFormatter::format_scores(step, record));
        }
    }

    fn on_weights_emitted(&self, weights: &WeightVector, submitted: bool) {
        self.println(&ConsoleFormatter::format_weights(weights, submitted));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl IterationProgress for SimpleProgress {
    fn on_iteration_start(&self, step: u64, question: &Question, engine: &Engine, peers: usize) {
        println!(
            "{} {} [{}] {} ({} peers)",
            "->".cyan(),
            format!("Step {}", step).bold(),
            engine,
            truncate(question.content(), QUESTION_PREVIEW_CHARS),
            peers
        );
    }

    fn on_peer_complete(&self, answer: &PeerAnswer) {
        if answer.is_success() {
            println!("  {} #{}", "v".green(), answer.peer);
        } else {
            println!(
                "  {} #{} ({})",
                "x".red(),
                answer.peer,
                outcome_label(&answer.outcome)
            );
        }
    }

    fn on_iteration_complete(&self, step: u64, record: &ScoreRecord) {
        println!("  step {} mean score {:.3}", step, record.mean());
    }

    fn on_weights_emitted(&self, weights: &WeightVector, submitted: bool) {
        print!("{}", ConsoleFormatter::format_weights(weights, submitted));
    }
}
