//! Weight submission adapters

mod jsonl_submitter;

pub use jsonl_submitter::JsonlWeightSubmitter;
