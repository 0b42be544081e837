//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod collect_responses;
pub mod generate_list;
pub mod question_supply;
pub mod reference_answer;
pub mod run_validator;

#[cfg(test)]
pub(crate) mod test_support;
