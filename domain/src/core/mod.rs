//! Core domain concepts shared across all subdomains.
//!
//! - [`engine::Engine`] — text-generation engines a query is answered with
//! - [`question::Question`] / [`question::Theme`] — generated question material
//! - [`error::DomainError`] — domain-level errors

pub mod engine;
pub mod error;
pub mod question;
