//! Membership adapters

mod static_membership;

pub use static_membership::StaticMembership;
