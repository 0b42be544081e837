//! Peer membership
//!
//! A [`MembershipSnapshot`] is the point-in-time list of peers to query.
//! Its ordering is also the ordering of every emitted weight vector.

pub mod peer;

pub use peer::{MembershipSnapshot, PeerIdentity, PeerUid};
