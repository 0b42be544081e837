//! Peer identity and membership snapshot

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Network-assigned slot of a peer
pub type PeerUid = u16;

/// A remote responder queried for answers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerIdentity {
    pub uid: PeerUid,
    /// Public key address of the peer
    pub hotkey: String,
    /// Base URL of the peer's query endpoint
    pub endpoint: String,
}

impl PeerIdentity {
    pub fn new(uid: PeerUid, hotkey: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            uid,
            hotkey: hotkey.into(),
            endpoint: endpoint.into(),
        }
    }
}

impl std::fmt::Display for PeerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "uid {} ({})", self.uid, self.hotkey)
    }
}

/// Ordered, uid-unique set of peers taken at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipSnapshot {
    peers: Vec<PeerIdentity>,
}

impl MembershipSnapshot {
    /// Build a snapshot, keeping the first occurrence of each uid.
    pub fn new(peers: impl IntoIterator<Item = PeerIdentity>) -> Self {
        let mut seen = HashSet::new();
        let peers = peers
            .into_iter()
            .filter(|peer| seen.insert(peer.uid))
            .collect();
        Self { peers }
    }

    pub fn peers(&self) -> &[PeerIdentity] {
        &self.peers
    }

    pub fn iter(&self) -> impl Iterator<Item = &PeerIdentity> {
        self.peers.iter()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn get(&self, uid: PeerUid) -> Option<&PeerIdentity> {
        self.peers.iter().find(|peer| peer.uid == uid)
    }

    pub fn uids(&self) -> Vec<PeerUid> {
        self.peers.iter().map(|peer| peer.uid).collect()
    }
}
