//! Fixed peer set loaded from configuration

use crate::config::FilePeersConfig;
use async_trait::async_trait;
use qa_application::{GatewayError, MembershipProvider};
use qa_domain::{MembershipSnapshot, PeerIdentity};

/// Serves the same configured peer set on every snapshot.
pub struct StaticMembership {
    snapshot: MembershipSnapshot,
}

impl StaticMembership {
    pub fn new(peers: Vec<PeerIdentity>) -> Self {
        Self {
            snapshot: MembershipSnapshot::new(peers),
        }
    }

    pub fn from_config(config: &FilePeersConfig) -> Self {
        Self::new(config.identities())
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}

#[async_trait]
impl MembershipProvider for StaticMembership {
    async fn snapshot(&self) -> Result<MembershipSnapshot, GatewayError> {
        Ok(self.snapshot.clone())
    }
}
