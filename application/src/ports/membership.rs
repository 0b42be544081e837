//! Membership snapshot port

use super::text_generator::GatewayError;
use async_trait::async_trait;
use qa_domain::MembershipSnapshot;

/// Source of the current peer set
#[async_trait]
pub trait MembershipProvider: Send + Sync {
    /// Take a point-in-time snapshot of known peers
    async fn snapshot(&self) -> Result<MembershipSnapshot, GatewayError>;
}
