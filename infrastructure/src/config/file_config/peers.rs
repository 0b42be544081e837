//! Peer configuration from TOML (`[peers]` section)

use super::super::issue::{ConfigIssue, ConfigIssueCode, Severity};
use qa_application::CollectionParams;
use qa_domain::{PeerIdentity, PeerUid};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// One statically configured peer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilePeerEntry {
    pub uid: PeerUid,
    #[serde(default)]
    pub hotkey: String,
    pub endpoint: String,
}

impl FilePeerEntry {
    pub fn to_identity(&self) -> PeerIdentity {
        PeerIdentity::new(self.uid, self.hotkey.clone(), self.endpoint.clone())
    }
}

/// Raw peer configuration
///
/// # Example
///
/// ```toml
/// [peers]
/// timeout_secs = 12
///
/// [[peers.members]]
/// uid = 0
/// hotkey = "5F3sa2TJ..."
/// endpoint = "http://10.0.0.5:8091"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePeersConfig {
    /// Per-peer stream timeout
    pub timeout_secs: u64,
    pub members: Vec<FilePeerEntry>,
}

impl Default for FilePeersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: CollectionParams::default().peer_timeout.as_secs(),
            members: Vec::new(),
        }
    }
}

impl FilePeersConfig {
    pub fn to_params(&self) -> CollectionParams {
        CollectionParams::default().with_peer_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn identities(&self) -> Vec<PeerIdentity> {
        self.members.iter().map(FilePeerEntry::to_identity).collect()
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.members.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptySection {
                    section: "peers.members".to_string(),
                },
                message: "No [[peers.members]] configured: every iteration queries nobody"
                    .to_string(),
            });
        }

        let mut seen = HashSet::new();
        for member in &self.members {
            if !seen.insert(member.uid) {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::DuplicateEntry {
                        field: "peers.members.uid".to_string(),
                        value: member.uid.to_string(),
                    },
                    message: format!(
                        "peers.members: uid {} listed more than once, keeping the first",
                        member.uid
                    ),
                });
            }
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::out_of_range(
                "peers.timeout_secs",
                0,
                "peers.timeout_secs must be at least 1",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_deserialize() {
        let toml_str = r#"
timeout_secs = 5

[[members]]
uid = 3
hotkey = "hk-3"
endpoint = "http://127.0.0.1:9000"

[[members]]
uid = 4
endpoint = "http://127.0.0.1:9001"
"#;
        let config: FilePeersConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.to_params().peer_timeout, Duration::from_secs(5));

        let peers = config.identities();
        assert_eq!(peers.len(), 2);
        assert_eq!(peers[0].hotkey, "hk-3");
        assert_eq!(peers[1].hotkey, "");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_duplicate_uid_warns() {
        let entry = FilePeerEntry {
            uid: 1,
            hotkey: String::new(),
            endpoint: "http://a".to_string(),
        };
        let config = FilePeersConfig {
            timeout_secs: 12,
            members: vec![entry.clone(), entry],
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::DuplicateEntry { .. }
        ));
    }

    #[test]
    fn test_empty_members_warns() {
        let issues = FilePeersConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
