//! Engine value object and escalation policy

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text-generation engine a query is answered with (Value Object)
///
/// The same identifier is sent to peers and to the reference service,
/// so both sides answer with a comparable model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Engine {
    Gpt35Turbo,
    Gpt4,
    Custom(String),
}

impl Engine {
    /// Get the string identifier for this engine
    pub fn as_str(&self) -> &str {
        match self {
            Engine::Gpt35Turbo => "gpt-3.5-turbo",
            Engine::Gpt4 => "gpt-4",
            Engine::Custom(s) => s,
        }
    }

    /// Resolve an identifier, keeping unknown names as [`Engine::Custom`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "gpt-3.5-turbo" => Engine::Gpt35Turbo,
            "gpt-4" => Engine::Gpt4,
            other => Engine::Custom(other.to_string()),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::Gpt35Turbo
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Engine {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Engine::from_name(s))
    }
}

impl Serialize for Engine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Engine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Engine::from_name(&s))
    }
}

/// Per-iteration engine selection.
///
/// Most iterations use `default_engine`; with probability
/// `escalation_probability` the stronger `escalation_engine` is drawn instead.
#[derive(Debug, Clone, PartialEq)]
pub struct EnginePolicy {
    pub default_engine: Engine,
    pub escalation_engine: Engine,
    pub escalation_probability: f64,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            default_engine: Engine::Gpt35Turbo,
            escalation_engine: Engine::Gpt4,
            escalation_probability: 0.05,
        }
    }
}

impl EnginePolicy {
    pub fn new(
        default_engine: Engine,
        escalation_engine: Engine,
        escalation_probability: f64,
    ) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&escalation_probability) {
            return Err(DomainError::InvalidProbability(escalation_probability));
        }
        Ok(Self {
            default_engine,
            escalation_engine,
            escalation_probability,
        })
    }

    /// Pick the engine for a uniform roll in `[0, 1)`.
    pub fn select(&self, roll: f64) -> &Engine {
        if roll < self.escalation_probability {
            &self.escalation_engine
        } else {
            &self.default_engine
        }
    }
}
