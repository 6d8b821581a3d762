//! Supported purchasing agents.

use std::str::FromStr;

use crate::AgentError;

/// Label shown in place of a product link that cannot be built.
pub const NO_LINK_LABEL: &str = "Sin link disponible";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    KakoBuy,
    CssBuy,
    Oopbuy,
    Hubbuy,
    MuleBuy,
}

impl Agent {
    pub const ALL: [Agent; 5] = [
        Agent::KakoBuy,
        Agent::CssBuy,
        Agent::Oopbuy,
        Agent::Hubbuy,
        Agent::MuleBuy,
    ];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Agent::KakoBuy => "KakoBuy",
            Agent::CssBuy => "CssBuy",
            Agent::Oopbuy => "Oopbuy",
            Agent::Hubbuy => "Hubbuy",
            Agent::MuleBuy => "MuleBuy",
        }
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Agent {
    type Err = AgentError;

    /// Case-insensitive: `kakobuy`, `KAKOBUY` and `KakoBuy` are the same agent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Agent::ALL
            .into_iter()
            .find(|a| a.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AgentError::UnknownAgent(s.to_string()))
    }
}

/// Canonical display name for an agent code; unknown codes are returned
/// unchanged.
#[must_use]
pub fn agent_display_name(code: &str) -> String {
    code.parse::<Agent>()
        .map_or_else(|_| code.to_string(), |agent| agent.display_name().to_string())
}

/// A resolved outbound product link for one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentLink {
    pub agent_name: String,
    pub url: String,
}

impl AgentLink {
    /// Only absolute `http`/`https` links are rendered as anchors.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        self.url.starts_with("http")
    }
}
