//! Per-agent link formats.
//!
//! Each agent module exposes an `encode` / `decode` pair. [`CODECS`] lists
//! them in decode priority order; agent-link recognition walks the table and
//! stops at the first decoder that reports anything other than
//! [`Decoded::NoMatch`].

mod cssbuy;
mod hubbuy;
mod kakobuy;
mod mulebuy;
mod oopbuy;

use repshub_core::AffiliateCodes;

use crate::{Agent, MarketplaceLink};

/// Outcome of running one agent decoder over a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Decoded {
    /// The link is not in this agent's format.
    NoMatch,
    /// The link is in this agent's format and wraps the given URL.
    Found(String),
    /// The link is in this agent's format but the listing cannot be recovered.
    Unrecoverable,
}

/// Builds an agent link. Receives the parsed listing, the canonical URL as
/// given by the caller, and the affiliate codes to embed.
pub(crate) type EncodeFn = fn(&MarketplaceLink, &str, &AffiliateCodes) -> String;
pub(crate) type DecodeFn = fn(&str) -> Decoded;

pub(crate) struct AgentCodec {
    pub(crate) agent: Agent,
    pub(crate) encode: EncodeFn,
    pub(crate) decode: DecodeFn,
}

pub(crate) static CODECS: [AgentCodec; 5] = [
    AgentCodec {
        agent: Agent::KakoBuy,
        encode: kakobuy::encode,
        decode: kakobuy::decode,
    },
    AgentCodec {
        agent: Agent::Hubbuy,
        encode: hubbuy::encode,
        decode: hubbuy::decode,
    },
    AgentCodec {
        agent: Agent::Oopbuy,
        encode: oopbuy::encode,
        decode: oopbuy::decode,
    },
    AgentCodec {
        agent: Agent::MuleBuy,
        encode: mulebuy::encode,
        decode: mulebuy::decode,
    },
    AgentCodec {
        agent: Agent::CssBuy,
        encode: cssbuy::encode,
        decode: cssbuy::decode,
    },
];

pub(crate) fn codec_for(agent: Agent) -> Option<&'static AgentCodec> {
    CODECS.iter().find(|codec| codec.agent == agent)
}
