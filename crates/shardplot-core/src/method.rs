//! Experiment method labels.
//!
//! The method code only selects how a run is labelled (and, for transaction
//! traces, which completion columns mark a cross-shard transaction). It never
//! changes how metrics are computed.

use std::fmt;

use crate::error::{Result, ShardPlotError};

/// Sharding method under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Code 0.
    Broker,
    /// Code 1.
    Clpa,
    /// Code 2, BrokerChain variant. Labelled as "Broker".
    BrokerChain,
    /// Code 3.
    Monoxide,
}

/// How cross-shard transactions complete for a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossShardProtocol {
    /// Relay1/Relay2 commit timestamps.
    Relay,
    /// Broker1/Broker2 commit timestamps.
    Broker,
}

impl Method {
    pub fn code(self) -> u8 {
        match self {
            Method::Broker => 0,
            Method::Clpa => 1,
            Method::BrokerChain => 2,
            Method::Monoxide => 3,
        }
    }

    /// Name shown in figure titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Method::Broker | Method::BrokerChain => "Broker",
            Method::Clpa => "CLPA",
            Method::Monoxide => "Monoxide",
        }
    }

    pub fn cross_shard_protocol(self) -> CrossShardProtocol {
        match self {
            Method::Broker | Method::BrokerChain => CrossShardProtocol::Broker,
            Method::Clpa | Method::Monoxide => CrossShardProtocol::Relay,
        }
    }
}

impl TryFrom<u8> for Method {
    type Error = ShardPlotError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Method::Broker),
            1 => Ok(Method::Clpa),
            2 => Ok(Method::BrokerChain),
            3 => Ok(Method::Monoxide),
            other => Err(ShardPlotError::Config(format!(
                "unknown method code {other} (expected 0..=3)"
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
