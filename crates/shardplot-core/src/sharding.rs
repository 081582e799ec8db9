//! Account address to shard mapping.
//!
//! A shard is the low 32 bits of the address (its last 8 hex digits) modulo the
//! shard count. Transactions whose endpoints land on the same shard are
//! intra-shard (ITX); all others are cross-shard (CTX).

use crate::error::{Result, ShardPlotError};

/// Number of trailing hex digits that select the shard.
const SHARD_KEY_DIGITS: usize = 8;

/// Transaction placement relative to the shard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    /// Sender and recipient on the same shard.
    Intra,
    /// Sender and recipient on different shards.
    Cross,
}

/// Map an address to its shard.
pub fn addr_to_shard(addr: &str, shard_num: u32) -> Result<u32> {
    if shard_num == 0 {
        return Err(ShardPlotError::Config("shard_num must be >= 1".into()));
    }

    let hex = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);
    // byte slicing below requires ascii
    if hex.is_empty() || !hex.is_ascii() {
        return Err(ShardPlotError::InvalidAddress(addr.to_string()));
    }

    let key = &hex[hex.len().saturating_sub(SHARD_KEY_DIGITS)..];
    if !key.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ShardPlotError::InvalidAddress(addr.to_string()));
    }
    let num = u32::from_str_radix(key, 16)
        .map_err(|_| ShardPlotError::InvalidAddress(addr.to_string()))?;

    Ok(num % shard_num)
}

/// Classify a transaction by its endpoints.
pub fn classify_tx(from: &str, to: &str, shard_num: u32) -> Result<TxKind> {
    let from_shard = addr_to_shard(from, shard_num)?;
    let to_shard = addr_to_shard(to, shard_num)?;
    Ok(if from_shard == to_shard {
        TxKind::Intra
    } else {
        TxKind::Cross
    })
}
