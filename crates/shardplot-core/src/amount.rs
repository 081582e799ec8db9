//! Fixed-point token amounts.
//!
//! The simulator records every amount in wei (10^18 per token) and writes the
//! literal `nil` where a block has no value. Both conventions stop here: the
//! rest of the workspace only sees `Option<f64>` in whole tokens.

/// Wei per token.
pub const WEI_PER_TOKEN: f64 = 1e18;

/// Sentinel the simulator writes for an absent value. Only this literal means
/// missing; empty and `NaN` cells are rejected rather than read as gaps.
pub const NIL_SENTINEL: &str = "nil";

/// Convert a wei amount to whole tokens.
pub fn wei_to_token(wei: f64) -> f64 {
    wei / WEI_PER_TOKEN
}

/// Parse one amount cell.
///
/// Returns `Ok(None)` for the sentinel, `Ok(Some(tokens))` for a number and
/// `Err(cell)` for anything else. Surrounding whitespace is ignored.
pub fn parse_amount(cell: &str) -> std::result::Result<Option<f64>, String> {
    let cell = cell.trim();
    if cell == NIL_SENTINEL {
        return Ok(None);
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(wei_to_token(v))),
        _ => Err(cell.to_string()),
    }
}
