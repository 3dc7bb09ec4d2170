//! Transfer instructions read from CSV input.
//!
//! A [`TransferInstruction`] is one `(address, amount)` row. Amounts are kept
//! exactly as parsed; a malformed amount becomes `NaN` instead of failing the
//! row, and is rejected later when the transfer call is built.
//! [`validate_amounts`] is the opt-in check that rejects it up front.

use serde::{Deserialize, Deserializer};

use crate::error::Error;
use crate::units::Planck;

/// One transfer: destination account and amount in whole token units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransferInstruction {
    pub address: String,
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub amount: f64,
}

fn missing_amount() -> f64 {
    f64::NAN
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map_or(f64::NAN, parse_amount))
}

/// Parse a decimal amount, yielding `NaN` when the text is not a number.
///
/// The whole field must be numeric: `"1.5 DOT"` is `NaN`, not a prefix parse
/// to 1.5.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Reject the first instruction whose amount has no planck equivalent
/// (non-finite, negative, or overflowing), before any call is built.
///
/// Rows are reported 1-based, counting data rows only.
pub fn validate_amounts(transfers: &[TransferInstruction]) -> Result<(), Error> {
    match transfers
        .iter()
        .enumerate()
        .find(|(_, t)| Planck::from_units(t.amount).is_none())
    {
        Some((idx, t)) => Err(Error::InvalidAmount {
            row: idx + 1,
            address: t.address.clone(),
            amount: t.amount,
        }),
        None => Ok(()),
    }
}
