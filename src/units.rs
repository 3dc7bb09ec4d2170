//! Conversion from whole token units to the chain's minor unit (planck).
//!
//! Amounts arrive as floats. They are first fixed to 4 decimal places by
//! scaling to ten-thousandths and truncating, then rescaled to planck with
//! integer arithmetic so the float's representation error never reaches the
//! final value.

use std::fmt;

/// Decimal places of the native token.
pub const DECIMALS: u32 = 10;

/// Planck per whole unit (10^10).
pub const PLANCK_PER_UNIT: u128 = 10u128.pow(DECIMALS);

/// Input precision: amounts keep at most 4 decimal places.
pub const PRECISION: u128 = 10_000;

/// Balance in planck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Planck(pub u128);

impl Planck {
    /// Convert a whole-unit amount to planck.
    ///
    /// Returns `None` for amounts with no balance equivalent: `NaN`,
    /// infinities, negatives, and values whose rescaling overflows `u128`.
    ///
    /// E.g., `from_units(1.5) => Some(Planck(15_000_000_000))`
    pub fn from_units(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let ten_thousandths = (amount * PRECISION as f64) as u128;
        ten_thousandths
            .checked_mul(PLANCK_PER_UNIT)
            .map(|scaled| Self(scaled / PRECISION))
    }
}

impl fmt::Display for Planck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / PLANCK_PER_UNIT;
        let frac = self.0 % PLANCK_PER_UNIT;

        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            let frac_str = format!("{:0width$}", frac, width = DECIMALS as usize);
            write!(f, "{}.{}", whole, frac_str.trim_end_matches('0'))
        }
    }
}

impl From<Planck> for u128 {
    fn from(value: Planck) -> Self {
        value.0
    }
}
