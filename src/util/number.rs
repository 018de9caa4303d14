//! A set of utilities for validating and rounding decimal amounts
//! against a currency's minor-unit exponent.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};
use crate::models::currency::Currency;

/// Create a decimal number.
///
/// This is mostly a wrapper around `rust_decimal_macros::dec!` that
/// saves callers of the crate a direct dependency on the macros crate
/// when writing amount literals.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}

/// Round an amount half-away-from-zero to the currency's exponent, then
/// rescale so it carries exactly that many fractional digits ("5"
/// becomes "5.00" for USD).
///
/// This is the one rounding rule in the crate; multiplication, division
/// and rounded construction all funnel through here.
pub(crate) fn round_to_currency(amount: Decimal, currency: Currency) -> Decimal {
    let exponent = currency.exponent();
    let mut rounded =
        amount.round_dp_with_strategy(exponent, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(exponent);
    rounded
}

/// Strict normalization: rescale the amount to the currency's exponent,
/// failing with `InvalidAmount` if doing so would change its value.
/// Zero-padding is not a change.
pub(crate) fn normalize(amount: Decimal, currency: Currency) -> Result<Decimal> {
    let rounded = round_to_currency(amount, currency);
    if rounded != amount {
        Err(Error::InvalidAmount { amount, currency })?;
    }
    if rounded.scale() != currency.exponent() {
        // the 96-bit mantissa ran out of room for the padding digits
        Err(Error::AmountOutOfRange)?;
    }
    Ok(rounded)
}
