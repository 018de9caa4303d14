//! Error and result types for monetary operations.
//!
//! Everything in here is a caller error, not a transient condition:
//! there is no retry path, and no operation hands back a partial value
//! alongside an error.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::currency::Currency;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The amount carries more fractional digits than the currency
    /// allows and rounding was not requested.
    #[error("'{amount}' is an invalid amount for currency {currency}")]
    InvalidAmount { amount: Decimal, currency: Currency },
    /// The input does not describe a decimal number.
    #[error("cannot parse '{0}' as a decimal amount")]
    ParseAmount(String),
    /// Arithmetic and ordering require both operands in the same
    /// currency.
    #[error("currencies must match ({0} vs {1})")]
    CurrencyMismatch(Currency, Currency),
    #[error("division by zero")]
    DivisionByZero,
    /// The result does not fit the representable decimal range.
    #[error("amount out of representable range")]
    AmountOutOfRange,
    /// A currency code the registry does not know about.
    #[error("unsupported currency code '{0}'")]
    UnsupportedCurrency(String),
    /// A locale tag the formatter has no conventions for.
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),
}

pub type Result<T> = std::result::Result<T, Error>;
