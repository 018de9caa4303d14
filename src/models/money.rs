//! The money module holds the `Money` value type: an immutable amount
//! denominated in a [`Currency`], normalized so the amount always
//! carries exactly the currency's minor-unit exponent in fractional
//! digits.
//!
//! Money values are plain `Copy` data with no interior mutability.
//! Every operation hands back a new value, so sharing them across
//! threads needs no synchronization.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use getset::CopyGetters;
use rust_decimal::prelude::*;

use crate::error::{Error, Result};
use crate::format::{self, Locale};
use crate::models::currency::Currency;
use crate::util::number;

/// A monetary amount in a specific currency.
///
/// Equality requires both the currency and the normalized amount to
/// match; two amounts in different currencies are unequal, never an
/// error. Ordering is only defined within a currency; see the
/// `PartialOrd` impl and [`Money::try_cmp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CopyGetters)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize),
    serde(try_from = "RawMoney")
)]
#[getset(get_copy = "pub")]
pub struct Money {
    /// The amount, always at exactly `currency.exponent()` fractional
    /// digits.
    amount: Decimal,
    /// The currency the amount is denominated in.
    currency: Currency,
}

impl Money {
    /// Create a `Money` from an exact decimal amount. Fails with
    /// [`Error::InvalidAmount`] if the amount carries more fractional
    /// digits than the currency's exponent; amounts with fewer digits
    /// are zero-padded ("5" stores as "5.00" for USD).
    pub fn new<T: Into<Decimal>>(amount: T, currency: Currency) -> Result<Self> {
        let amount = number::normalize(amount.into(), currency)?;
        Ok(Self { amount, currency })
    }

    /// Like [`Money::new`], but rounds half-away-from-zero to the
    /// currency's exponent instead of rejecting excess precision:
    /// `Money::new_rounded(num!(5.5), Currency::JPY)` is 6 yen.
    pub fn new_rounded<T: Into<Decimal>>(amount: T, currency: Currency) -> Self {
        Self {
            amount: number::round_to_currency(amount.into(), currency),
            currency,
        }
    }

    /// Parse an exact decimal string ("9.95") into a `Money`.
    pub fn parse(amount: &str, currency: Currency) -> Result<Self> {
        let parsed =
            Decimal::from_str(amount).map_err(|_| Error::ParseAmount(amount.into()))?;
        Self::new(parsed, currency)
    }

    /// Create a `Money` from a float, reading the float's literal value
    /// rather than its binary expansion, so `3.95f64` means exactly
    /// 3.95.
    ///
    /// A [`Decimal`] manufactured from the raw binary value
    /// (`Decimal::from_f64_retain`) gets no such treatment when handed
    /// to [`Money::new`]: it is validated as given, trailing binary
    /// digits and all, and will be rejected for excess precision.
    pub fn from_f64(amount: f64, currency: Currency) -> Result<Self> {
        Self::new(Self::decimal_from_f64(amount)?, currency)
    }

    /// The float source with rounding permission, for values that don't
    /// fit the currency's exponent.
    pub fn from_f64_rounded(amount: f64, currency: Currency) -> Result<Self> {
        Ok(Self::new_rounded(Self::decimal_from_f64(amount)?, currency))
    }

    /// Build a `Money` from an integer count of the currency's minor
    /// units: 101 sub-units of USD is $1.01. Exact by construction, so
    /// it cannot fail.
    pub fn from_sub_units(sub_units: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(sub_units, currency.exponent()),
            currency,
        }
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::from_sub_units(0, currency)
    }

    /// The amount as an integer count of minor units ($1.01 is 101).
    /// The normalization invariant makes this exact; there is never a
    /// fractional remainder.
    pub fn sub_units(&self) -> i128 {
        self.amount.mantissa()
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Absolute value. Sign transform only; the precision is untouched.
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// Add two same-currency amounts. Both operands are already
    /// normalized, so the exact sum needs no re-rounding.
    pub fn checked_add(self, other: Money) -> Result<Money> {
        self.ensure_same_currency(&other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(Error::AmountOutOfRange)?;
        Ok(Money { amount, currency: self.currency })
    }

    /// Subtract a same-currency amount.
    pub fn checked_sub(self, other: Money) -> Result<Money> {
        self.ensure_same_currency(&other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(Error::AmountOutOfRange)?;
        Ok(Money { amount, currency: self.currency })
    }

    /// Multiply by a scalar, rounding the exact product half-away-from-
    /// zero back to the currency's exponent.
    ///
    /// Rounding happens per operation: `(9.95 * 0.5) * 2` is 9.96,
    /// while `9.95 * (0.5 * 2)` is 9.95.
    pub fn checked_mul<T: Into<Decimal>>(self, scalar: T) -> Result<Money> {
        let product = self
            .amount
            .checked_mul(scalar.into())
            .ok_or(Error::AmountOutOfRange)?;
        Ok(Money {
            amount: number::round_to_currency(product, self.currency),
            currency: self.currency,
        })
    }

    /// Divide by a scalar, rounding the exact quotient half-away-from-
    /// zero back to the currency's exponent. A zero divisor fails with
    /// [`Error::DivisionByZero`].
    pub fn checked_div<T: Into<Decimal>>(self, scalar: T) -> Result<Money> {
        let scalar = scalar.into();
        if scalar.is_zero() {
            Err(Error::DivisionByZero)?;
        }
        let quotient = self
            .amount
            .checked_div(scalar)
            .ok_or(Error::AmountOutOfRange)?;
        Ok(Money {
            amount: number::round_to_currency(quotient, self.currency),
            currency: self.currency,
        })
    }

    /// The dimensionless ratio between two same-currency amounts:
    /// $3.60 / $2.50 is 1.44. The result is a plain [`Decimal`], not a
    /// `Money`.
    pub fn checked_ratio(self, other: Money) -> Result<Decimal> {
        self.ensure_same_currency(&other)?;
        if other.amount.is_zero() {
            Err(Error::DivisionByZero)?;
        }
        self.amount
            .checked_div(other.amount)
            .ok_or(Error::AmountOutOfRange)
    }

    /// Compare two same-currency amounts, failing with
    /// [`Error::CurrencyMismatch`] across currencies. The operator
    /// forms (`<`, `>=`, ...) go through `PartialOrd` instead, which
    /// answers `None` for mixed currencies.
    pub fn try_cmp(self, other: Money) -> Result<Ordering> {
        self.ensure_same_currency(&other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Render the amount for a locale: symbol placement, digit
    /// grouping, and separators per the locale's conventions. Pure
    /// presentation; the stored amount is untouched.
    pub fn format(&self, locale: Locale) -> String {
        format::render(self, locale)
    }

    fn decimal_from_f64(amount: f64) -> Result<Decimal> {
        Decimal::from_f64(amount).ok_or_else(|| Error::ParseAmount(amount.to_string()))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<()> {
        if self.currency != other.currency {
            Err(Error::CurrencyMismatch(self.currency, other.currency))?;
        }
        Ok(())
    }
}

impl Default for Money {
    /// Zero in the default currency (USD).
    fn default() -> Self {
        Money::zero(Currency::default())
    }
}

impl Add for Money {
    type Output = Money;

    /// Panics on a currency mismatch; use [`Money::checked_add`] to
    /// handle the mismatch as a value.
    fn add(self, other: Money) -> Money {
        match self.checked_add(other) {
            Ok(sum) => sum,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Sub for Money {
    type Output = Money;

    /// Panics on a currency mismatch; use [`Money::checked_sub`] to
    /// handle the mismatch as a value.
    fn sub(self, other: Money) -> Money {
        match self.checked_sub(other) {
            Ok(difference) => difference,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Into<Decimal>> Mul<T> for Money {
    type Output = Money;

    fn mul(self, scalar: T) -> Money {
        match self.checked_mul(scalar) {
            Ok(product) => product,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<Money> for Decimal {
    type Output = Money;

    fn mul(self, money: Money) -> Money {
        money * self
    }
}

impl<T: Into<Decimal>> Div<T> for Money {
    type Output = Money;

    /// Panics on a zero divisor; use [`Money::checked_div`] to handle
    /// it as a value.
    fn div(self, scalar: T) -> Money {
        match self.checked_div(scalar) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

impl PartialOrd for Money {
    /// Ordering is only defined within a currency. Across currencies
    /// this answers `None`, so every ordering operator (`<`, `<=`, `>`,
    /// `>=`) is false.
    fn partial_cmp(&self, other: &Money) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    /// The machine-readable rendering: `"<CODE> <amount>"`, e.g.
    /// "USD 9.95". Locale formatting lives in [`Money::format`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}

impl FromStr for Money {
    type Err = Error;

    /// Parse the `"<CODE> <amount>"` form produced by `Display`.
    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.splitn(2, ' ');
        let code = parts.next().unwrap_or("");
        let amount = parts
            .next()
            .ok_or_else(|| Error::ParseAmount(value.into()))?;
        Self::parse(amount, Currency::from_code(code)?)
    }
}

/// Mirror of [`Money`] that deserialized input lands on first; serde
/// then runs it through `TryFrom`, so the precision invariant holds
/// even for hand-written input.
#[cfg(feature = "with_serde")]
#[derive(serde_derive::Deserialize)]
struct RawMoney {
    amount: Decimal,
    currency: Currency,
}

#[cfg(feature = "with_serde")]
impl std::convert::TryFrom<RawMoney> for Money {
    type Error = Error;

    fn try_from(raw: RawMoney) -> Result<Money> {
        Money::new(raw.amount, raw.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;
    use rust_decimal_macros::dec;

    #[test]
    fn construction_from_int() {
        let one = Money::new(1, Currency::USD).unwrap();
        assert_eq!(one.amount(), dec!(1.00));
        assert_eq!(one.currency(), Currency::USD);

        let yen = Money::new(199, Currency::JPY).unwrap();
        assert_eq!(yen.amount(), dec!(199));
    }

    #[test]
    fn construction_from_decimal() {
        let money = Money::new(dec!(3.95), Currency::USD).unwrap();
        assert_eq!(money.amount(), dec!(3.95));

        let money = Money::new(dec!(192.325), Currency::KWD).unwrap();
        assert_eq!(money.amount(), dec!(192.325));

        assert_eq!(
            Money::new(dec!(3.956), Currency::USD),
            Err(Error::InvalidAmount { amount: dec!(3.956), currency: Currency::USD })
        );
        // nonfractional currency
        assert_eq!(
            Money::new(dec!(10.2), Currency::KRW),
            Err(Error::InvalidAmount { amount: dec!(10.2), currency: Currency::KRW })
        );
    }

    #[test]
    fn construction_from_string() {
        assert_eq!(money("3.95", Currency::USD).amount(), dec!(3.95));
        assert_eq!(money("199", Currency::JPY).amount(), dec!(199));
        assert_eq!(
            Money::parse("3.956", Currency::USD),
            Err(Error::InvalidAmount { amount: dec!(3.956), currency: Currency::USD })
        );
        assert_eq!(
            Money::parse("garbage", Currency::USD),
            Err(Error::ParseAmount("garbage".into()))
        );
    }

    #[test]
    fn construction_normalizes_scale() {
        // padding to the exponent is visible through Display
        assert_eq!(Money::new(1, Currency::CAD).unwrap().to_string(), "CAD 1.00");
        assert_eq!(money("1.2", Currency::USD).to_string(), "USD 1.20");
        assert_eq!(money("88", Currency::JPY).to_string(), "JPY 88");
        assert_eq!(money("192.325", Currency::KWD).to_string(), "KWD 192.325");
    }

    #[test]
    fn rounded_construction() {
        let money = Money::new_rounded(dec!(3.956), Currency::USD);
        assert_eq!(money.amount(), dec!(3.96));

        // nonfractional currencies
        assert_eq!(Money::new_rounded(dec!(10.2), Currency::KRW).amount(), dec!(10));
        assert_eq!(Money::new_rounded(dec!(5.5), Currency::JPY).amount(), dec!(6));
    }

    #[test]
    fn float_construction_reads_the_literal_value() {
        let money = Money::from_f64(3.95, Currency::USD).unwrap();
        assert_eq!(money.amount(), dec!(3.95));

        let money = Money::from_f64(192.325, Currency::KWD).unwrap();
        assert_eq!(money.amount(), dec!(192.325));

        assert_eq!(
            Money::from_f64(3.956, Currency::USD),
            Err(Error::InvalidAmount { amount: dec!(3.956), currency: Currency::USD })
        );

        assert_eq!(
            Money::from_f64_rounded(5.5, Currency::JPY).unwrap().amount(),
            dec!(6)
        );

        assert!(matches!(
            Money::from_f64(f64::NAN, Currency::USD),
            Err(Error::ParseAmount(_))
        ));
    }

    #[test]
    fn binary_float_expansion_is_rejected() {
        // 0.1 has no finite binary representation. Reading the literal
        // value accepts it; a decimal built from the raw binary
        // expansion keeps the noise digits and fails validation.
        assert!(Money::from_f64(0.1, Currency::USD).is_ok());

        let raw = Decimal::from_f64_retain(0.1).unwrap();
        assert!(raw.scale() > 2);
        assert_eq!(
            Money::new(raw, Currency::USD),
            Err(Error::InvalidAmount { amount: raw, currency: Currency::USD })
        );
    }

    #[test]
    fn sub_units_round_trip() {
        let cents = Money::from_sub_units(101, Currency::USD);
        assert_eq!(cents, money("1.01", Currency::USD));
        assert_eq!(cents.sub_units(), 101);

        let yen = Money::from_sub_units(5, Currency::JPY);
        assert_eq!(yen.amount(), dec!(5));
        assert_eq!(yen.sub_units(), 5);

        for currency in Currency::all() {
            for n in &[0i64, 1, -1, 101, -2500, 987_654_321] {
                assert_eq!(Money::from_sub_units(*n, *currency).sub_units(), *n as i128);
            }
        }
    }

    #[test]
    fn addition() {
        assert_eq!(
            money("3.50", Currency::USD) + money("1.25", Currency::USD),
            money("4.75", Currency::USD)
        );
        assert_eq!(
            money("2.00", Currency::USD).checked_add(money("3.00", Currency::USD)),
            Ok(money("5.00", Currency::USD))
        );
        assert_eq!(
            money("1.00", Currency::USD).checked_add(money("1.00", Currency::EUR)),
            Err(Error::CurrencyMismatch(Currency::USD, Currency::EUR))
        );
    }

    #[test]
    #[should_panic(expected = "currencies must match")]
    fn addition_operator_panics_on_mismatch() {
        let _ = money("3.50", Currency::EUR) + money("23", Currency::GBP);
    }

    #[test]
    fn subtraction() {
        assert_eq!(
            money("3.50", Currency::USD) - money("1.25", Currency::USD),
            money("2.25", Currency::USD)
        );
        assert_eq!(
            money("4", Currency::USD) - money("5.50", Currency::USD),
            money("-1.50", Currency::USD)
        );
        assert_eq!(
            money("3.50", Currency::EUR).checked_sub(money("1.80", Currency::GBP)),
            Err(Error::CurrencyMismatch(Currency::EUR, Currency::GBP))
        );
    }

    #[test]
    fn multiplication() {
        assert_eq!(money("3.20", Currency::USD) * 3, money("9.60", Currency::USD));
        assert_eq!(
            dec!(3) * money("3.20", Currency::EUR),
            money("9.60", Currency::EUR)
        );
        assert_eq!(
            money("9.95", Currency::USD) * dec!(0.15),
            money("1.49", Currency::USD)
        );
        assert_eq!(money("3", Currency::JPY) * dec!(0.2), money("1", Currency::JPY));
        assert_eq!(money("3", Currency::KRW) * dec!(1.5), money("5", Currency::KRW));
    }

    #[test]
    fn multiplication_rounds_per_operation() {
        let price = money("9.95", Currency::USD);
        // rounding happens after each multiply, so grouping matters
        assert_eq!((price * dec!(0.5)) * dec!(2), money("9.96", Currency::USD));
        assert_eq!(price * (dec!(0.5) * dec!(2)), money("9.95", Currency::USD));
    }

    #[test]
    fn division() {
        assert_eq!(money("3.30", Currency::USD) / 3, money("1.10", Currency::USD));
        assert_eq!(
            money("9.95", Currency::USD) / dec!(0.24),
            money("41.46", Currency::USD)
        );
        assert_eq!(money("3", Currency::JPY) / dec!(1.6), money("2", Currency::JPY));
        // zero-exponent currency, rounded half-away-from-zero
        assert_eq!(money("10", Currency::JPY) / 3, money("3", Currency::JPY));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            money("1.00", Currency::USD).checked_div(0),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            money("3.30", Currency::USD).checked_div(dec!(0.0)),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_operator_panics_on_zero() {
        let _ = money("3", Currency::USD) / 0;
    }

    #[test]
    fn ratio() {
        assert_eq!(
            money("3.60", Currency::USD).checked_ratio(money("2.50", Currency::USD)),
            Ok(dec!(1.44))
        );
        assert_eq!(
            money("3.30", Currency::USD).checked_ratio(Money::zero(Currency::USD)),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            money("3.50", Currency::EUR).checked_ratio(money("1.80", Currency::GBP)),
            Err(Error::CurrencyMismatch(Currency::EUR, Currency::GBP))
        );
    }

    #[test]
    fn negation_and_abs() {
        assert_eq!(-money("5.23", Currency::USD), money("-5.23", Currency::USD));
        assert_eq!(-money("-1.35", Currency::USD), money("1.35", Currency::USD));
        assert_eq!(money("-1.35", Currency::USD).abs(), money("1.35", Currency::USD));
        assert_eq!(money("5.23", Currency::USD).abs(), money("5.23", Currency::USD));
    }

    #[test]
    fn sign_tests() {
        assert!(Money::zero(Currency::USD).is_zero());
        assert!(money("0.00", Currency::USD).is_zero());
        assert!(money("3.62", Currency::USD).is_positive());
        assert!(money("-3.62", Currency::USD).is_negative());
        assert!(!money("-3.62", Currency::USD).is_positive());
        assert!(!Money::zero(Currency::USD).is_negative());
    }

    #[test]
    fn comparisons() {
        assert!(money("1.20", Currency::USD) < money("3.50", Currency::USD));
        assert!(money("104.20", Currency::USD) > money("5.13", Currency::USD));
        assert!(money("2.20", Currency::USD) <= money("2.20", Currency::USD));
        assert!(money("2.20", Currency::USD) >= money("2.20", Currency::USD));
        assert_eq!(
            money("1.20", Currency::USD).try_cmp(money("3.50", Currency::USD)),
            Ok(Ordering::Less)
        );
    }

    #[test]
    fn cross_currency_comparisons() {
        let pounds = money("1.20", Currency::GBP);
        let euros = money("3.50", Currency::EUR);

        // equality across currencies is simply false
        assert_ne!(pounds, euros);
        assert_ne!(money("99.30", Currency::USD), money("99.30", Currency::CHF));

        // ordering across currencies is undefined, so every operator
        // answers false
        assert!(!(pounds < euros));
        assert!(!(pounds <= euros));
        assert!(!(pounds > euros));
        assert!(!(pounds >= euros));
        assert_eq!(pounds.partial_cmp(&euros), None);

        assert_eq!(
            pounds.try_cmp(euros),
            Err(Error::CurrencyMismatch(Currency::GBP, Currency::EUR))
        );
    }

    #[test]
    fn display() {
        assert_eq!(money("1.20", Currency::USD).to_string(), "USD 1.20");
        assert_eq!(money("3.60", Currency::CHF).to_string(), "CHF 3.60");
        assert_eq!(money("88", Currency::JPY).to_string(), "JPY 88");
        assert_eq!(money("192.325", Currency::KWD).to_string(), "KWD 192.325");
    }

    #[test]
    fn from_str_round_trips_display() {
        let original = money("9.95", Currency::USD);
        let parsed: Money = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);

        assert_eq!(
            "XXX 1.00".parse::<Money>(),
            Err(Error::UnsupportedCurrency("XXX".into()))
        );
        assert_eq!(
            "nonsense".parse::<Money>(),
            Err(Error::ParseAmount("nonsense".into()))
        );
    }

    #[test]
    fn hashing_follows_equality() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |money: &Money| {
            let mut hasher = DefaultHasher::new();
            money.hash(&mut hasher);
            hasher.finish()
        };

        assert_eq!(
            hash(&money("1.20", Currency::USD)),
            hash(&money("1.20", Currency::USD))
        );
        assert_ne!(
            hash(&money("9.30", Currency::USD)),
            hash(&money("1.50", Currency::USD))
        );
        assert_ne!(
            hash(&money("99.30", Currency::USD)),
            hash(&money("99.30", Currency::CHF))
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(Money::default(), Money::zero(Currency::USD));
        assert_eq!(Money::default().to_string(), "USD 0.00");
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serde_round_trip() {
        let original = money("1234.56", Currency::EUR);
        let json = serde_json::to_string(&original).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
        // the scale survives the trip, so the invariant does too
        assert_eq!(back.amount().scale(), 2);
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serde_rejects_excess_precision() {
        let res: std::result::Result<Money, _> =
            serde_json::from_str(r#"{"amount":"1.234","currency":"USD"}"#);
        assert!(res.is_err());
    }
}
