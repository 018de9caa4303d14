//! Currency-aware monetary values with exact decimal arithmetic.
//!
//! A [`Money`] is an immutable amount denominated in a [`Currency`],
//! normalized so its precision always matches the currency's minor-unit
//! exponent: USD amounts carry two decimal places, JPY zero, KWD three.
//! Construction validates precision (or rounds on request), multiplying
//! and dividing re-round the result, and mixing currencies is an error.
//!
//! ```rust
//! use money_core::{num, Currency, Locale, Money};
//!
//! let price = Money::parse("9.95", Currency::USD)?;
//! let half = price * num!(0.5);
//! assert_eq!(half.to_string(), "USD 4.98");
//! assert_eq!(price.format(Locale::EnUs), "$9.95");
//! # Ok::<(), money_core::Error>(())
//! ```

pub mod error;
mod util;
mod models;
pub mod format;

pub use crate::error::{Error, Result};
pub use crate::format::Locale;
pub use crate::models::currency::Currency;
pub use crate::models::money::Money;
