//! The currency module holds the currency registry: the closed set of
//! ISO-4217 currencies the crate knows about, along with the minor-unit
//! exponent and display symbol for each.
//!
//! The registry is static data, built at compile time and never mutated,
//! so it is freely shared across threads. Extending the supported set
//! means adding a row to the `currencies!` table; there is no runtime
//! registration path.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Generates the `Currency` enum and its metadata lookups from a single
/// table of `(CODE, name, exponent, symbol)` rows.
macro_rules! currencies {
    ( $( ($code:ident, $name:expr, $exponent:expr, $symbol:expr), )* ) => {
        /// An ISO-4217 currency. Each variant knows its minor-unit
        /// exponent (how many fractional digits a normalized amount of
        /// this currency carries) and its display symbol.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        pub enum Currency {
            $( $code, )*
        }

        impl Currency {
            /// Every currency in the registry.
            pub fn all() -> &'static [Currency] {
                &[ $( Currency::$code, )* ]
            }

            /// The ISO-4217 alphabetic code ("USD").
            pub fn code(&self) -> &'static str {
                match self {
                    $( Currency::$code => stringify!($code), )*
                }
            }

            /// The currency's full English name.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Currency::$code => $name, )*
                }
            }

            /// The minor-unit exponent: the number of decimal places an
            /// amount of this currency carries (USD 2, JPY 0, KWD 3).
            pub fn exponent(&self) -> u32 {
                match self {
                    $( Currency::$code => $exponent, )*
                }
            }

            /// The display symbol ("$", "€", "¥").
            pub fn symbol(&self) -> &'static str {
                match self {
                    $( Currency::$code => $symbol, )*
                }
            }

            /// Look up a currency by ISO code. This is the dynamic entry
            /// point; unknown codes fail with [`Error::UnsupportedCurrency`].
            pub fn from_code(code: &str) -> Result<Currency> {
                $(
                    if code == stringify!($code) {
                        return Ok(Currency::$code);
                    }
                )*
                Err(Error::UnsupportedCurrency(code.into()))
            }
        }
    }
}

currencies! {
    (AED, "United Arab Emirates dirham", 2, "د.إ"),
    (AUD, "Australian dollar", 2, "$"),
    (BHD, "Bahraini dinar", 3, "ب.د"),
    (BIF, "Burundian franc", 0, "FBu"),
    (BRL, "Brazilian real", 2, "R$"),
    (CAD, "Canadian dollar", 2, "$"),
    (CHF, "Swiss franc", 2, "CHF"),
    (CLP, "Chilean peso", 0, "$"),
    (CNY, "Chinese yuan", 2, "¥"),
    (COP, "Colombian peso", 2, "$"),
    (CZK, "Czech koruna", 2, "Kč"),
    (DJF, "Djiboutian franc", 0, "Fdj"),
    (DKK, "Danish krone", 2, "kr"),
    (EGP, "Egyptian pound", 2, "ج.م"),
    (EUR, "Euro", 2, "€"),
    (GBP, "Pound sterling", 2, "£"),
    (GNF, "Guinean franc", 0, "FG"),
    (HKD, "Hong Kong dollar", 2, "$"),
    (HUF, "Hungarian forint", 2, "Ft"),
    (IDR, "Indonesian rupiah", 2, "Rp"),
    (ILS, "Israeli new shekel", 2, "₪"),
    (INR, "Indian rupee", 2, "₹"),
    (IQD, "Iraqi dinar", 3, "ع.د"),
    (ISK, "Icelandic króna", 0, "kr"),
    (JOD, "Jordanian dinar", 3, "د.ا"),
    (JPY, "Japanese yen", 0, "¥"),
    (KES, "Kenyan shilling", 2, "KSh"),
    (KRW, "South Korean won", 0, "₩"),
    (KWD, "Kuwaiti dinar", 3, "د.ك"),
    (LYD, "Libyan dinar", 3, "ل.د"),
    (MXN, "Mexican peso", 2, "$"),
    (MYR, "Malaysian ringgit", 2, "RM"),
    (NGN, "Nigerian naira", 2, "₦"),
    (NOK, "Norwegian krone", 2, "kr"),
    (NZD, "New Zealand dollar", 2, "$"),
    (OMR, "Omani rial", 3, "ر.ع."),
    (PHP, "Philippine peso", 2, "₱"),
    (PLN, "Polish złoty", 2, "zł"),
    (PYG, "Paraguayan guaraní", 0, "₲"),
    (RUB, "Russian ruble", 2, "₽"),
    (RWF, "Rwandan franc", 0, "FRw"),
    (SAR, "Saudi riyal", 2, "ر.س"),
    (SEK, "Swedish krona", 2, "kr"),
    (SGD, "Singapore dollar", 2, "$"),
    (THB, "Thai baht", 2, "฿"),
    (TND, "Tunisian dinar", 3, "د.ت"),
    (TRY, "Turkish lira", 2, "₺"),
    (TWD, "New Taiwan dollar", 2, "NT$"),
    (UGX, "Ugandan shilling", 0, "USh"),
    (USD, "United States dollar", 2, "$"),
    (VND, "Vietnamese đồng", 0, "₫"),
    (XAF, "Central African CFA franc", 0, "FCFA"),
    (XOF, "West African CFA franc", 0, "CFA"),
    (XPF, "CFP franc", 0, "₣"),
    (ZAR, "South African rand", 2, "R"),
}

impl Default for Currency {
    /// USD, the default currency for constructors that don't name one.
    fn default() -> Self {
        Currency::USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        Currency::from_code(code)
    }
}
