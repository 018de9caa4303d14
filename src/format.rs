//! Locale-aware display formatting for monetary values.
//!
//! This is the formatting collaborator [`Money::format`] delegates to:
//! a table of per-locale number conventions (separators, digit group
//! sizes, symbol placement) and a renderer that applies them to a
//! normalized amount. The conventions follow CLDR; where CLDR joins
//! symbol and number with a non-breaking space, so does this table.
//! The currency symbol itself comes from the registry, not the locale.
//!
//! [`Money::format`]: crate::Money::format

use std::fmt;

use crate::error::{Error, Result};
use crate::models::money::Money;

/// Where the currency symbol sits relative to the number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SymbolPosition {
    Before,
    After,
}

/// Number conventions for one locale.
struct Conventions {
    decimal_separator: char,
    grouping_separator: char,
    /// Digit group sizes, rightmost group first: (primary, recurring).
    /// Most locales group 3/3; en_IN groups 3 then 2 (12,34,567).
    grouping: (usize, usize),
    symbol_position: SymbolPosition,
    /// Whether a non-breaking space joins symbol and number.
    symbol_spaced: bool,
}

/// Generates the `Locale` enum and its conventions lookup from a single
/// table of `(Variant, tag, decimal, grouping, groups, position, spaced)`
/// rows.
macro_rules! locales {
    ( $( ($variant:ident, $tag:expr, $decimal:expr, $group:expr, $grouping:expr, $position:ident, $spaced:expr), )* ) => {
        /// A display locale with known formatting conventions.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Locale {
            $( $variant, )*
        }

        impl Locale {
            /// Every locale the formatter knows about.
            pub fn all() -> &'static [Locale] {
                &[ $( Locale::$variant, )* ]
            }

            /// The locale's tag ("en_US").
            pub fn tag(&self) -> &'static str {
                match self {
                    $( Locale::$variant => $tag, )*
                }
            }

            /// Look up a locale by tag. Unknown tags fail with
            /// [`Error::UnsupportedLocale`].
            pub fn from_tag(tag: &str) -> Result<Locale> {
                $(
                    if tag == $tag {
                        return Ok(Locale::$variant);
                    }
                )*
                Err(Error::UnsupportedLocale(tag.into()))
            }

            fn conventions(&self) -> Conventions {
                match self {
                    $(
                        Locale::$variant => Conventions {
                            decimal_separator: $decimal,
                            grouping_separator: $group,
                            grouping: $grouping,
                            symbol_position: SymbolPosition::$position,
                            symbol_spaced: $spaced,
                        },
                    )*
                }
            }
        }
    }
}

locales! {
    (EnUs, "en_US", '.', ',', (3, 3), Before, false),
    (EnGb, "en_GB", '.', ',', (3, 3), Before, false),
    (EnCa, "en_CA", '.', ',', (3, 3), Before, false),
    (EnIn, "en_IN", '.', ',', (3, 2), Before, false),
    (DeDe, "de_DE", ',', '.', (3, 3), After, true),
    (FrFr, "fr_FR", ',', '\u{a0}', (3, 3), After, true),
    (EsEs, "es_ES", ',', '.', (3, 3), After, true),
    (ItIt, "it_IT", ',', '.', (3, 3), After, true),
    (NlNl, "nl_NL", ',', '.', (3, 3), Before, true),
    (PtBr, "pt_BR", ',', '.', (3, 3), Before, true),
    (JaJp, "ja_JP", '.', ',', (3, 3), Before, false),
    (KoKr, "ko_KR", '.', ',', (3, 3), Before, false),
    (ZhCn, "zh_CN", '.', ',', (3, 3), Before, false),
    (SvSe, "sv_SE", ',', '\u{a0}', (3, 3), After, true),
    (TrTr, "tr_TR", ',', '.', (3, 3), Before, false),
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EnUs
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Render a money value per the locale's conventions.
pub(crate) fn render(money: &Money, locale: Locale) -> String {
    let conventions = locale.conventions();
    let amount = money.amount();
    let text = amount.abs().to_string();
    let mut parts = text.splitn(2, '.');
    let integer_digits = parts.next().unwrap_or("0");
    let fraction = parts.next();

    let mut number = group_digits(integer_digits, &conventions);
    if let Some(fraction) = fraction {
        number.push(conventions.decimal_separator);
        number.push_str(fraction);
    }

    let sign = if money.is_negative() { "-" } else { "" };
    let joiner = if conventions.symbol_spaced { "\u{a0}" } else { "" };
    let symbol = money.currency().symbol();
    match conventions.symbol_position {
        SymbolPosition::Before => format!("{}{}{}{}", sign, symbol, joiner, number),
        SymbolPosition::After => format!("{}{}{}{}", sign, number, joiner, symbol),
    }
}

/// Insert grouping separators into a run of integer digits, working
/// from the rightmost group outward.
fn group_digits(digits: &str, conventions: &Conventions) -> String {
    let (primary, recurring) = conventions.grouping;
    let chars: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = chars.len();
    let mut size = primary;
    while end > size {
        groups.push(chars[end - size..end].iter().collect());
        end -= size;
        size = recurring;
    }
    groups.push(chars[..end].iter().collect());
    groups.reverse();
    groups.join(&conventions.grouping_separator.to_string())
}
