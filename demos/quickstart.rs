//! A quick tour: build some money, do arithmetic, format for display.

use money_core::{num, Currency, Locale, Money};

fn main() -> Result<(), money_core::Error> {
    let price = Money::parse("9.95", Currency::USD)?;
    let tip = price * num!(0.15);
    let total = price.checked_add(tip)?;

    println!("price: {}", price);
    println!("tip:   {}", tip);
    println!("total: {}", total);
    println!("en_US: {}", total.format(Locale::EnUs));
    println!("fr_FR: {}", Money::parse("5.56", Currency::EUR)?.format(Locale::FrFr));
    println!("yen:   {}", Money::from_sub_units(1250, Currency::JPY));

    Ok(())
}
