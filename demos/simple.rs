//! Placeholders and number formatting.
//!
//! Run with: cargo run --example simple

use message_formatter::{args, format};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let arguments = args!["Alice Johnson", "count" => 1234, "total" => 98765.4321];

    // Positional and named placeholders
    let message = format("{} placed {count} orders worth {total.2}", &arguments)?;
    println!("{}", message);
    assert_eq!(message, "Alice Johnson placed 1,234 orders worth 98,765.43");

    // Alternative notations for numbers
    let numbers = args![255, 0.000123];
    println!("{}", format("{0#x} {0#o} {0#b}", &numbers)?);
    println!("{}", format("{1#e} {1.3#e} {+0}", &numbers)?);

    // Type queries
    println!("{}", format("{0:?} and {1:?}", &numbers)?);

    Ok(())
}
