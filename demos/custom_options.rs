//! Changing the decimal point and thousands grouping with FormatOptions.
//!
//! Run with: cargo run --example custom_options

use message_formatter::{args, format, format_with_options, FormatOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let arguments = args![1234567.891, -9876];
    let pattern = "{0.2} / {1}";

    // Default: `.` decimal point, `,` grouping
    println!("Default:      {}", format(pattern, &arguments)?);

    // Continental style
    let continental = FormatOptions::new()
        .with_decimal_point(',')
        .with_thousands_separator('.');
    println!("Continental:  {}", format_with_options(pattern, &arguments, &continental)?);

    // Thin spaces, as in SI style
    let si = FormatOptions::new()
        .with_decimal_point('.')
        .with_thousands_separator('\u{2009}');
    println!("SI:           {}", format_with_options(pattern, &arguments, &si)?);

    // No grouping at all
    let plain = FormatOptions::new().without_grouping();
    let message = format_with_options(pattern, &arguments, &plain)?;
    println!("Ungrouped:    {}", message);
    assert_eq!(message, "1234567.89 / -9876");

    Ok(())
}
