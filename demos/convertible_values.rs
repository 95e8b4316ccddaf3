//! Custom types via the Convertible trait.
//!
//! Run with: cargo run --example convertible_values

use message_formatter::{args, format, BoxError, Convertible, Opaque, Value};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct Version {
    major: u32,
    minor: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

impl Convertible for Version {
    fn type_name(&self) -> &str {
        "Version"
    }

    fn as_display(&self) -> Option<&dyn fmt::Display> {
        Some(self)
    }
}

#[derive(Debug)]
struct Cents(i64);

impl Convertible for Cents {
    fn type_name(&self) -> &str {
        "Cents"
    }

    fn to_float(&self) -> Option<Result<f64, BoxError>> {
        Some(Ok(self.0 as f64 / 100.0))
    }
}

#[derive(Debug)]
struct Inventory(Vec<&'static str>);

impl Convertible for Inventory {
    fn type_name(&self) -> &str {
        "Inventory"
    }

    fn to_list(&self) -> Option<Vec<Value>> {
        Some(self.0.iter().map(|item| Value::from(*item)).collect())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let arguments = args![
        "version" => Value::convertible(Version { major: 2, minor: 7 }),
        "price" => Value::convertible(Cents(123456)),
        "stock" => Value::convertible(Inventory(vec!["bolts", "nuts", "washers"])),
        "empty" => Value::convertible(Inventory(vec![])),
        "socket" => Opaque::new("socket"),
    ];

    println!("{}", format("Release {version} ({version:?})", &arguments)?);
    println!("{}", format("Price: {price.2}", &arguments)?);
    println!("{}", format("In stock: {stock:and}; {empty}", &arguments)?);
    println!("{}", format("Handle: {socket:?}", &arguments)?);

    // Opaque values can only be type-queried
    match format("{socket}", &arguments) {
        Ok(_) => unreachable!("opaque values have no text form"),
        Err(err) => println!("Error: {}", err),
    }

    Ok(())
}
