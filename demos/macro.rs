//! Building argument sets with the args! macro.
//!
//! Run with: cargo run --example macro

use message_formatter::{args, format, Key, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Bare values take the next free index, `key => value` pairs are keyed
    let arguments = args!["positional", "placeholder" => "named", 42 => "fixed", "after"];

    for (key, value) in &arguments {
        println!("{:>12} => {:?}", key.to_string(), value);
    }

    assert_eq!(arguments.get(&Key::Index(43)), Some(&Value::from("after")));

    let message = format("{placeholder}, {42}, {}, {43}", &arguments)?;
    println!("{}", message);

    // Lists are joined into prose
    let colors = args![vec!["red", "green", "blue"]];
    println!("{}", format("Pick {:or}.", &colors)?);

    Ok(())
}
