//! Sections that vanish together with their arguments.
//!
//! Run with: cargo run --example optional_sections

use message_formatter::{args, format, Value};
use std::error::Error;

const PATTERN: &str = "Could not open {path}[ (errno {errno}?)][: {reasons:and}?]";

fn main() -> Result<(), Box<dyn Error>> {
    let full = args![
        "path" => "/etc/app.toml",
        "errno" => 13,
        "reasons" => vec!["permission denied", "file is locked"],
    ];
    println!("{}", format(PATTERN, &full)?);

    // Null, zero, empty strings and empty lists all drop their section
    let bare = args![
        "path" => "/etc/app.toml",
        "errno" => Value::Null,
        "reasons" => Vec::<String>::new(),
    ];
    let message = format(PATTERN, &bare)?;
    println!("{}", message);
    assert_eq!(message, "Could not open /etc/app.toml");

    // Escaped brackets are literal text
    println!("{}", format("[[{}]][ optional {}?]", &args!["kept", ""])?);

    Ok(())
}
