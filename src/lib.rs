//! # message_formatter
//!
//! A small message formatting engine for human-readable diagnostics and log
//! lines.
//!
//! ## What does it do?
//!
//! A pattern mixes literal text with `{...}` placeholders and `[...]` optional
//! sections. Placeholders are replaced by rendered arguments; the renderer
//! picks a textual form for every value from its type, so lists are joined
//! into prose, numbers get thousands separators and floats a fixed precision.
//!
//! ## Key Features
//!
//! - **Positional, named and fixed placeholders**: `{}`, `{name}`, `{3}`
//! - **Number formatting**: `{.2}`, `{+}`, `{#x}`, `{#b}`, `{#o}`, `{#e}`
//! - **List joining**: `{:and}` renders `a, b, and c`
//! - **Type queries**: `{:?}` renders the argument's type name
//! - **Optional sections**: `[, see {url}?]` disappears when `url` is empty
//! - **Escapes**: `{{`, `}}`, `[[`, `]]` produce literal delimiters
//! - **Serde Compatible**: any `Serialize` struct or map can be the argument set
//!
//! ## Quick Start
//!
//! ```rust
//! use message_formatter::{args, format};
//!
//! let message = format(
//!     "Expected {0:or}, got {1:?}[ at line {line}?]",
//!     &args![vec!["int", "float"], "text", "line" => 12],
//! )
//! .unwrap();
//! assert_eq!(message, "Expected int or float, got string at line 12");
//! ```
//!
//! ### Formatting Serializable Arguments
//!
//! ```rust
//! use message_formatter::format_serialized;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Transfer {
//!     amount: f64,
//!     from: String,
//!     to: String,
//! }
//!
//! let transfer = Transfer {
//!     amount: 1234.5,
//!     from: "checking".to_string(),
//!     to: "savings".to_string(),
//! };
//!
//! let message = format_serialized("Moved {amount.2} from {from} to {to}", &transfer).unwrap();
//! assert_eq!(message, "Moved 1,234.50 from checking to savings");
//! ```
//!
//! ### Custom Separators
//!
//! ```rust
//! use message_formatter::{args, format_with_options, FormatOptions};
//!
//! let options = FormatOptions::new()
//!     .with_decimal_point(',')
//!     .with_thousands_separator('.');
//!
//! let message = format_with_options("{.2}", &args![1234567.891], &options).unwrap();
//! assert_eq!(message, "1.234.567,89");
//! ```
//!
//! ## Formatting Pipeline
//!
//! 1. Optional sections are resolved: kept sections lose their outer
//!    brackets, dropped sections disappear.
//! 2. Placeholders are replaced by their rendered arguments.
//! 3. Doubled delimiters in the whole output collapse to single ones.
//!
//! Either the complete message is returned or an [`Error`]; there is no
//! partial output.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Placeholders and number formatting
//! - **`macro.rs`** - Building argument sets with the args! macro
//! - **`optional_sections.rs`** - Sections that vanish with their arguments
//! - **`convertible_values.rs`** - Custom types via the Convertible trait
//! - **`custom_options.rs`** - Changing the decimal point and grouping
//!
//! Run any example with: `cargo run --example <name>`

pub mod arguments;
pub mod error;
pub mod escape;
pub mod macros;
pub mod options;
pub mod placeholder;
pub mod ser;
pub mod value;

mod number;
mod render;
mod section;

pub use arguments::{Arguments, Key};
pub use error::{BoxError, Error, Result};
pub use options::FormatOptions;
pub use ser::{ArgumentsSerializer, ValueSerializer};
pub use value::{Convertible, Opaque, Value};

use serde::Serialize;
use tracing::trace;

/// Formats `pattern` with `arguments` using the default [`FormatOptions`].
///
/// # Examples
///
/// ```rust
/// use message_formatter::{args, format};
///
/// assert_eq!(
///     format("{} items cost {total.2}", &args![3, "total" => 1500]).unwrap(),
///     "3 items cost 1,500.00"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::MissingPlaceholder`] if a placeholder has no argument,
/// [`Error::InvalidArgument`] if an argument cannot be rendered, or the
/// error of a failing [`Convertible`] conversion.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(pattern: &str, arguments: &Arguments) -> Result<String> {
    format_with_options(pattern, arguments, &FormatOptions::default())
}

/// Formats `pattern` with `arguments` using custom [`FormatOptions`].
///
/// # Examples
///
/// ```rust
/// use message_formatter::{args, format_with_options, FormatOptions};
///
/// let options = FormatOptions::new().without_grouping();
/// assert_eq!(
///     format_with_options("{}", &args![1000000], &options).unwrap(),
///     "1000000"
/// );
/// ```
///
/// # Errors
///
/// Same as [`format`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_with_options(
    pattern: &str,
    arguments: &Arguments,
    options: &FormatOptions,
) -> Result<String> {
    trace!(pattern = pattern, arguments = arguments.len(), "formatting message");
    let resolved = section::resolve_sections(pattern, arguments);
    let rendered = render::render_placeholders(&resolved, arguments, options)?;
    Ok(escape::unescape(&rendered).into_owned())
}

/// Formats `pattern` with the fields of any serializable map, struct or
/// sequence.
///
/// # Examples
///
/// ```rust
/// use message_formatter::format_serialized;
/// use std::collections::BTreeMap;
///
/// let mut fields = BTreeMap::new();
/// fields.insert("user", "alice");
/// fields.insert("role", "admin");
///
/// assert_eq!(
///     format_serialized("{user} is {role}", &fields).unwrap(),
///     "alice is admin"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedArguments`] if `arguments` does not serialize
/// to a map, struct or sequence, and otherwise the same errors as [`format`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_serialized<T>(pattern: &str, arguments: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let arguments = to_arguments(arguments)?;
    format(pattern, &arguments)
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// Maps and structs keep their values only, in field order.
///
/// # Examples
///
/// ```rust
/// use message_formatter::{to_value, Value};
///
/// let value = to_value(&vec![1, 2, 3]).unwrap();
/// assert_eq!(
///     value,
///     Value::List(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` implementation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Converts a serializable map, struct or sequence into [`Arguments`].
///
/// Struct fields become named arguments, sequence elements positional ones,
/// and map keys are canonicalised like [`Key::parse`].
///
/// # Examples
///
/// ```rust
/// use message_formatter::{to_arguments, Key, Value};
///
/// let arguments = to_arguments(&("first", "second")).unwrap();
/// assert_eq!(arguments.get(&Key::Index(1)), Some(&Value::from("second")));
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedArguments`] for scalars, enum variants with
/// fields, and other shapes that have no keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_arguments<T>(value: &T) -> Result<Arguments>
where
    T: ?Sized + Serialize,
{
    value.serialize(ArgumentsSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_named_positional_fixed() {
        let arguments = args!["positional", "placeholder" => "named", 42 => "fixed"];
        assert_eq!(
            format("{placeholder} {} {42}", &arguments).unwrap(),
            "named positional fixed"
        );
    }

    #[test]
    fn test_format_runs_sections_before_placeholders() {
        let arguments = args!["name" => "x", "note" => ""];
        assert_eq!(
            format("{name}[ ({note}?)]", &arguments).unwrap(),
            "x"
        );
        assert_eq!(
            format("{name}[ ({name}?)]", &arguments).unwrap(),
            "x (x)"
        );
    }

    #[test]
    fn test_unescape_applies_to_rendered_values() {
        assert_eq!(format("{}", &args!["{{raw}}"]).unwrap(), "{raw}");
        assert_eq!(format("{{}} [[x]]", &Arguments::new()).unwrap(), "{} [x]");
    }

    #[test]
    fn test_format_serialized_rejects_scalars() {
        let err = format_serialized("{}", &5).unwrap_err();
        assert!(matches!(err, Error::UnsupportedArguments(_)));
    }

    #[test]
    fn test_errors_carry_no_partial_output() {
        let err = format("ok {} {missing}", &args!["fine"]).unwrap_err();
        assert!(matches!(err, Error::MissingPlaceholder { .. }));
    }
}
