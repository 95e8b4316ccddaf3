//! Placeholder resolution and value rendering.
//!
//! [`render_placeholders`] walks the section-resolved text, resolves every
//! placeholder to an argument and renders it through [`render_value`]. Lists
//! and iterable convertibles are joined by [`render_list`], which recurses into
//! [`render_value`] for every element.

use crate::number::{render_number, Number};
use crate::placeholder::{NumericFormat, Placeholders};
use crate::{Arguments, Error, FormatOptions, Key, Result, Value};
use std::fmt::Write;
use tracing::trace;

/// The rendering modifiers of a single placeholder.
#[derive(Clone, Copy, Debug)]
struct Params<'a> {
    sign: bool,
    decimals: usize,
    format: Option<NumericFormat>,
    conjunction: Option<&'a str>,
    options: &'a FormatOptions,
}

/// Replaces every placeholder of `text` with its rendered argument.
///
/// The positional counter lives for exactly one call and advances once per
/// keyless placeholder, left to right.
pub(crate) fn render_placeholders(
    text: &str,
    arguments: &Arguments,
    options: &FormatOptions,
) -> Result<String> {
    let mut output = String::with_capacity(text.len());
    let mut copied = 0;
    let mut position = 0;

    for token in Placeholders::new(text) {
        output.push_str(&text[copied..token.span.start]);
        copied = token.span.end;

        let placeholder = token.placeholder;
        let is_type_query = placeholder.is_type_query();
        let key = match placeholder.key {
            Some(key) => key,
            None => {
                position += 1;
                Key::Index(position - 1)
            }
        };

        let Some(value) = arguments.get(&key) else {
            if is_type_query {
                output.push_str("void");
                continue;
            }
            return Err(Error::missing_placeholder(
                key,
                arguments.keys().cloned().collect(),
            ));
        };

        trace!(key = %key, type_name = value.type_name(), "placeholder resolved");
        let params = Params {
            sign: placeholder.sign,
            decimals: placeholder.decimals.unwrap_or(0),
            format: placeholder.format,
            conjunction: placeholder.conjunction,
            options,
        };
        output.push_str(&render_value(value, &params)?);
    }

    output.push_str(&text[copied..]);
    Ok(output)
}

fn render_value(value: &Value, params: &Params<'_>) -> Result<String> {
    if params.conjunction == Some("?") {
        return Ok(match value {
            Value::Opaque(opaque) => opaque.describe(),
            _ => value.type_name().to_string(),
        });
    }

    match value {
        Value::Null => Ok("NULL".to_string()),
        Value::String(s) => Ok(render_string(s, params.format)),
        Value::List(values) => render_list(value.type_name(), values, params),
        Value::Bool(b) => Ok(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Value::Integer(i) => Ok(render_numeric(Number::Integer(*i), params)),
        Value::Float(f) => Ok(render_numeric(Number::Float(*f), params)),
        Value::Convertible(convertible) => {
            if let Some(display) = convertible.as_display() {
                let mut rendered = String::new();
                write!(rendered, "{}", display).map_err(|e| Error::conversion(Box::new(e)))?;
                return Ok(render_string(&rendered, params.format));
            }
            if let Some(result) = convertible.try_to_string() {
                let rendered = result.map_err(Error::conversion)?;
                return Ok(render_string(&rendered, params.format));
            }
            if let Some(values) = convertible.to_list() {
                return render_list(convertible.type_name(), &values, params);
            }
            if let Some(result) = convertible.to_int() {
                let i = result.map_err(Error::conversion)?;
                return render_value(&Value::Integer(i), params);
            }
            if let Some(result) = convertible.to_float() {
                let f = result.map_err(Error::conversion)?;
                return render_value(&Value::Float(f), params);
            }
            Err(Error::invalid_argument(convertible.type_name()))
        }
        Value::Opaque(opaque) => Err(Error::invalid_argument(opaque.type_name())),
    }
}

fn render_numeric(number: Number, params: &Params<'_>) -> String {
    render_number(
        number,
        params.sign,
        params.decimals,
        params.format,
        params.options,
    )
}

/// Renders a list as `empty {label}`, a single element, or the joined
/// elements.
fn render_list(label: &str, values: &[Value], params: &Params<'_>) -> Result<String> {
    if values.is_empty() {
        return Ok(format!("empty {}", label));
    }
    let rendered = values
        .iter()
        .map(|value| render_value(value, params))
        .collect::<Result<Vec<_>>>()?;
    Ok(join_rendered(rendered, params.conjunction))
}

/// Joins already rendered items: `A`, `A, B` / `A and B`,
/// `A, B, C` / `A, B, and C`.
///
/// Returns an empty string for no items.
pub(crate) fn join_rendered(mut items: Vec<String>, conjunction: Option<&str>) -> String {
    let Some(last) = items.pop() else {
        return String::new();
    };
    if items.is_empty() {
        return last;
    }

    let mut joined = items.join(", ");
    match (items.len(), conjunction) {
        (1, Some(conjunction)) => {
            joined.push(' ');
            joined.push_str(conjunction);
            joined.push(' ');
        }
        (_, Some(conjunction)) => {
            joined.push_str(", ");
            joined.push_str(conjunction);
            joined.push(' ');
        }
        (_, None) => joined.push_str(", "),
    }
    joined.push_str(&last);
    joined
}

fn render_string(s: &str, format: Option<NumericFormat>) -> String {
    match format {
        Some(NumericFormat::Caret) => {
            let mut out = String::with_capacity(s.len());
            for ch in s.chars() {
                match ch {
                    '\u{0}'..='\u{1f}' => {
                        out.push('^');
                        out.push(char::from(ch as u8 + 0x40));
                    }
                    '\u{7f}' => out.push_str("^?"),
                    _ => out.push(ch),
                }
            }
            out
        }
        Some(NumericFormat::Pictures) => s
            .chars()
            .map(|ch| match ch {
                '\u{0}'..='\u{1f}' => char::from_u32(0x2400 + ch as u32).unwrap_or(ch),
                '\u{7f}' => '\u{2421}',
                _ => ch,
            })
            .collect(),
        _ => s.to_string(),
    }
}
