//! Error types for message formatting.
//!
//! A [`format`](crate::format) call either returns the fully rendered message
//! or one of the errors below. No partial output is ever returned.
//!
//! ## Error Categories
//!
//! - **Missing placeholders**: a placeholder key has no matching argument
//! - **Invalid arguments**: a value has no meaningful textual representation
//! - **Conversion failures**: a [`Convertible`](crate::Convertible) value failed
//!   while converting itself; the original error is passed through untouched
//! - **Unsupported arguments**: the serde bridge was handed something that is
//!   not a map, struct, or sequence
//!
//! ## Examples
//!
//! ```rust
//! use message_formatter::{format, Arguments, Error};
//!
//! let result = format("{}", &Arguments::new());
//! assert!(matches!(result, Err(Error::MissingPlaceholder { .. })));
//!
//! if let Err(err) = result {
//!     assert_eq!(
//!         err.to_string(),
//!         "Placeholder `0` not found in arguments, the following placeholders were present: none"
//!     );
//! }
//! ```

use crate::arguments::Key;
use crate::render::join_rendered;
use std::fmt;
use thiserror::Error;

/// Boxed error returned by the fallible [`Convertible`](crate::Convertible)
/// capabilities.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Represents all possible errors that can occur while formatting a message.
#[derive(Debug, Error)]
pub enum Error {
    /// A placeholder key did not resolve and the token did not ask for `void`.
    #[error(
        "Placeholder `{key}` not found in arguments, the following placeholders were present: {}",
        present_keys(.present)
    )]
    MissingPlaceholder { key: Key, present: Vec<Key> },

    /// A value that cannot be rendered without a type-query.
    #[error("Cannot format {type_name}")]
    InvalidArgument { type_name: String },

    /// Failure raised by a convertible value's own conversion.
    #[error(transparent)]
    Conversion(BoxError),

    /// The serde bridge only builds arguments from maps, structs, and sequences.
    #[error("Unsupported arguments: {0}")]
    UnsupportedArguments(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a missing placeholder error listing every key that was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use message_formatter::{Error, Key};
    ///
    /// let err = Error::missing_placeholder(Key::Index(3), vec![Key::Index(0), Key::Index(1), Key::Index(2)]);
    /// assert!(err.to_string().ends_with("present: 0, 1, and 2"));
    /// ```
    pub fn missing_placeholder(key: Key, present: Vec<Key>) -> Self {
        Error::MissingPlaceholder { key, present }
    }

    /// Creates an invalid argument error for a value of the given type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use message_formatter::Error;
    ///
    /// let err = Error::invalid_argument("resource");
    /// assert_eq!(err.to_string(), "Cannot format resource");
    /// ```
    pub fn invalid_argument(type_name: &str) -> Self {
        Error::InvalidArgument {
            type_name: type_name.to_string(),
        }
    }

    /// Wraps the failure of a conversion capability without altering it.
    pub fn conversion(err: BoxError) -> Self {
        Error::Conversion(err)
    }

    /// Creates an unsupported arguments error for the serde bridge.
    pub fn unsupported_arguments(what: &str) -> Self {
        Error::UnsupportedArguments(what.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

fn present_keys(present: &[Key]) -> String {
    if present.is_empty() {
        return "none".to_string();
    }
    join_rendered(present.iter().map(Key::to_string).collect(), Some("and"))
}

pub type Result<T> = std::result::Result<T, Error>;
