//! Configuration options for message formatting.
//!
//! [`FormatOptions`] controls the separators used when numbers are rendered
//! in plain decimal notation. The defaults match the conventional grouping
//! (`1,234.50`); the options are explicit separator choices, not locale data.
//!
//! ## Examples
//!
//! ```rust
//! use message_formatter::{args, format_with_options, FormatOptions};
//!
//! let options = FormatOptions::new()
//!     .with_decimal_point(',')
//!     .with_thousands_separator('.');
//! let message = format_with_options("{.2}", &args![1234.5], &options).unwrap();
//! assert_eq!(message, "1.234,50");
//!
//! let options = FormatOptions::new().without_grouping();
//! let message = format_with_options("{}", &args![1234567], &options).unwrap();
//! assert_eq!(message, "1234567");
//! ```

/// Configuration options for [`format_with_options`](crate::format_with_options).
#[derive(Clone, Debug, PartialEq)]
pub struct FormatOptions {
    pub decimal_point: char,
    pub thousands_separator: Option<char>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            decimal_point: '.',
            thousands_separator: Some(','),
        }
    }
}

impl FormatOptions {
    /// Creates default options (`.` decimal point, `,` thousands separator).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use message_formatter::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.decimal_point, '.');
    /// assert_eq!(options.thousands_separator, Some(','));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character placed between the integer and fractional digits.
    #[must_use]
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Sets the character placed between groups of three integer digits.
    #[must_use]
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = Some(separator);
        self
    }

    /// Disables digit grouping entirely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use message_formatter::FormatOptions;
    ///
    /// let options = FormatOptions::new().without_grouping();
    /// assert_eq!(options.thousands_separator, None);
    /// ```
    #[must_use]
    pub fn without_grouping(mut self) -> Self {
        self.thousands_separator = None;
        self
    }
}
