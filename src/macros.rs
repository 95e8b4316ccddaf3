/// Builds an [`Arguments`](crate::Arguments) set.
///
/// Bare values are appended at the next free index; `key => value` pairs are
/// inserted under `key`, which may be a name or an index.
///
/// # Examples
///
/// ```rust
/// use message_formatter::{args, format};
///
/// let arguments = args!["positional", "placeholder" => "named", 42 => "fixed"];
/// assert_eq!(
///     format("{}, {placeholder}, {42}", &arguments).unwrap(),
///     "positional, named, fixed"
/// );
/// ```
#[macro_export]
macro_rules! args {
    // Done
    (@push $arguments:ident;) => {};

    // Keyed argument
    (@push $arguments:ident; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $arguments.insert($key, $value);
        $crate::args!(@push $arguments; $($($rest)*)?);
    };

    // Positional argument
    (@push $arguments:ident; $value:expr $(, $($rest:tt)*)?) => {
        $arguments.push($value);
        $crate::args!(@push $arguments; $($($rest)*)?);
    };

    () => {
        $crate::Arguments::new()
    };

    ($($tokens:tt)+) => {{
        let mut arguments = $crate::Arguments::new();
        $crate::args!(@push arguments; $($tokens)+);
        arguments
    }};
}
