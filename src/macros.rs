//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates a RegexPattern for the ordered scanner list

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$value` - The token's TokenValue payload
/// * `$text` - The exact source text the token was scanned from
/// * `$trivia` - The whitespace that followed the token
/// * `$span` - The source span of `$text`
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenValue::Number(42.0), "42".to_string(), " ".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($value:expr, $text:expr, $trivia:expr, $span:expr) => {
        Token {
            value: $value,
            text: $text,
            trivia: $trivia,
            span: $span,
        }
    };
}

/// Creates a RegexPattern from a pattern literal and its handler.
///
/// The pattern must be anchored with `^` so that it only matches at the
/// lexer's current position.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(r"^\w+", word_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:literal, $handler:expr) => {
        RegexPattern {
            regex: Regex::new($regex).unwrap(),
            handler: $handler,
        }
    };
}
