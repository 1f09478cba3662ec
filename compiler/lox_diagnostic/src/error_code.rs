//! Error codes for all interpreter diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the phase. Used by `lox explain`.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
/// - E9xxx: Reporting notes
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unrecognized character
    E0002,
    /// Source longer than a span can address
    E0003,

    // Parser Errors (E1xxx)
    /// Expected expression
    E1001,
    /// Missing closing paren
    E1002,
    /// Missing semicolon after statement
    E1003,
    /// Missing variable name after `var`
    E1004,
    /// Missing semicolon after variable declaration
    E1005,

    // Runtime Errors (E6xxx)
    /// Value cannot be converted to a number
    E6001,
    /// Operator does not accept `nil`
    E6002,
    /// String mixed with a non-string operand
    E6003,
    /// Operator not defined for two strings
    E6004,
    /// Undefined variable
    E6005,

    // Reporting (E9xxx)
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E9002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E9002 => "E9002",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Long-form explanation shown by `lox explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A string literal was opened with `\"` but never closed.\n\
                 Strings may span lines; the lexer scanned to the end of the input\n\
                 without finding the closing quote. No token is produced for it."
            }
            ErrorCode::E0002 => {
                "The lexer found a character that does not start any token,\n\
                 for example `@` or `#`. The character is skipped."
            }
            ErrorCode::E0003 => {
                "Source positions are 32-bit byte offsets, so a single file or\n\
                 REPL line may be at most 4294967295 bytes long. Nothing was scanned."
            }
            ErrorCode::E1001 => {
                "An expression was required here: a literal, a variable name,\n\
                 a parenthesized expression, or a prefix `!`/`-` applied to one."
            }
            ErrorCode::E1002 => "A `(` was opened but the matching `)` is missing.",
            ErrorCode::E1003 => "Every statement must end with `;`.",
            ErrorCode::E1004 => "`var` must be followed by the name being declared.",
            ErrorCode::E1005 => {
                "A variable declaration must end with `;`, optionally after\n\
                 an `= expression` initializer."
            }
            ErrorCode::E6001 => {
                "Arithmetic converts its operands to numbers. Booleans convert to\n\
                 0 and 1; `nil` and strings cannot be converted."
            }
            ErrorCode::E6002 => "Comparison operators do not accept `nil` on either side.",
            ErrorCode::E6003 => {
                "A string can only be combined or compared with another string."
            }
            ErrorCode::E6004 => {
                "Only `+` (concatenation) and the comparison operators are\n\
                 defined for two strings."
            }
            ErrorCode::E6005 => {
                "A variable was read before any `var` declaration bound it."
            }
            ErrorCode::E9002 => "Reporting stopped after the configured error limit.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string like `"E6001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}
