//! The `explain` command: long-form help for diagnostic codes.

use lox_diagnostic::ErrorCode;

use super::report;
use crate::DriverError;

/// Text shown for `code_str`, or an error if it is not a known code.
pub fn explain(code_str: &str) -> Result<String, DriverError> {
    let code: ErrorCode = code_str
        .parse()
        .map_err(|()| DriverError::UnknownErrorCode(code_str.to_string()))?;
    Ok(format!("{code}\n\n{}", code.explanation()))
}

pub fn explain_error(code_str: &str) -> i32 {
    match explain(code_str) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(error) => {
            let status = report(&error);
            eprintln!("Codes have the format EXXXX, for example E1001 or E6001.");
            status
        }
    }
}
