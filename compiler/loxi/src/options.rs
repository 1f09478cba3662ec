//! Run options parsed from command line flags.

use crate::DriverError;

/// Knobs shared by every command that runs source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RunOptions {
    /// Evaluate the statements that did parse even when the unit has
    /// lexical or syntax errors.
    pub keep_going: bool,
    /// Maximum errors reported per unit of input. 0 means unlimited.
    pub error_limit: usize,
}

impl RunOptions {
    /// Split `args` into options and positional arguments.
    ///
    /// Anything starting with `-` must be a known flag.
    pub fn parse<'a>(
        args: impl IntoIterator<Item = &'a str>,
    ) -> Result<(Self, Vec<&'a str>), DriverError> {
        let mut options = RunOptions::default();
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--keep-going" || arg == "-k" {
                options.keep_going = true;
            } else if let Some(value) = arg.strip_prefix("--error-limit=") {
                options.error_limit = value
                    .parse()
                    .map_err(|_| DriverError::InvalidErrorLimit(value.to_string()))?;
            } else if arg.starts_with('-') {
                return Err(DriverError::UnknownOption(arg.to_string()));
            } else {
                positional.push(arg);
            }
        }
        Ok((options, positional))
    }
}
