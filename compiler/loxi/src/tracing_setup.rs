use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Does nothing unless `LOX_LOG` or
/// `RUST_LOG` is set, e.g. `LOX_LOG=lox_parse=debug` or
/// `LOX_LOG=lox_eval=trace`. `LOX_LOG` wins when both are set. Output
/// goes to stderr so it never mixes with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("LOX_LOG").is_ok() {
            EnvFilter::from_env("LOX_LOG")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
