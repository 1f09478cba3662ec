//! Lox interpreter CLI.

use loxi::commands::{explain_error, lex_file, parse_file, run_file, run_prompt};
use loxi::{init_tracing, DriverError, RunOptions, EXIT_USAGE};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    std::process::exit(dispatch(&args));
}

fn dispatch(args: &[&str]) -> i32 {
    let Some(&command) = args.first() else {
        return run_prompt(RunOptions::default());
    };

    match command {
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            0
        }
        "explain" | "--explain" => {
            let [code] = &args[1..] else {
                eprintln!("Usage: lox explain <CODE>");
                eprintln!("Example: lox explain E6001");
                return EXIT_USAGE;
            };
            explain_error(code)
        }
        "lex" => {
            let [path] = &args[1..] else {
                eprintln!("Usage: lox lex <file>");
                return EXIT_USAGE;
            };
            lex_file(path)
        }
        "parse" => {
            let [path] = &args[1..] else {
                eprintln!("Usage: lox parse <file>");
                return EXIT_USAGE;
            };
            parse_file(path)
        }
        "run" => with_options(&args[1..], |options, files| match files {
            [path] => run_file(path, options),
            _ => {
                eprintln!("Usage: lox run <file> [--keep-going] [--error-limit=N]");
                EXIT_USAGE
            }
        }),
        "repl" => with_options(&args[1..], |options, files| match files {
            [] => run_prompt(options),
            _ => {
                eprintln!("Usage: lox repl [--keep-going] [--error-limit=N]");
                EXIT_USAGE
            }
        }),
        // `lox [options] [file]`
        _ => with_options(args, |options, files| match files {
            [] => run_prompt(options),
            [path] => run_file(path, options),
            _ => {
                eprintln!("Usage: lox [options] [file]");
                eprintln!();
                print_usage();
                EXIT_USAGE
            }
        }),
    }
}

fn with_options(args: &[&str], f: impl FnOnce(RunOptions, &[&str]) -> i32) -> i32 {
    match RunOptions::parse(args.iter().copied()) {
        Ok((options, files)) => f(options, &files),
        Err(error) => usage_error(&error),
    }
}

fn usage_error(error: &DriverError) -> i32 {
    eprintln!("error: {error}");
    eprintln!("Run `lox help` for usage.");
    error.exit_code()
}

fn print_usage() {
    println!("Lox interpreter");
    println!();
    println!("Usage: lox [options] [file]");
    println!("       lox <command> [args]");
    println!();
    println!("With no file, starts an interactive prompt. Type `end` to quit.");
    println!();
    println!("Commands:");
    println!("  run <file>          Run a Lox program");
    println!("  repl                Start the interactive prompt");
    println!("  lex <file>          Tokenize and display tokens");
    println!("  parse <file>        Parse and print statements back as source");
    println!("  explain <code>      Explain a diagnostic code (e.g., E6001)");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --keep-going, -k    Evaluate what parsed even after syntax errors");
    println!("  --error-limit=<n>   Stop reporting after n errors (0 = no limit)");
    println!();
    println!("Environment:");
    println!("  LOX_LOG             Log filter, e.g. LOX_LOG=lox_parse=debug");
    println!();
    println!("Exit status:");
    println!("  0 success, 64 usage error, 65 syntax error, 70 runtime error,");
    println!("  74 unreadable input file");
}
