use std::io::{self, Write};

const RED: &str = "\x1b[91m";
const GREEN: &str = "\x1b[92m";
const RESET: &str = "\x1b[m";

/// Starts the logger. Only warnings are shown unless RUST_LOG asks for more.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

/// Wraps `text` in the colour used for failures.
pub fn error_line(text: &str) -> String {
    format!("{}{}{}", RED, text, RESET)
}

/// Wraps `text` in the colour used for a finished job.
pub fn done_line(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Prints an error, and what caused it, in red on stderr.
pub fn print_error(err: &anyhow::Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", error_line(&format!("> {:#}", err)));
}

/// Prints the success message in green on stdout.
pub fn print_done(text: &str) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", done_line(text));
}
